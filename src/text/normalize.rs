//! Text normalisation: ASCII folding, sentence splitting, token cleaning.

use unicode_normalization::UnicodeNormalization;

use crate::constants::MIN_TOKEN_CHARS;

/// Folds text to ASCII: NFKD decomposition, then every non-ASCII code point
/// is dropped (`"café"` becomes `"cafe"`).
pub fn to_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// ASCII text with control characters, double quotes, colons and question
/// marks replaced by spaces. Used for author-name lookups.
pub fn author_search_text(text: &str) -> String {
    to_ascii(text)
        .chars()
        .map(|c| {
            if c.is_ascii_control() || matches!(c, '"' | ':' | '?') {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Strips leading and trailing ASCII punctuation from a token.
pub fn trim_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{2019}' | '\u{201D}')
}

/// Splits text into trimmed, non-empty sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` (optionally followed by
/// closing quotes or brackets) that is followed by whitespace or the end of
/// the text, and at every line break.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c == '\n' || c == '\r' {
            push_sentence(&mut sentences, &text[start..idx]);
            start = idx + c.len_utf8();
            continue;
        }

        if !is_terminator(c) {
            continue;
        }

        let mut end = idx + c.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if is_terminator(next) || is_closer(next) {
                end = next_idx + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = match chars.peek() {
            None => true,
            Some(&(_, next)) => next.is_whitespace(),
        };
        if at_boundary {
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

/// Heuristic proper-noun check: a capitalised word that does not open the
/// sentence.
fn looks_like_proper_noun(token: &str, position: usize) -> bool {
    position > 0 && token.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Cleans one sentence into the tokens handed to the embedder.
///
/// Drops punctuation-only tokens, proper nouns and tokens shorter than
/// [`MIN_TOKEN_CHARS`]; surrounding punctuation is stripped from the rest.
pub fn clean_tokens(sentence: &str) -> Vec<&str> {
    sentence
        .split_whitespace()
        .enumerate()
        .filter_map(|(position, raw)| {
            let token = trim_punctuation(raw);
            if token.is_empty() || token.chars().count() < MIN_TOKEN_CHARS {
                return None;
            }
            if looks_like_proper_noun(token, position) {
                return None;
            }
            Some(token)
        })
        .collect()
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
