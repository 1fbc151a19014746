use std::collections::HashSet;

use crate::constants::MIN_AUTHOR_TOKEN_CHARS;
use crate::text::{author_search_text, to_ascii};
use crate::text::normalize::trim_punctuation;

/// Words of one comment, prepared for author-name lookups.
#[derive(Debug, Clone, Default)]
pub struct AuthorMentions {
    words: HashSet<String>,
}

impl AuthorMentions {
    pub fn from_comment_body(body: &str) -> Self {
        let words = author_search_text(body)
            .split_whitespace()
            .map(trim_punctuation)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    /// True when any name token of `author` longer than two characters
    /// appears as a whole word. Case-sensitive; the author is folded to ASCII
    /// like the comment.
    pub fn mentions(&self, author: &str) -> bool {
        to_ascii(author)
            .split_whitespace()
            .map(trim_punctuation)
            .filter(|token| token.chars().count() > MIN_AUTHOR_TOKEN_CHARS)
            .any(|token| self.words.contains(token))
    }
}
