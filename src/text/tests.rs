use std::sync::Arc;

use super::*;
use crate::embedding::{HashedEmbedder, MockEmbedder};

#[test]
fn test_to_ascii_folds_accents_and_drops_symbols() {
    assert_eq!(to_ascii("café naïve"), "cafe naive");
    assert_eq!(to_ascii("smart “quotes”"), "smart quotes");
    assert_eq!(to_ascii("plain"), "plain");
}

#[test]
fn test_author_search_text_replaces_separators() {
    assert_eq!(
        author_search_text("Einstein: \"why?\"\n"),
        "Einstein   why   "
    );
}

#[test]
fn test_split_sentences_on_terminators() {
    let sentences = split_sentences("I had a dream. It was big! Was it real?");
    assert_eq!(sentences, vec!["I had a dream.", "It was big!", "Was it real?"]);
}

#[test]
fn test_split_sentences_keeps_decimals_and_runs() {
    let sentences = split_sentences("Pi is 3.14... Really?! \"Yes.\" Done");
    assert_eq!(
        sentences,
        vec!["Pi is 3.14...", "Really?!", "\"Yes.\"", "Done"]
    );
}

#[test]
fn test_split_sentences_typographic_closers() {
    let sentences = split_sentences("He said \u{201C}stop.\u{201D} Then he left.");
    assert_eq!(
        sentences,
        vec!["He said \u{201C}stop.\u{201D}", "Then he left."]
    );
}

#[test]
fn test_split_sentences_on_line_breaks() {
    let sentences = split_sentences("first line\n\nsecond line\r\nthird");
    assert_eq!(sentences, vec!["first line", "second line", "third"]);
}

#[test]
fn test_split_sentences_empty_input() {
    assert!(split_sentences("").is_empty());
    assert!(split_sentences("  \n ").is_empty());
}

#[test]
fn test_clean_tokens_drops_short_punctuation_and_proper_nouns() {
    let tokens = clean_tokens("Yesterday I met Albert , and he said: hello!");
    assert_eq!(tokens, vec!["Yesterday", "met", "and", "he", "said", "hello"]);
}

#[test]
fn test_word_count_is_whitespace_delimited() {
    assert_eq!(word_count("one two  three"), 3);
    assert_eq!(word_count(""), 0);
}

#[test]
fn test_segment_counts_words() {
    let segment = Segment::new("had dream about", None);
    assert_eq!(segment.word_count, 3);
    assert!(!segment.has_embedding());
}

#[test]
fn test_segmenter_produces_one_segment_per_sentence() {
    let segmenter = Segmenter::new(Arc::new(HashedEmbedder::default()));
    let segmented = segmenter
        .segment("The only thing we have to fear is fear itself. Be brave.")
        .unwrap();

    assert_eq!(segmented.len(), 2);
    assert_eq!(
        segmented.body(),
        "The only thing we have to fear is fear itself. Be brave."
    );
    assert_eq!(
        segmented.segments()[0].text,
        "The only thing we have to fear is fear itself"
    );
    assert_eq!(segmented.segments()[0].word_count, 10);
    assert!(segmented.segments().iter().all(Segment::has_embedding));
}

#[test]
fn test_segmenter_keeps_degenerate_sentences_without_embedding() {
    let segmenter = Segmenter::new(Arc::new(HashedEmbedder::default()));
    let segmented = segmenter.segment("Ok. A b c. We shall overcome.").unwrap();

    assert_eq!(segmented.len(), 3);
    assert!(segmented.segments()[0].has_embedding());
    assert_eq!(segmented.segments()[1].text, "");
    assert!(!segmented.segments()[1].has_embedding());
    assert!(segmented.segments()[2].has_embedding());
}

#[test]
fn test_segmenter_respects_embedder_degenerate_output() {
    let embedder = MockEmbedder::with_default(0.5).with_degenerate("nothing useful");
    let segmenter = Segmenter::new(Arc::new(embedder));
    let segmented = segmenter.segment("nothing useful. something useful").unwrap();

    assert!(!segmented.segments()[0].has_embedding());
    assert!(segmented.segments()[1].has_embedding());
}

#[test]
fn test_unsegmented_text_has_no_segments() {
    let text = SegmentedText::unsegmented("raw body");
    assert!(text.is_empty());
    assert_eq!(text.body(), "raw body");
}
