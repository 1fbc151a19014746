use crate::config::MatcherConfig;
use crate::text::Segment;

/// Cheap gates a (comment segment, quote segment) pair must pass before the
/// embedder is asked for a similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdmissibilityFilter {
    /// Minimum `shorter / longer` character ratio (exclusive).
    pub delta: f32,
    /// Segments need strictly more words than this.
    pub minimum_word_length: usize,
}

impl AdmissibilityFilter {
    pub fn new(delta: f32, minimum_word_length: usize) -> Self {
        Self {
            delta,
            minimum_word_length,
        }
    }

    pub fn from_config(config: &MatcherConfig) -> Self {
        Self::new(
            config.quote_comment_delta,
            config.minimum_sentence_word_length,
        )
    }

    /// Length-delta gate on two texts. Fails when either text is empty.
    pub fn passes_length_delta(&self, comment_text: &str, quote_text: &str) -> bool {
        length_ratio(comment_text, quote_text).is_some_and(|ratio| ratio > self.delta)
    }

    pub fn passes_word_minimum(&self, segment: &Segment) -> bool {
        segment.word_count > self.minimum_word_length
    }

    /// Both word gates and the length gate.
    pub fn admits(&self, comment: &Segment, quote: &Segment) -> bool {
        self.passes_word_minimum(comment)
            && self.passes_word_minimum(quote)
            && self.passes_length_delta(&comment.text, &quote.text)
    }
}

/// `shorter / longer` in characters; `None` when either side is empty.
pub fn length_ratio(a: &str, b: &str) -> Option<f32> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 || b_len == 0 {
        return None;
    }
    Some(a_len.min(b_len) as f32 / a_len.max(b_len) as f32)
}
