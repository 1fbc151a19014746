use crate::text::SegmentedText;

use super::admissibility::length_ratio;
use super::error::{ScoringError, validate_score};
use super::ComparabilityScorer;

/// Scores a pair by how close the two bodies are in length.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthScorer;

impl LengthScorer {
    pub fn new() -> Self {
        Self
    }
}

impl ComparabilityScorer for LengthScorer {
    fn compare(&self, comment: &SegmentedText, quote: &SegmentedText) -> Result<f32, ScoringError> {
        let score = length_ratio(comment.body(), quote.body()).unwrap_or(0.0);
        validate_score(score)
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
