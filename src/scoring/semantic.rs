use std::sync::Arc;

use tracing::trace;

use crate::config::MatcherConfig;
use crate::embedding::EmbeddingCapability;
use crate::text::SegmentedText;

use super::ComparabilityScorer;
use super::admissibility::AdmissibilityFilter;
use super::error::{ScoringError, validate_score};
use super::quorum::{QuorumBuffer, quorum_size};

/// Length bonus and quorum parameters of the semantic scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticParams {
    pub bonus_coeff: f32,
    pub bonus_start: f32,
    pub bonus_end: f32,
    pub match_sentence_coeff: f32,
}

impl SemanticParams {
    pub fn from_config(config: &MatcherConfig) -> Self {
        Self {
            bonus_coeff: config.bonus_coeff,
            bonus_start: config.bonus_start,
            bonus_end: config.bonus_end,
            match_sentence_coeff: config.match_sentence_coeff,
        }
    }

    /// Bonus words for a quote sentence: `min(word_count - start, end)`.
    /// Negative below `bonus_start`, which lowers the score.
    pub fn length_bonus(&self, quote_word_count: usize) -> f32 {
        (quote_word_count as f32 - self.bonus_start).min(self.bonus_end)
    }

    /// Applies the length bonus to a raw similarity, capped at 1.0.
    pub fn adjust(&self, raw: f32, quote_word_count: usize) -> f32 {
        let bonus = self.length_bonus(quote_word_count);
        (raw * (1.0 + bonus * self.bonus_coeff)).min(1.0)
    }
}

/// Sentence-level semantic scorer with quorum aggregation.
///
/// Every admissible comment sentence × quote sentence pair is compared with
/// the embedder; the best `quorum_size` adjusted scores are averaged.
#[derive(Clone)]
pub struct SemanticScorer {
    embedder: Arc<dyn EmbeddingCapability>,
    filter: AdmissibilityFilter,
    params: SemanticParams,
}

impl std::fmt::Debug for SemanticScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScorer")
            .field("filter", &self.filter)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl SemanticScorer {
    pub fn new(
        embedder: Arc<dyn EmbeddingCapability>,
        filter: AdmissibilityFilter,
        params: SemanticParams,
    ) -> Self {
        Self {
            embedder,
            filter,
            params,
        }
    }

    pub fn from_config(config: &MatcherConfig, embedder: Arc<dyn EmbeddingCapability>) -> Self {
        Self::new(
            embedder,
            AdmissibilityFilter::from_config(config),
            SemanticParams::from_config(config),
        )
    }

    pub fn filter(&self) -> &AdmissibilityFilter {
        &self.filter
    }

    pub fn params(&self) -> &SemanticParams {
        &self.params
    }

    /// Fills the quorum buffer for one comment/quote pair.
    pub fn quorum(&self, comment: &SegmentedText, quote: &SegmentedText) -> QuorumBuffer {
        let mut buffer = QuorumBuffer::new(quorum_size(
            quote.len(),
            self.params.match_sentence_coeff,
        ));

        for comment_segment in comment.segments() {
            let Some(comment_embedding) = &comment_segment.embedding else {
                continue;
            };

            for quote_segment in quote.segments() {
                let Some(quote_embedding) = &quote_segment.embedding else {
                    continue;
                };
                if !self.filter.admits(comment_segment, quote_segment) {
                    continue;
                }

                let raw = self
                    .embedder
                    .similarity(comment_embedding, quote_embedding)
                    .clamp(0.0, 1.0);
                let adjusted = self.params.adjust(raw, quote_segment.word_count);

                trace!(raw, adjusted, "Scored sentence pair");
                buffer.offer(adjusted);
            }
        }

        buffer
    }
}

impl ComparabilityScorer for SemanticScorer {
    fn compare(&self, comment: &SegmentedText, quote: &SegmentedText) -> Result<f32, ScoringError> {
        let score = self.quorum(comment, quote).mean().min(1.0);
        validate_score(score)
    }

    fn name(&self) -> &'static str {
        "semantic"
    }
}
