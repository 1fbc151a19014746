//! Pairwise comparability scoring of one comment against one quote.
//!
//! Two scorers implement [`ComparabilityScorer`]:
//!
//! - [`LengthScorer`] compares body lengths only.
//! - [`SemanticScorer`] compares sentence embeddings, gated by the
//!   [`AdmissibilityFilter`], with a length bonus and quorum aggregation.
//!
//! Every score handed back is checked to lie in `[0, 1]`; a value outside
//! that range is returned as [`ScoringError::OutOfRange`].

pub mod admissibility;
pub mod error;
pub mod length;
pub mod quorum;
pub mod semantic;


pub use admissibility::{AdmissibilityFilter, length_ratio};
pub use error::{ScoringError, validate_score};
pub use length::LengthScorer;
pub use quorum::{QuorumBuffer, quorum_size};
pub use semantic::{SemanticParams, SemanticScorer};

use crate::text::SegmentedText;

/// Scores one comment against one quote.
///
/// `compare` takes `&self`: scorers keep no per-comparison state, so one
/// instance can serve any number of comparisons.
pub trait ComparabilityScorer {
    fn compare(&self, comment: &SegmentedText, quote: &SegmentedText) -> Result<f32, ScoringError>;

    /// Short label used in logs.
    fn name(&self) -> &'static str;
}
