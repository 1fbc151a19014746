use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum DetectionError {
    /// The length-only detector cannot tell whether a comment names an author.
    #[error("author filtering is not implemented for the length-only detector")]
    AuthorFilterUnsupported,

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("segmentation failed: {0}")]
    Embedding(#[from] EmbeddingError),
}

pub type DetectionResult<T> = Result<T, DetectionError>;
