use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// A scorer produced a value outside `[0, 1]`. This is a scorer bug and
    /// is never recovered locally.
    #[error("score {score} is outside [0, 1]")]
    OutOfRange { score: f32 },

    #[error("invalid scorer configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),
}

/// Returns `score` unchanged when it lies in `[0, 1]`.
pub fn validate_score(score: f32) -> Result<f32, ScoringError> {
    if (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(ScoringError::OutOfRange { score })
    }
}
