//! Embedding capability used by the semantic scorer.
//!
//! The detector never owns a language model. It talks to an
//! [`EmbeddingCapability`], which turns a cleaned segment into an
//! [`Embedding`] and compares two embeddings.
//!
//! - [`hashed`] provides a deterministic feature-hashing embedder that needs no
//!   model files (used by the CLI and the tests).
//! - `mock` provides [`MockEmbedder`] with scripted similarities
//!   (`#[cfg(any(test, feature = "mock"))]`).

mod error;
/// Feature-hashing embedder.
pub mod hashed;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::EmbeddingError;
pub use hashed::{EmbedderConfig, HashedEmbedder};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;

use half::f16;

/// A unit-length vector for one segment, plus the norm it had before
/// normalisation and a fingerprint of the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    vector: Vec<f16>,
    norm: f32,
    fingerprint: u64,
}

impl Embedding {
    /// Normalises `values` and stores them as f16.
    ///
    /// Returns `None` for empty or zero-norm input: such a segment cannot be
    /// compared with anything.
    pub fn from_f32(values: Vec<f32>, fingerprint: u64) -> Option<Self> {
        let norm: f32 = values.iter().map(|x| x * x).sum::<f32>().sqrt();
        if values.is_empty() || norm == 0.0 || !norm.is_finite() {
            return None;
        }

        let vector = values.into_iter().map(|x| f16::from_f32(x / norm)).collect();
        Some(Self {
            vector,
            norm,
            fingerprint,
        })
    }

    pub fn vector(&self) -> &[f16] {
        &self.vector
    }

    /// Norm of the raw vector, before normalisation.
    pub fn norm(&self) -> f32 {
        self.norm
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn dim(&self) -> usize {
        self.vector.len()
    }
}

/// Turns cleaned text into embeddings and compares them.
pub trait EmbeddingCapability: Send + Sync {
    /// Embeds one cleaned segment. `Ok(None)` means the text is degenerate.
    fn embed(&self, text: &str) -> Result<Option<Embedding>, EmbeddingError>;

    /// Symmetric similarity in `[0, 1]`.
    fn similarity(&self, a: &Embedding, b: &Embedding) -> f32 {
        cosine_similarity(a.vector(), b.vector()).clamp(0.0, 1.0)
    }
}

#[inline]
pub fn cosine_similarity(a: &[f16], b: &[f16]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (av, bv)| {
                let av = av.to_f32();
                let bv = bv.to_f32();
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
