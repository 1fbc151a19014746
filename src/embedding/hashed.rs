use tracing::{debug, trace};

use crate::constants::DEFAULT_EMBEDDING_DIM;
use crate::hashing::{fingerprint, hash_token};

use super::{Embedding, EmbeddingCapability, EmbeddingError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Configuration for [`HashedEmbedder`].
pub struct EmbedderConfig {
    /// Number of hash buckets (output dimension).
    pub embedding_dim: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl EmbedderConfig {
    pub fn new(embedding_dim: usize) -> Self {
        Self { embedding_dim }
    }

    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Bag-of-words embedder: every token increments the bucket its BLAKE3 hash
/// lands in. Sentences sharing vocabulary end up close under cosine.
#[derive(Debug, Clone, Default)]
pub struct HashedEmbedder {
    config: EmbedderConfig,
}

impl HashedEmbedder {
    pub fn new(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;
        debug!(
            embedding_dim = config.embedding_dim,
            "Hashed embedder ready"
        );
        Ok(Self { config })
    }

    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }
}

impl EmbeddingCapability for HashedEmbedder {
    fn embed(&self, text: &str) -> Result<Option<Embedding>, EmbeddingError> {
        let dim = self.config.embedding_dim;
        let mut buckets = vec![0.0f32; dim];
        let mut tokens = 0usize;

        for token in text.split_whitespace() {
            let bucket = (hash_token(token) % dim as u64) as usize;
            buckets[bucket] += 1.0;
            tokens += 1;
        }

        if tokens == 0 {
            trace!("Empty segment, no embedding");
            return Ok(None);
        }

        trace!(text_len = text.len(), tokens, "Generated hashed embedding");
        Ok(Embedding::from_f32(buckets, fingerprint(text)))
    }
}
