//! Mock embedder with scripted similarities.

use std::collections::{HashMap, HashSet};

use crate::hashing::fingerprint;

use super::{Embedding, EmbeddingCapability, EmbeddingError};

/// Every non-empty text embeds to the same one-dimensional vector; the
/// similarity of two texts is looked up from the scripted pairs, falling back
/// to a default.
#[derive(Debug, Clone, Default)]
pub struct MockEmbedder {
    default_similarity: f32,
    pairs: HashMap<(u64, u64), f32>,
    degenerate: HashSet<u64>,
}

impl MockEmbedder {
    /// Mock returning `similarity` for every pair.
    pub fn with_default(similarity: f32) -> Self {
        Self {
            default_similarity: similarity,
            ..Default::default()
        }
    }

    /// Scripts the similarity between two cleaned texts (order-insensitive).
    pub fn with_pair(mut self, a: &str, b: &str, similarity: f32) -> Self {
        self.pairs.insert(pair_key(fingerprint(a), fingerprint(b)), similarity);
        self
    }

    /// Makes `text` produce no embedding.
    pub fn with_degenerate(mut self, text: &str) -> Self {
        self.degenerate.insert(fingerprint(text));
        self
    }
}

fn pair_key(a: u64, b: u64) -> (u64, u64) {
    if a <= b { (a, b) } else { (b, a) }
}

impl EmbeddingCapability for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Option<Embedding>, EmbeddingError> {
        let key = fingerprint(text);
        if text.trim().is_empty() || self.degenerate.contains(&key) {
            return Ok(None);
        }
        Ok(Embedding::from_f32(vec![1.0], key))
    }

    fn similarity(&self, a: &Embedding, b: &Embedding) -> f32 {
        self.pairs
            .get(&pair_key(a.fingerprint(), b.fingerprint()))
            .copied()
            .unwrap_or(self.default_similarity)
    }
}
