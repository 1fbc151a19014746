use std::sync::Arc;

use tracing::{debug, trace};

use crate::embedding::{Embedding, EmbeddingCapability, EmbeddingError};

use super::normalize::{clean_tokens, split_sentences, word_count};

/// One cleaned sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub word_count: usize,
    /// `None` when the embedder found nothing to embed.
    pub embedding: Option<Embedding>,
}

impl Segment {
    pub fn new(text: impl Into<String>, embedding: Option<Embedding>) -> Self {
        let text = text.into();
        Self {
            word_count: word_count(&text),
            text,
            embedding,
        }
    }

    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }
}

/// A body of text together with its segments, built once and reused for
/// every comparison involving that body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentedText {
    body: String,
    segments: Vec<Segment>,
}

impl SegmentedText {
    pub fn new(body: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            body: body.into(),
            segments,
        }
    }

    /// Body without segments, for scorers that only look at the raw text.
    pub fn unsegmented(body: impl Into<String>) -> Self {
        Self::new(body, Vec::new())
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of sentences, including those that produced no embedding.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Splits text into sentences, cleans them and embeds them.
#[derive(Clone)]
pub struct Segmenter {
    embedder: Arc<dyn EmbeddingCapability>,
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter").finish_non_exhaustive()
    }
}

impl Segmenter {
    pub fn new(embedder: Arc<dyn EmbeddingCapability>) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &Arc<dyn EmbeddingCapability> {
        &self.embedder
    }

    /// Segments `text`. Sentences that clean down to nothing are kept (they
    /// still count towards a quote's sentence total) but carry no embedding.
    pub fn segment(&self, text: &str) -> Result<SegmentedText, EmbeddingError> {
        let sentences = split_sentences(text);
        let mut segments = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let cleaned = clean_tokens(sentence).join(" ");
            let embedding = if cleaned.is_empty() {
                None
            } else {
                self.embedder.embed(&cleaned)?
            };

            if embedding.is_none() {
                trace!(sentence, "Sentence produced no embedding");
            }
            segments.push(Segment::new(cleaned, embedding));
        }

        debug!(
            text_len = text.len(),
            segments = segments.len(),
            embedded = segments.iter().filter(|s| s.has_embedding()).count(),
            "Segmented text"
        );

        Ok(SegmentedText::new(text, segments))
    }
}
