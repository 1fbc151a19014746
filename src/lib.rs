//! Verbatim library crate (used by the CLI and integration tests).
//!
//! Finds comments that restate a known quote and ranks the matches.
//!
//! # Public API Surface
//!
//! ## Domain Types
//! - [`Quote`], [`Comment`], [`MatchedQuote`], [`Reply`] - Records exchanged with the outside world
//! - [`QuoteDb`], [`QuoteLoader`] - Quote collection and CSV loading
//! - [`CommentFilter`], [`CommentCriteria`] - Narrowing comment batches before detection
//!
//! ## Matching
//! - [`Segmenter`], [`SegmentedText`] - Sentence segmentation and cleaning
//! - [`ComparabilityScorer`] with [`LengthScorer`] and [`SemanticScorer`] - Pairwise scoring
//! - [`QuoteDetector`] - Batch detection and ranked retrieval
//! - [`Backtester`] - Offline parameter tuning
//!
//! ## Embedding
//! - [`EmbeddingCapability`] - Seam to the embedding model
//! - [`HashedEmbedder`] - Deterministic feature-hashing embedder
//!
//! ## Records
//! - [`RecordKeeper`], [`RecordSink`] - Versioned JSON record files
//! - [`combine_records`], [`comments_from_matches`] - Merging record files
//!
//! ## Configuration
//! - [`MatcherConfig`], [`ConfigError`] - Scorer and detector parameters
//!
//! ## Test/Mock Support
//! [`MockEmbedder`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod backtest;
pub mod config;
pub mod constants;
pub mod detector;
pub mod embedding;
pub mod hashing;
pub mod model;
pub mod quotes;
pub mod records;
pub mod scoring;
pub mod text;

pub use backtest::{BacktestParams, Backtester};
pub use config::{ConfigError, MatcherConfig};
pub use detector::{AuthorMentions, DetectionError, DetectionResult, DetectorState, QuoteDetector};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    EmbedderConfig, Embedding, EmbeddingCapability, EmbeddingError, HashedEmbedder,
    cosine_similarity,
};
pub use hashing::{fingerprint, hash_to_u64, hash_token};
pub use model::{
    Comment, CommentCriteria, CommentFilter, MatchedQuote, Quote, REPLY_SOURCE_URL, Reply,
};
pub use quotes::{QuoteDb, QuoteLoadError, QuoteLoader};
pub use records::{
    RecordError, RecordKeeper, RecordResult, RecordSink, Records, combine_records,
    comments_from_matches,
};
pub use scoring::{
    AdmissibilityFilter, ComparabilityScorer, LengthScorer, QuorumBuffer, ScoringError,
    SemanticParams, SemanticScorer, quorum_size, validate_score,
};
pub use text::{Segment, SegmentedText, Segmenter};
