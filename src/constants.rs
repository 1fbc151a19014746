//! Cross-cutting, shared constants.
//!
//! Matcher defaults live here so the config layer, the scorers and the CLI
//! agree on them. Prefer [`MatcherConfig`](crate::config::MatcherConfig) for
//! runtime values; these are only the fallbacks.

/// Minimum length ratio between a comment sentence and a quote sentence.
pub const DEFAULT_QUOTE_COMMENT_DELTA: f32 = 0.5;

/// A sentence must have strictly more words than this to be compared.
pub const DEFAULT_MINIMUM_SENTENCE_WORD_LENGTH: usize = 3;

/// Multiplier applied per bonus word.
pub const DEFAULT_BONUS_COEFF: f32 = 0.01;

/// Quote sentence word count at which the length bonus becomes positive.
pub const DEFAULT_BONUS_START: f32 = 6.0;

/// Upper bound on bonus words.
pub const DEFAULT_BONUS_END: f32 = 12.0;

/// Fraction of quote sentences that must be matched (quorum coefficient).
pub const DEFAULT_MATCH_SENTENCE_COEFF: f32 = 0.5;

/// Minimum score for a comment/quote pair to be stored as a match.
pub const DEFAULT_SCORE_THRESHOLD: f32 = 0.9;

pub const DEFAULT_DISCARD_COMMENTS_WITH_AUTHOR: bool = true;

/// Matches kept per comment when ranking.
pub const DEFAULT_STORE_COUNT: usize = 1;

/// Output dimension of the hashed embedder.
pub const DEFAULT_EMBEDDING_DIM: usize = 256;

/// Score assumed for comments decoded from records that predate the field.
pub const DEFAULT_COMMENT_SCORE: i64 = 1;

/// Current record file schema.
pub const RECORD_SCHEMA_VERSION: u32 = 2;

/// Tokens shorter than this are dropped while cleaning.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Author name tokens must be longer than this to trigger the author filter.
pub const MIN_AUTHOR_TOKEN_CHARS: usize = 2;
