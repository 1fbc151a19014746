//! Matcher configuration.
//!
//! Every setting has a default (see [`crate::constants`]). Override with
//! `VERBATIM_*` environment variables or a JSON file holding any subset of
//! the fields.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BONUS_COEFF, DEFAULT_BONUS_END, DEFAULT_BONUS_START,
    DEFAULT_DISCARD_COMMENTS_WITH_AUTHOR, DEFAULT_EMBEDDING_DIM, DEFAULT_MATCH_SENTENCE_COEFF,
    DEFAULT_MINIMUM_SENTENCE_WORD_LENGTH, DEFAULT_QUOTE_COMMENT_DELTA, DEFAULT_SCORE_THRESHOLD,
    DEFAULT_STORE_COUNT,
};

/// Parameters consumed by the scorers and the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Minimum `shorter / longer` length ratio of two sentences. Default: `0.5`.
    pub quote_comment_delta: f32,

    /// Sentences need strictly more words than this. Default: `3`.
    pub minimum_sentence_word_length: usize,

    /// Score multiplier per bonus word. Default: `0.01`.
    pub bonus_coeff: f32,

    /// Quote sentence length where the bonus turns positive. Default: `6`.
    pub bonus_start: f32,

    /// Cap on bonus words. Default: `12`.
    pub bonus_end: f32,

    /// Fraction of quote sentences that must match. Default: `0.5`.
    pub match_sentence_coeff: f32,

    /// Minimum score for a stored match, in `[0, 1]`. Default: `0.9`.
    pub score_threshold: f32,

    /// Drop matches whose comment names the quote's author. Default: `true`.
    pub discard_comments_with_author: bool,

    /// Matches kept per comment. Default: `1`.
    pub store_count: usize,

    /// Output dimension of the hashed embedder. Default: `256`.
    pub embedding_dim: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            quote_comment_delta: DEFAULT_QUOTE_COMMENT_DELTA,
            minimum_sentence_word_length: DEFAULT_MINIMUM_SENTENCE_WORD_LENGTH,
            bonus_coeff: DEFAULT_BONUS_COEFF,
            bonus_start: DEFAULT_BONUS_START,
            bonus_end: DEFAULT_BONUS_END,
            match_sentence_coeff: DEFAULT_MATCH_SENTENCE_COEFF,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            discard_comments_with_author: DEFAULT_DISCARD_COMMENTS_WITH_AUTHOR,
            store_count: DEFAULT_STORE_COUNT,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl MatcherConfig {
    const ENV_QUOTE_COMMENT_DELTA: &'static str = "VERBATIM_QUOTE_COMMENT_DELTA";
    const ENV_MINIMUM_SENTENCE_WORD_LENGTH: &'static str = "VERBATIM_MINIMUM_SENTENCE_WORD_LENGTH";
    const ENV_BONUS_COEFF: &'static str = "VERBATIM_BONUS_COEFF";
    const ENV_BONUS_START: &'static str = "VERBATIM_BONUS_START";
    const ENV_BONUS_END: &'static str = "VERBATIM_BONUS_END";
    const ENV_MATCH_SENTENCE_COEFF: &'static str = "VERBATIM_MATCH_SENTENCE_COEFF";
    const ENV_SCORE_THRESHOLD: &'static str = "VERBATIM_SCORE_THRESHOLD";
    const ENV_DISCARD_COMMENTS_WITH_AUTHOR: &'static str = "VERBATIM_DISCARD_COMMENTS_WITH_AUTHOR";
    const ENV_STORE_COUNT: &'static str = "VERBATIM_STORE_COUNT";
    const ENV_EMBEDDING_DIM: &'static str = "VERBATIM_EMBEDDING_DIM";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Applies any `VERBATIM_*` variables on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        Ok(Self {
            quote_comment_delta: Self::parse_from_env(
                Self::ENV_QUOTE_COMMENT_DELTA,
                self.quote_comment_delta,
            )?,
            minimum_sentence_word_length: Self::parse_from_env(
                Self::ENV_MINIMUM_SENTENCE_WORD_LENGTH,
                self.minimum_sentence_word_length,
            )?,
            bonus_coeff: Self::parse_from_env(Self::ENV_BONUS_COEFF, self.bonus_coeff)?,
            bonus_start: Self::parse_from_env(Self::ENV_BONUS_START, self.bonus_start)?,
            bonus_end: Self::parse_from_env(Self::ENV_BONUS_END, self.bonus_end)?,
            match_sentence_coeff: Self::parse_from_env(
                Self::ENV_MATCH_SENTENCE_COEFF,
                self.match_sentence_coeff,
            )?,
            score_threshold: Self::parse_from_env(
                Self::ENV_SCORE_THRESHOLD,
                self.score_threshold,
            )?,
            discard_comments_with_author: Self::parse_bool_from_env(
                Self::ENV_DISCARD_COMMENTS_WITH_AUTHOR,
                self.discard_comments_with_author,
            )?,
            store_count: Self::parse_from_env(Self::ENV_STORE_COUNT, self.store_count)?,
            embedding_dim: Self::parse_from_env(Self::ENV_EMBEDDING_DIM, self.embedding_dim)?,
        })
    }

    /// Loads configuration from a JSON file; missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.quote_comment_delta) {
            return Err(ConfigError::OutOfRange {
                name: "quote_comment_delta",
                value: self.quote_comment_delta.to_string(),
                reason: "must be within [0, 1]",
            });
        }

        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(ConfigError::OutOfRange {
                name: "score_threshold",
                value: self.score_threshold.to_string(),
                reason: "must be within [0, 1]",
            });
        }

        if !(0.0..=1.0).contains(&self.match_sentence_coeff) {
            return Err(ConfigError::OutOfRange {
                name: "match_sentence_coeff",
                value: self.match_sentence_coeff.to_string(),
                reason: "must be within [0, 1]",
            });
        }

        for (name, value) in [
            ("bonus_coeff", self.bonus_coeff),
            ("bonus_start", self.bonus_start),
            ("bonus_end", self.bonus_end),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::OutOfRange {
                    name,
                    value: value.to_string(),
                    reason: "must be finite",
                });
            }
        }

        if self.store_count == 0 {
            return Err(ConfigError::OutOfRange {
                name: "store_count",
                value: self.store_count.to_string(),
                reason: "must be at least 1",
            });
        }

        if self.embedding_dim == 0 {
            return Err(ConfigError::OutOfRange {
                name: "embedding_dim",
                value: self.embedding_dim.to_string(),
                reason: "must be at least 1",
            });
        }

        Ok(())
    }

    pub fn with_score_threshold(mut self, score_threshold: f32) -> Self {
        self.score_threshold = score_threshold;
        self
    }

    pub fn with_bonus(mut self, coeff: f32, start: f32, end: f32) -> Self {
        self.bonus_coeff = coeff;
        self.bonus_start = start;
        self.bonus_end = end;
        self
    }

    pub fn with_match_sentence_coeff(mut self, coeff: f32) -> Self {
        self.match_sentence_coeff = coeff;
        self
    }

    pub fn with_admissibility(mut self, delta: f32, minimum_sentence_word_length: usize) -> Self {
        self.quote_comment_delta = delta;
        self.minimum_sentence_word_length = minimum_sentence_word_length;
        self
    }

    fn parse_from_env<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name, value }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue { name, value }),
            },
            Err(_) => Ok(default),
        }
    }
}
