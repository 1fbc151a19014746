use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::scoring::{ScoringError, validate_score};

use super::{Comment, Quote};

/// A comment that scored at or above the threshold against a quote.
///
/// The score always lies in `[0, 1]`; construction and decoding reject
/// anything else. A match compares equal to its comment (by uid), its quote
/// (by body) or its bare score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchedQuote")]
pub struct MatchedQuote {
    comment: Comment,
    quote: Quote,
    score: f32,
}

#[derive(Deserialize)]
struct RawMatchedQuote {
    comment: Comment,
    quote: Quote,
    score: f32,
}

impl TryFrom<RawMatchedQuote> for MatchedQuote {
    type Error = ScoringError;

    fn try_from(raw: RawMatchedQuote) -> Result<Self, Self::Error> {
        MatchedQuote::new(raw.comment, raw.quote, raw.score)
    }
}

impl MatchedQuote {
    pub fn new(comment: Comment, quote: Quote, score: f32) -> Result<Self, ScoringError> {
        let score = validate_score(score)?;
        Ok(Self {
            comment,
            quote,
            score,
        })
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    /// Total order on scores; use `b.cmp_score(a)` for best-first sorting.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }

    pub fn into_parts(self) -> (Comment, Quote, f32) {
        (self.comment, self.quote, self.score)
    }
}

impl PartialEq<Comment> for MatchedQuote {
    fn eq(&self, other: &Comment) -> bool {
        self.comment == *other
    }
}

impl PartialEq<Quote> for MatchedQuote {
    fn eq(&self, other: &Quote) -> bool {
        self.quote == *other
    }
}

impl PartialEq<f32> for MatchedQuote {
    fn eq(&self, other: &f32) -> bool {
        self.score == *other
    }
}

impl PartialOrd<f32> for MatchedQuote {
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        self.score.partial_cmp(other)
    }
}

impl std::fmt::Display for MatchedQuote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score: {:.4}, Comment: {}, Quote: {}",
            self.score, self.comment, self.quote
        )
    }
}
