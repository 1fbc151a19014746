//! Replays stored comments through a detector to tune parameters offline.


use tracing::info;

use crate::config::MatcherConfig;
use crate::detector::{DetectionResult, QuoteDetector};
use crate::model::{Comment, MatchedQuote};
use crate::scoring::ComparabilityScorer;

/// Knobs for one backtest run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacktestParams {
    pub threshold: f32,
    /// Matches kept per comment.
    pub store_count: usize,
    pub filter_author: bool,
}

impl Default for BacktestParams {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            store_count: 1,
            filter_author: false,
        }
    }
}

impl BacktestParams {
    pub fn new(threshold: f32, store_count: usize, filter_author: bool) -> Self {
        Self {
            threshold,
            store_count,
            filter_author,
        }
    }

    pub fn from_config(config: &MatcherConfig) -> Self {
        Self::new(
            config.score_threshold,
            config.store_count,
            config.discard_comments_with_author,
        )
    }
}

pub struct Backtester {
    detector: QuoteDetector,
    scorer: Box<dyn ComparabilityScorer>,
    params: BacktestParams,
}

impl std::fmt::Debug for Backtester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backtester")
            .field("detector", &self.detector)
            .field("scorer", &self.scorer.name())
            .field("params", &self.params)
            .finish()
    }
}

impl Backtester {
    pub fn new(detector: QuoteDetector, scorer: Box<dyn ComparabilityScorer>) -> Self {
        Self {
            detector,
            scorer,
            params: BacktestParams::default(),
        }
    }

    pub fn params(&self) -> &BacktestParams {
        &self.params
    }

    pub fn detector(&self) -> &QuoteDetector {
        &self.detector
    }

    pub fn set_parameters(&mut self, params: BacktestParams) {
        self.params = params;
    }

    pub fn set_scorer(&mut self, scorer: Box<dyn ComparabilityScorer>) {
        self.scorer = scorer;
    }

    /// Runs the detector over `comments` and returns, for every comment with
    /// at least one match, its best `store_count` matches.
    ///
    /// Each call starts from an empty match store.
    pub fn get_matches(&mut self, comments: &mut [Comment]) -> DetectionResult<Vec<Vec<MatchedQuote>>> {
        self.detector.reset();
        self.detector.apply(
            self.scorer.as_ref(),
            self.params.threshold,
            self.params.filter_author,
            comments,
        )?;

        let all: Vec<Vec<MatchedQuote>> = comments
            .iter()
            .map(|comment| {
                self.detector
                    .get_matches(comment, Some(self.params.store_count))
            })
            .filter(|matches| !matches.is_empty())
            .collect();

        info!(
            comments = comments.len(),
            matched = all.len(),
            threshold = self.params.threshold,
            store_count = self.params.store_count,
            "Backtest run complete"
        );
        Ok(all)
    }
}
