//! Quote detector: scores every comment against every quote and keeps the
//! pairs that clear a threshold.
//!
//! # States
//!
//! A detector is **Idle** until [`QuoteDetector::apply`] runs, then
//! **Populated** until [`QuoteDetector::reset`] (or a drain) empties the
//! match store. The store is transient: hand matches to a
//! [`RecordSink`](crate::records::RecordSink) to keep them.
//!
//! # Variants
//!
//! - [`QuoteDetector::length`] feeds raw bodies to the scorer and does not
//!   support author filtering.
//! - [`QuoteDetector::semantic`] segments its quotes once up front and each
//!   comment once per `apply`. Quote and comment texts are both folded to
//!   ASCII before segmentation. Quote bodies are kept as given; comment bodies
//!   are rewritten to the folded text once the pass succeeds.
//!
//! An `apply` call either completes, appending all of its matches and
//! rewriting comment bodies, or fails and changes neither the store nor the
//! comments.

mod author;
pub mod error;


pub use author::AuthorMentions;
pub use error::{DetectionError, DetectionResult};

use tracing::{debug, info};

use crate::model::{Comment, MatchedQuote, Quote};
use crate::records::RecordSink;
use crate::scoring::ComparabilityScorer;
use crate::text::{SegmentedText, Segmenter, to_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    Idle,
    Populated,
}

#[derive(Debug, Clone)]
enum DetectionMode {
    Length,
    Semantic(Segmenter),
}

#[derive(Debug, Clone)]
struct PreparedQuote {
    quote: Quote,
    text: SegmentedText,
}

#[derive(Debug, Clone)]
pub struct QuoteDetector {
    mode: DetectionMode,
    quotes: Vec<PreparedQuote>,
    matches: Vec<MatchedQuote>,
    state: DetectorState,
}

impl QuoteDetector {
    /// Detector comparing raw bodies.
    pub fn length(quotes: Vec<Quote>) -> Self {
        let quotes = quotes
            .into_iter()
            .map(|quote| PreparedQuote {
                text: SegmentedText::unsegmented(quote.body.clone()),
                quote,
            })
            .collect();

        Self {
            mode: DetectionMode::Length,
            quotes,
            matches: Vec::new(),
            state: DetectorState::Idle,
        }
    }

    /// Detector comparing segmented text. Segments every quote now.
    pub fn semantic(quotes: Vec<Quote>, segmenter: Segmenter) -> DetectionResult<Self> {
        let quotes = quotes
            .into_iter()
            .map(|quote| {
                let text = segmenter.segment(&to_ascii(&quote.body))?;
                Ok(PreparedQuote { quote, text })
            })
            .collect::<DetectionResult<Vec<_>>>()?;

        info!(quotes = quotes.len(), "Segmented quote set");

        Ok(Self {
            mode: DetectionMode::Semantic(segmenter),
            quotes,
            matches: Vec::new(),
            state: DetectorState::Idle,
        })
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    pub fn supports_author_filter(&self) -> bool {
        matches!(self.mode, DetectionMode::Semantic(_))
    }

    pub fn quotes(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter().map(|prepared| &prepared.quote)
    }

    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }

    /// Every stored match, in insertion order.
    pub fn matches(&self) -> &[MatchedQuote] {
        &self.matches
    }

    /// Scores every comment against every quote with `matcher` and stores
    /// each pair scoring at least `score_threshold`.
    ///
    /// With `filter_author`, a pair is dropped when the comment names the
    /// quote's author. Returns the number of matches added.
    pub fn apply<M>(
        &mut self,
        matcher: &M,
        score_threshold: f32,
        filter_author: bool,
        comments: &mut [Comment],
    ) -> DetectionResult<usize>
    where
        M: ComparabilityScorer + ?Sized,
    {
        if filter_author && !self.supports_author_filter() {
            return Err(DetectionError::AuthorFilterUnsupported);
        }

        let mut found = Vec::new();
        let mut prepared_bodies = Vec::with_capacity(comments.len());
        let mut filtered = 0usize;

        for comment in comments.iter() {
            let prepared = self.prepare_comment(&comment.body)?;
            let mentions = filter_author.then(|| AuthorMentions::from_comment_body(prepared.body()));

            for candidate in &self.quotes {
                let score = matcher.compare(&prepared, &candidate.text)?;
                if score < score_threshold {
                    continue;
                }

                if mentions
                    .as_ref()
                    .is_some_and(|m| m.mentions(&candidate.quote.author))
                {
                    debug!(
                        uid = %comment.uid,
                        author = %candidate.quote.author,
                        score,
                        "Discarding match, comment names the author"
                    );
                    filtered += 1;
                    continue;
                }

                let mut matched = comment.clone();
                matched.body = prepared.body().to_string();
                found.push(MatchedQuote::new(matched, candidate.quote.clone(), score)?);
            }

            prepared_bodies.push(prepared.body().to_string());
        }

        for (comment, body) in comments.iter_mut().zip(prepared_bodies) {
            comment.body = body;
        }

        let added = found.len();
        self.matches.extend(found);
        self.state = DetectorState::Populated;

        info!(
            scorer = matcher.name(),
            comments = comments.len(),
            quotes = self.quotes.len(),
            added,
            filtered,
            stored = self.matches.len(),
            "Detection pass complete"
        );

        Ok(added)
    }

    /// The returned text's body is what the comment body becomes.
    fn prepare_comment(&self, body: &str) -> DetectionResult<SegmentedText> {
        match &self.mode {
            DetectionMode::Length => Ok(SegmentedText::unsegmented(body)),
            DetectionMode::Semantic(segmenter) => Ok(segmenter.segment(&to_ascii(body))?),
        }
    }

    /// Matches for `comment` (by uid), best first, at most `maximum` of them.
    /// Ties keep their insertion order.
    pub fn get_matches(&self, comment: &Comment, maximum: Option<usize>) -> Vec<MatchedQuote> {
        let mut target: Vec<MatchedQuote> = self
            .matches
            .iter()
            .filter(|m| *m == comment)
            .cloned()
            .collect();

        target.sort_by(|a, b| b.cmp_score(a));

        if let Some(maximum) = maximum {
            target.truncate(maximum);
        }
        target
    }

    /// Empties the match store.
    pub fn reset(&mut self) {
        self.matches.clear();
        self.state = DetectorState::Idle;
    }

    /// Moves every stored match out, leaving the detector idle.
    pub fn take_matches(&mut self) -> Vec<MatchedQuote> {
        self.state = DetectorState::Idle;
        std::mem::take(&mut self.matches)
    }

    /// Hands every stored match to `sink`, leaving the detector idle.
    pub fn drain_into<S: RecordSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let matches = self.take_matches();
        let count = matches.len();
        for matched in matches {
            sink.log_match(matched);
        }
        debug!(count, "Drained matches into record sink");
        count
    }
}
