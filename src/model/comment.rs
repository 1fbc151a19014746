use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COMMENT_SCORE;

/// A user-authored comment fetched from a platform.
///
/// Identity is the platform `uid`; every other field may differ between two
/// copies of the same comment (e.g. after the body was normalised).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub body: String,
    /// Creation time, unix seconds.
    #[serde(default)]
    pub utc: i64,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
    /// Source label (the subreddit on Reddit).
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub edited: bool,
    #[serde(default)]
    pub uid: String,
    /// Platform popularity signal. Records written before the field existed
    /// decode with [`DEFAULT_COMMENT_SCORE`].
    #[serde(default = "default_comment_score")]
    pub score: i64,
}

fn default_comment_score() -> i64 {
    DEFAULT_COMMENT_SCORE
}

impl Default for Comment {
    fn default() -> Self {
        Self {
            body: String::new(),
            utc: 0,
            author: String::new(),
            url: String::new(),
            subreddit: String::new(),
            edited: false,
            uid: String::new(),
            score: DEFAULT_COMMENT_SCORE,
        }
    }
}

impl Comment {
    pub fn new(uid: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_subreddit(mut self, subreddit: impl Into<String>) -> Self {
        self.subreddit = subreddit.into();
        self
    }

    pub fn with_utc(mut self, utc: i64) -> Self {
        self.utc = utc;
        self
    }

    /// `None` when `utc` is outside chrono's representable range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.utc, 0)
    }
}

impl PartialEq for Comment {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Comment {}

impl std::hash::Hash for Comment {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
    }
}

impl std::fmt::Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Author: {}, utc: {}, subreddit: {}, edited: {}, url: {}, body: {}",
            self.author, self.utc, self.subreddit, self.edited, self.url, self.body
        )
    }
}
