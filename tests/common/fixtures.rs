//! Test fixtures for integration tests.

use std::sync::Arc;

use verbatim::{
    Comment, EmbedderConfig, EmbeddingCapability, HashedEmbedder, MatcherConfig, Quote, QuoteDb,
    QuoteLoader, Segmenter,
};

pub const FIXED_UTC: i64 = 1702512000;

pub const DEFAULT_SUBREDDIT: &str = "quotes";

/// Quote CSV with a leading index column, as exported by spreadsheet tools.
pub const QUOTES_CSV: &str = "\
,quote,author,category
0,\"The only thing we have to fear is fear itself.\",Franklin D. Roosevelt,\"courage, fear\"
1,\"Imagination is more important than knowledge. Knowledge is limited while imagination embraces the entire world.\",Albert Einstein,\"imagination, knowledge\"
2,\"In the middle of every difficulty lies opportunity.\",Albert Einstein,opportunity
3,\"Be yourself; everyone else is already taken.\",Oscar Wilde,\"honesty, inspirational\"
";

pub fn sample_quotes() -> QuoteDb {
    QuoteLoader::from_csv_reader(QUOTES_CSV.as_bytes()).unwrap()
}

pub fn hashed_embedder() -> Arc<dyn EmbeddingCapability> {
    let config = MatcherConfig::default();
    Arc::new(HashedEmbedder::new(EmbedderConfig::new(config.embedding_dim)).unwrap())
}

pub fn hashed_segmenter() -> Segmenter {
    Segmenter::new(hashed_embedder())
}

pub fn quote(body: &str, author: &str) -> Quote {
    Quote::new(body, author, Vec::new())
}

#[derive(Default)]
pub struct CommentBuilder {
    uid: Option<String>,
    body: Option<String>,
    author: Option<String>,
    subreddit: Option<String>,
    utc: Option<i64>,
    score: Option<i64>,
}

impl CommentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uid(mut self, uid: &str) -> Self {
        self.uid = Some(uid.to_string());
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subreddit(mut self, subreddit: &str) -> Self {
        self.subreddit = Some(subreddit.to_string());
        self
    }

    pub fn utc(mut self, utc: i64) -> Self {
        self.utc = Some(utc);
        self
    }

    pub fn score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn build(self) -> Comment {
        let uid = self.uid.unwrap_or_else(|| "t1_default".to_string());
        let mut comment = Comment::new(uid.clone(), self.body.unwrap_or_default())
            .with_author(self.author.unwrap_or_else(|| "reader".to_string()))
            .with_subreddit(self.subreddit.unwrap_or_else(|| DEFAULT_SUBREDDIT.to_string()))
            .with_utc(self.utc.unwrap_or(FIXED_UTC));
        comment.url = format!("https://reddit.com/comments/{uid}");
        if let Some(score) = self.score {
            comment.score = score;
        }
        comment
    }
}

pub fn comment(uid: &str, body: &str) -> Comment {
    CommentBuilder::new().uid(uid).body(body).build()
}
