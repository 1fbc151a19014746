use serde::{Deserialize, Serialize};

use super::{Comment, Quote};

/// Link appended to every generated reply.
pub const REPLY_SOURCE_URL: &str = "https://github.com/etdds/redditQuoteBot";

/// A reply to `comment` pointing out the quote it resembles.
///
/// The body is derived from the comment and quote; it is written to records
/// for auditing but never read back.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub comment: Comment,
    pub quote: Quote,
}

#[derive(Serialize)]
struct ReplyRecordRef<'a> {
    comment: &'a Comment,
    quote: &'a Quote,
    body: String,
}

#[derive(Deserialize)]
struct ReplyRecord {
    comment: Comment,
    quote: Quote,
}

impl Reply {
    pub fn new(comment: Comment, quote: Quote) -> Self {
        Self { comment, quote }
    }

    pub fn body(&self) -> String {
        format!(
            "Hi {author},\n\n\
             It looks like your comment closely matches the famous quote:\n\n\
             \"{quote}\" - {quote_author}\n\n\
             *I'm a bot and this action was automatic [Project source]({url}).*",
            author = self.comment.author,
            quote = self.quote.body,
            quote_author = self.quote.author,
            url = REPLY_SOURCE_URL,
        )
    }
}

impl Serialize for Reply {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReplyRecordRef {
            comment: &self.comment,
            quote: &self.quote,
            body: self.body(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Reply {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = ReplyRecord::deserialize(deserializer)?;
        Ok(Self::new(record.comment, record.quote))
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.body())
    }
}
