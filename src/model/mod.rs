//! Domain records: quotes, comments, matches and replies, plus comment
//! filtering.

mod comment;
mod filter;
mod matched;
mod quote;
mod reply;

#[cfg(test)]
mod tests;

pub use comment::Comment;
pub use filter::{CommentCriteria, CommentFilter};
pub use matched::MatchedQuote;
pub use quote::Quote;
pub use reply::{REPLY_SOURCE_URL, Reply};
