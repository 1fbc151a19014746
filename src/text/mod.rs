//! Segmenter and cleaner.
//!
//! Raw text becomes a [`SegmentedText`]: one [`Segment`] per sentence, each
//! holding the cleaned tokens, their word count and an optional embedding.

pub mod normalize;
mod segmenter;

#[cfg(test)]
mod tests;

pub use normalize::{author_search_text, clean_tokens, split_sentences, to_ascii, word_count};
pub use segmenter::{Segment, SegmentedText, Segmenter};
