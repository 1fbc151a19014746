//! Quote database and loaders.

pub mod error;
mod loader;


pub use error::QuoteLoadError;
pub use loader::{QuoteLoader, split_categories};

use crate::model::Quote;

/// Ordered, immutable collection of quotes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteDb {
    quotes: Vec<Quote>,
}

impl QuoteDb {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    /// New database holding the quotes `predicate` keeps.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Quote) -> bool,
    {
        Self::new(self.quotes.iter().filter(|q| predicate(q)).cloned().collect())
    }

    pub fn by_author(&self, author: &str) -> Self {
        self.filter(|q| q.author == author)
    }

    pub fn by_category(&self, category: &str) -> Self {
        self.filter(|q| q.has_category(category))
    }

    pub fn into_vec(self) -> Vec<Quote> {
        self.quotes
    }
}

impl From<Vec<Quote>> for QuoteDb {
    fn from(quotes: Vec<Quote>) -> Self {
        Self::new(quotes)
    }
}

impl<'a> IntoIterator for &'a QuoteDb {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}
