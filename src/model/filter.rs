use std::collections::HashSet;
use std::ops::Index;

use super::Comment;

/// Narrows a batch of comments with successive predicates.
///
/// ```
/// use verbatim::{Comment, CommentFilter};
///
/// let mut filter = CommentFilter::new(vec![Comment::new("a", "hello there")]);
/// filter.unedited().min_body_chars(5);
/// assert_eq!(filter.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentFilter {
    comments: Vec<Comment>,
}

impl CommentFilter {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self { comments }
    }

    /// Keeps the comments for which `predicate` holds.
    pub fn apply<F>(&mut self, predicate: F) -> &mut Self
    where
        F: FnMut(&Comment) -> bool,
    {
        self.comments.retain(predicate);
        self
    }

    pub fn by_author(&mut self, author: &str) -> &mut Self {
        self.apply(|c| c.author == author)
    }

    pub fn excluding_authors(&mut self, authors: &[String]) -> &mut Self {
        let authors: HashSet<&str> = authors.iter().map(String::as_str).collect();
        self.apply(|c| !authors.contains(c.author.as_str()))
    }

    pub fn excluding_uids(&mut self, uids: &HashSet<String>) -> &mut Self {
        self.apply(|c| !uids.contains(&c.uid))
    }

    pub fn unedited(&mut self) -> &mut Self {
        self.apply(|c| !c.edited)
    }

    /// Body length in characters, inclusive.
    pub fn min_body_chars(&mut self, minimum: usize) -> &mut Self {
        self.apply(|c| c.body.chars().count() >= minimum)
    }

    /// Body length in characters, inclusive.
    pub fn max_body_chars(&mut self, maximum: usize) -> &mut Self {
        self.apply(|c| c.body.chars().count() <= maximum)
    }

    /// Keeps comments created strictly after `utc`.
    pub fn newer_than(&mut self, utc: i64) -> &mut Self {
        self.apply(|c| c.utc > utc)
    }

    pub fn min_score(&mut self, score: i64) -> &mut Self {
        self.apply(|c| c.score >= score)
    }

    /// Applies every bound set in `criteria`.
    pub fn apply_criteria(&mut self, criteria: &CommentCriteria) -> &mut Self {
        self.apply(|c| criteria.admits(c))
    }

    /// Greatest `utc` among the remaining comments, `0` when none remain.
    pub fn latest(&self) -> i64 {
        self.comments.iter().map(|c| c.utc).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Comment> {
        self.comments.get(index)
    }

    pub fn result(&self) -> &[Comment] {
        &self.comments
    }

    pub fn into_vec(self) -> Vec<Comment> {
        self.comments
    }
}

impl Index<usize> for CommentFilter {
    type Output = Comment;

    fn index(&self, index: usize) -> &Comment {
        &self.comments[index]
    }
}

impl From<Vec<Comment>> for CommentFilter {
    fn from(comments: Vec<Comment>) -> Self {
        Self::new(comments)
    }
}

/// Declarative comment bounds, for callers that assemble a filter from
/// options. Unset bounds admit everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentCriteria {
    pub excluded_authors: Vec<String>,
    pub skip_edited: bool,
    pub min_body_chars: Option<usize>,
    pub max_body_chars: Option<usize>,
    pub newer_than: Option<i64>,
    pub min_score: Option<i64>,
}

impl CommentCriteria {
    pub fn admits(&self, comment: &Comment) -> bool {
        let chars = comment.body.chars().count();

        !(self.skip_edited && comment.edited)
            && !self.excluded_authors.iter().any(|a| *a == comment.author)
            && self.min_body_chars.is_none_or(|min| chars >= min)
            && self.max_body_chars.is_none_or(|max| chars <= max)
            && self.newer_than.is_none_or(|utc| comment.utc > utc)
            && self.min_score.is_none_or(|score| comment.score >= score)
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::default()
    }
}
