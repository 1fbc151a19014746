use std::collections::HashSet;

use super::*;
use crate::scoring::ScoringError;

fn quote() -> Quote {
    Quote::new(
        "Be yourself; everyone else is already taken.",
        "Oscar Wilde",
        vec!["honesty".to_string(), "inspirational".to_string()],
    )
}

fn comment() -> Comment {
    Comment::new("abc123", "be yourself, everyone else is taken")
        .with_author("reader")
        .with_subreddit("quotes")
        .with_utc(1_600_000_000)
}

#[test]
fn test_quote_identity_is_body() {
    let a = quote();
    let mut b = quote();
    b.author = "Someone Else".to_string();
    b.categories.clear();
    assert_eq!(a, b);

    let c = Quote::new("Different body", "Oscar Wilde", Vec::new());
    assert_ne!(a, c);

    let set: HashSet<Quote> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_quote_categories() {
    let q = quote();
    assert!(q.has_category("honesty"));
    assert!(!q.has_category("humor"));
    assert!(q.to_string().contains("category: honesty, inspirational"));
}

#[test]
fn test_quote_category_field_name() {
    let json = serde_json::to_value(quote()).unwrap();
    assert_eq!(json["category"][1], "inspirational");

    let decoded: Quote = serde_json::from_str(r#"{"body": "b", "author": "a"}"#).unwrap();
    assert!(decoded.categories.is_empty());
}

#[test]
fn test_comment_identity_is_uid() {
    let a = comment();
    let mut b = comment();
    b.body = "edited".to_string();
    b.edited = true;
    assert_eq!(a, b);
    assert_ne!(a, Comment::new("other", a.body.clone()));
}

#[test]
fn test_comment_defaults() {
    let c = Comment::default();
    assert_eq!(c.score, 1);
    assert!(!c.edited);

    let decoded: Comment = serde_json::from_str(r#"{"uid": "x", "body": "hi"}"#).unwrap();
    assert_eq!(decoded.score, 1);
    assert_eq!(decoded.utc, 0);

    let decoded: Comment = serde_json::from_str(r#"{"uid": "x", "score": -4}"#).unwrap();
    assert_eq!(decoded.score, -4);
}

#[test]
fn test_comment_serialized_fields() {
    let json = serde_json::to_value(comment()).unwrap();
    let object = json.as_object().unwrap();
    for field in ["body", "utc", "author", "url", "subreddit", "edited", "uid", "score"] {
        assert!(object.contains_key(field), "missing {field}");
    }
    assert_eq!(object.len(), 8);
}

#[test]
fn test_comment_created_at() {
    let created = comment().created_at().unwrap();
    assert_eq!(created.timestamp(), 1_600_000_000);
    assert!(Comment::default().with_utc(i64::MAX).created_at().is_none());
}

#[test]
fn test_matched_quote_rejects_out_of_range() {
    assert!(MatchedQuote::new(comment(), quote(), 0.95).is_ok());
    assert!(matches!(
        MatchedQuote::new(comment(), quote(), 1.5),
        Err(ScoringError::OutOfRange { .. })
    ));
    assert!(MatchedQuote::new(comment(), quote(), -0.01).is_err());
    assert!(MatchedQuote::new(comment(), quote(), f32::NAN).is_err());
}

#[test]
fn test_matched_quote_comparisons() {
    let m = MatchedQuote::new(comment(), quote(), 0.92).unwrap();
    assert!(m == comment());
    assert!(m == quote());
    assert!(m == 0.92_f32);
    assert!(m > 0.9_f32);
    assert!(m < 0.95_f32);
    assert!(m != Comment::new("zzz", ""));
}

#[test]
fn test_matched_quote_ordering() {
    let low = MatchedQuote::new(comment(), quote(), 0.91).unwrap();
    let high = MatchedQuote::new(comment(), quote(), 0.99).unwrap();

    let mut all = vec![low.clone(), high.clone()];
    all.sort_by(|a, b| b.cmp_score(a));
    assert_eq!(all, vec![high, low]);
}

#[test]
fn test_matched_quote_decode_validates() {
    let good = r#"{"comment": {"uid": "c"}, "quote": {"body": "q", "author": "a"}, "score": 0.93}"#;
    let decoded: MatchedQuote = serde_json::from_str(good).unwrap();
    assert_eq!(decoded.score(), 0.93);
    assert_eq!(decoded.comment().score, 1);

    let bad = r#"{"comment": {"uid": "c"}, "quote": {"body": "q", "author": "a"}, "score": 3.0}"#;
    assert!(serde_json::from_str::<MatchedQuote>(bad).is_err());
}

#[test]
fn test_matched_quote_into_parts() {
    let (c, q, score) = MatchedQuote::new(comment(), quote(), 0.97)
        .unwrap()
        .into_parts();
    assert_eq!(c, comment());
    assert_eq!(q, quote());
    assert_eq!(score, 0.97);
}

#[test]
fn test_reply_body() {
    let reply = Reply::new(comment(), quote());
    let body = reply.body();

    assert!(body.starts_with("Hi reader,\n\n"));
    assert!(body.contains(
        "\"Be yourself; everyone else is already taken.\" - Oscar Wilde\n\n"
    ));
    assert!(body.ends_with(&format!("[Project source]({REPLY_SOURCE_URL}).*")));
    assert_eq!(reply.to_string(), body);
}

#[test]
fn test_reply_serde() {
    let reply = Reply::new(comment(), quote());
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["body"], reply.body());
    assert_eq!(json["comment"]["uid"], "abc123");

    let decoded: Reply = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, reply);
}

fn gospel_comments() -> Vec<Comment> {
    let mut comments: Vec<Comment> = ["mathew", "mark", "luke", "luke"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut c = Comment::new(i.to_string(), "1234567890").with_author(*name);
            c.edited = true;
            c
        })
        .collect();
    comments[3].edited = false;
    comments[0].utc = 1234;
    comments[1].utc = 9999;
    comments
}

#[test]
fn test_comment_filter_by_author() {
    let mut filter = CommentFilter::new(gospel_comments());
    filter.by_author("luke");
    assert_eq!(filter.len(), 2);
    assert_eq!(filter[0].author, "luke");
}

#[test]
fn test_comment_filter_by_author_of_comment() {
    let target = Comment::default().with_author("mark");
    let mut filter = CommentFilter::new(gospel_comments());
    filter.apply(|c| c.author == target.author);
    assert_eq!(filter.len(), 1);
    assert_eq!(filter[0].author, "mark");
}

#[test]
fn test_comment_filter_chained() {
    let mut filter = CommentFilter::new(gospel_comments());
    filter.by_author("luke");
    assert_eq!(filter.len(), 2);

    filter.unedited();
    assert_eq!(filter.len(), 1);
    assert_eq!(filter.result()[0].author, "luke");
    assert_eq!(filter.result()[0].uid, "3");
}

#[test]
fn test_comment_filter_latest() {
    assert_eq!(CommentFilter::new(gospel_comments()).latest(), 9999);
    assert_eq!(CommentFilter::new(Vec::new()).latest(), 0);
    assert!(CommentFilter::default().is_empty());
}

#[test]
fn test_comment_filter_body_length_inclusive() {
    let mut filter = CommentFilter::new(gospel_comments());
    filter.min_body_chars(10).max_body_chars(10);
    assert_eq!(filter.len(), 4);

    filter.max_body_chars(9);
    assert!(filter.is_empty());

    let mut accented = CommentFilter::new(vec![Comment::new("x", "caf\u{e9}")]);
    accented.max_body_chars(4);
    assert_eq!(accented.len(), 1);
}

#[test]
fn test_comment_filter_utc_score_and_uid() {
    let mut comments = gospel_comments();
    comments[2].score = 13;

    let mut filter = CommentFilter::new(comments.clone());
    filter.newer_than(1234);
    assert_eq!(filter.len(), 1);
    assert_eq!(filter[0].utc, 9999);

    let mut filter = CommentFilter::new(comments.clone());
    filter.min_score(13);
    assert_eq!(filter.len(), 1);
    assert_eq!(filter[0].score, 13);

    let skip: HashSet<String> = ["0".to_string(), "1".to_string()].into_iter().collect();
    let mut filter = CommentFilter::from(comments);
    filter.excluding_uids(&skip);
    assert_eq!(filter.len(), 2);
    assert!(filter.get(2).is_none());
}

#[test]
fn test_comment_criteria() {
    let criteria = CommentCriteria {
        excluded_authors: vec!["mark".to_string()],
        skip_edited: true,
        min_body_chars: Some(5),
        ..Default::default()
    };
    assert!(!criteria.is_unbounded());
    assert!(CommentCriteria::default().is_unbounded());

    let mut filter = CommentFilter::new(gospel_comments());
    filter.apply_criteria(&criteria);
    assert_eq!(filter.len(), 1);
    assert_eq!(filter[0].uid, "3");

    let mut everything = CommentFilter::new(gospel_comments());
    everything.apply_criteria(&CommentCriteria::default());
    assert_eq!(everything.len(), 4);

    let strict = CommentCriteria {
        newer_than: Some(0),
        min_score: Some(2),
        max_body_chars: Some(3),
        ..Default::default()
    };
    let mut c = Comment::new("s", "abc").with_utc(1);
    c.score = 2;
    assert!(strict.admits(&c));
    c.score = 1;
    assert!(!strict.admits(&c));
}
