//! Record files written by one run and read by the next.

mod common;

use common::fixtures::{CommentBuilder, comment, hashed_embedder, hashed_segmenter, sample_quotes};
use tempfile::TempDir;
use verbatim::{
    MatcherConfig, QuoteDetector, RecordKeeper, RecordSink, Reply, SemanticScorer,
    combine_records, comments_from_matches,
};

#[test]
fn test_detect_drain_save_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matches.json");

    let mut detector =
        QuoteDetector::semantic(sample_quotes().into_vec(), hashed_segmenter()).unwrap();
    let scorer = SemanticScorer::from_config(&MatcherConfig::default(), hashed_embedder());
    let mut comments = vec![
        comment("t1_a", "the only thing we have to fear is fear itself"),
        comment("t1_b", "be yourself, everyone else is already taken"),
    ];
    detector.apply(&scorer, 0.9, true, &mut comments).unwrap();

    let mut keeper = RecordKeeper::new();
    keeper.log_comments(&comments);
    let drained = detector.drain_into(&mut keeper);
    assert_eq!(drained, 2);
    for matched in keeper.logged_matches().to_vec() {
        let (comment, quote, _) = matched.into_parts();
        keeper.log_reply(Reply::new(comment, quote));
    }
    keeper.save(&path).unwrap();

    let loaded = RecordKeeper::load(&path).unwrap();
    assert_eq!(loaded, keeper);
    assert_eq!(loaded.logged_replies().len(), 2);
    assert!(detector.matches().is_empty());
}

#[test]
fn test_combine_saved_files() {
    let dir = TempDir::new().unwrap();
    let first_path = dir.path().join("first.json");
    let second_path = dir.path().join("second.json");

    let mut first = RecordKeeper::new();
    first.log_comments(&[comment("1", "one"), comment("2", "two")]);
    first.save(&first_path).unwrap();

    let mut second = RecordKeeper::new();
    second.log_comments(&[comment("2", "two again"), comment("3", "three")]);
    second.save(&second_path).unwrap();

    let loaded = vec![
        RecordKeeper::load(&first_path).unwrap(),
        RecordKeeper::load(&second_path).unwrap(),
    ];
    let combined = combine_records(&loaded);
    let bodies: Vec<_> = combined
        .logged_comments()
        .iter()
        .map(|c| c.body.as_str())
        .collect();
    assert_eq!(bodies, vec!["one", "two", "three"]);
}

#[test]
fn test_legacy_record_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"{"records": {"comments": [{"body": "old", "utc": 1500000000, "author": "a",
            "url": "", "subreddit": "quotes", "edited": true, "uid": "t1_old"}]}}"#,
    )
    .unwrap();

    let keeper = RecordKeeper::load(&path).unwrap();
    let old = &keeper.logged_comments()[0];
    assert_eq!(old.score, 1);
    assert!(old.edited);

    keeper.save(&path).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["schema_version"], 2);
    assert_eq!(raw["records"]["comments"][0]["score"], 1);
}

#[test]
fn test_comments_from_matches_across_files() {
    let mut detector = QuoteDetector::length(vec![common::fixtures::quote("12345", "")]);
    let mut comments = vec![
        CommentBuilder::new().uid("x").body("abcde").score(42).build(),
        CommentBuilder::new().uid("y").body("abc").build(),
    ];
    detector
        .apply(&verbatim::LengthScorer, 1.0, false, &mut comments)
        .unwrap();

    let mut keeper = RecordKeeper::new();
    detector.drain_into(&mut keeper);

    let extracted = comments_from_matches(&[keeper, RecordKeeper::new()]);
    assert_eq!(extracted.logged_comments().len(), 1);
    assert_eq!(extracted.logged_comments()[0].score, 42);
}

#[test]
fn test_load_or_default_then_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.json");

    let mut keeper = RecordKeeper::load_or_default(&path).unwrap();
    assert!(keeper.is_empty());
    keeper.log_comment(comment("t1_new", "hello"));
    keeper.save(&path).unwrap();

    let reloaded = RecordKeeper::load_or_default(&path).unwrap();
    assert_eq!(reloaded.logged_comments().len(), 1);
}
