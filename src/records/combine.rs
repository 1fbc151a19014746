use std::collections::HashSet;

use tracing::debug;

use super::{RecordKeeper, RecordSink};

/// Concatenates several record logs into one, skipping duplicates.
///
/// A comment is a duplicate when its uid was already seen; a match or reply
/// is a duplicate when another one for the same comment was already seen.
/// The first occurrence wins and keeps its position.
pub fn combine_records(records: &[RecordKeeper]) -> RecordKeeper {
    let mut combined = RecordKeeper::new();
    let mut comment_uids = HashSet::new();
    let mut matched_uids = HashSet::new();
    let mut replied_uids = HashSet::new();

    for record in records {
        for comment in record.logged_comments() {
            if comment_uids.insert(comment.uid.clone()) {
                combined.log_comment(comment.clone());
            }
        }

        for matched in record.logged_matches() {
            if matched_uids.insert(matched.comment().uid.clone()) {
                combined.log_match(matched.clone());
            }
        }

        for reply in record.logged_replies() {
            if replied_uids.insert(reply.comment.uid.clone()) {
                combined.log_reply(reply.clone());
            }
        }
    }

    debug!(
        inputs = records.len(),
        comments = combined.logged_comments().len(),
        matches = combined.logged_matches().len(),
        replies = combined.logged_replies().len(),
        "Combined records"
    );
    combined
}

/// Collects the comments of every match in `records` into a comment-only log.
pub fn comments_from_matches(records: &[RecordKeeper]) -> RecordKeeper {
    let mut comments = RecordKeeper::new();
    for matched in records.iter().flat_map(RecordKeeper::logged_matches) {
        comments.log_comment(matched.comment().clone());
    }
    comments
}
