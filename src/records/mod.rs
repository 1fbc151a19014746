//! Record keeping for comments, matches and replies.
//!
//! Records are stored as a versioned JSON document:
//!
//! ```json
//! { "schema_version": 2, "records": { "comments": [], "matches": [], "replies": [] } }
//! ```
//!
//! Files written before versioning have no `schema_version` and decode as
//! version 1; any list may be missing and decodes empty.

mod combine;
pub mod error;


pub use combine::{combine_records, comments_from_matches};
pub use error::{RecordError, RecordResult};

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::RECORD_SCHEMA_VERSION;
use crate::model::{Comment, MatchedQuote, Reply};

/// Destination for detection results. Ownership of each record moves to the
/// sink.
pub trait RecordSink {
    fn log_comment(&mut self, comment: Comment);
    fn log_match(&mut self, matched: MatchedQuote);
    fn log_reply(&mut self, reply: Reply);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub matches: Vec<MatchedQuote>,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

fn legacy_schema_version() -> u32 {
    1
}

#[derive(Serialize)]
struct RecordFileRef<'a> {
    schema_version: u32,
    records: &'a Records,
}

#[derive(Deserialize)]
struct RecordFile {
    #[serde(default = "legacy_schema_version")]
    schema_version: u32,
    #[serde(default)]
    records: Records,
}

/// In-memory log of comments, matches and replies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordKeeper {
    records: Records,
}

impl RecordKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Records) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn into_records(self) -> Records {
        self.records
    }

    pub fn log_comments(&mut self, comments: &[Comment]) {
        self.records.comments.extend_from_slice(comments);
    }

    pub fn log_matches(&mut self, matches: impl IntoIterator<Item = MatchedQuote>) {
        self.records.matches.extend(matches);
    }

    pub fn logged_comments(&self) -> &[Comment] {
        &self.records.comments
    }

    pub fn logged_matches(&self) -> &[MatchedQuote] {
        &self.records.matches
    }

    pub fn logged_replies(&self) -> &[Reply] {
        &self.records.replies
    }

    pub fn is_empty(&self) -> bool {
        self.records.comments.is_empty()
            && self.records.matches.is_empty()
            && self.records.replies.is_empty()
    }

    pub fn from_reader<R: Read>(reader: R) -> RecordResult<Self> {
        let file: RecordFile = serde_json::from_reader(reader)?;
        Self::from_file(file)
    }

    fn from_file(file: RecordFile) -> RecordResult<Self> {
        if file.schema_version > RECORD_SCHEMA_VERSION {
            return Err(RecordError::UnsupportedVersion {
                found: file.schema_version,
                supported: RECORD_SCHEMA_VERSION,
            });
        }
        Ok(Self::from_records(file.records))
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        let file = RecordFileRef {
            schema_version: RECORD_SCHEMA_VERSION,
            records: &self.records,
        };
        serde_json::to_writer_pretty(writer, &file)
    }

    /// Loads a record file.
    pub fn load(path: impl AsRef<Path>) -> RecordResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: RecordFile =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| RecordError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let schema_version = file.schema_version;
        let keeper = Self::from_file(file)?;
        debug!(
            path = %path.display(),
            schema_version,
            comments = keeper.logged_comments().len(),
            matches = keeper.logged_matches().len(),
            replies = keeper.logged_replies().len(),
            "Loaded records"
        );
        Ok(keeper)
    }

    /// Like [`load`](Self::load), but a missing file yields an empty keeper.
    pub fn load_or_default(path: impl AsRef<Path>) -> RecordResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No record file yet, starting empty");
            return Ok(Self::new());
        }
        Self::load(path)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> RecordResult<()> {
        let path = path.as_ref();
        let io_error = |source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(io_error)?;

        debug!(path = %path.display(), "Saved records");
        Ok(())
    }
}

impl RecordSink for RecordKeeper {
    fn log_comment(&mut self, comment: Comment) {
        self.records.comments.push(comment);
    }

    fn log_match(&mut self, matched: MatchedQuote) {
        self.records.matches.push(matched);
    }

    fn log_reply(&mut self, reply: Reply) {
        self.records.replies.push(reply);
    }
}
