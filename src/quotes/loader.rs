use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::model::Quote;

use super::QuoteDb;
use super::error::QuoteLoadError;

/// Logical columns every quote row must carry.
const REQUIRED_COLUMNS: usize = 3;

/// Loads quotes from CSV sources.
///
/// Rows are `body, author, categories`, after a header row. Rows with four or
/// more columns are taken to start with an index column, which is skipped.
/// `categories` is itself a comma-delimited list.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteLoader;

impl QuoteLoader {
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<QuoteDb, QuoteLoadError> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| QuoteLoadError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let db = Self::read_quotes(reader)?;
        info!(path = %path.display(), quotes = db.len(), "Loaded quotes");
        Ok(db)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<QuoteDb, QuoteLoadError> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        Self::read_quotes(reader)
    }

    fn read_quotes<R: Read>(mut reader: csv::Reader<R>) -> Result<QuoteDb, QuoteLoadError> {
        let mut quotes = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            let row = idx + 1;
            let record = result.map_err(|source| QuoteLoadError::Csv { row, source })?;
            quotes.push(Self::parse_row(row, &record)?);
        }

        Ok(QuoteDb::new(quotes))
    }

    fn parse_row(row: usize, record: &csv::StringRecord) -> Result<Quote, QuoteLoadError> {
        if record.len() < REQUIRED_COLUMNS {
            return Err(QuoteLoadError::MissingColumns {
                row,
                found: record.len(),
            });
        }

        let offset = usize::from(record.len() > REQUIRED_COLUMNS);
        let field = |column: usize| record.get(offset + column).unwrap_or_default();

        Ok(Quote::new(field(0), field(1), split_categories(field(2))))
    }
}

/// Splits a comma-delimited category list, trimming entries and dropping
/// empty ones.
pub fn split_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
