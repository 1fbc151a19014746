use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteLoadError {
    #[error("failed to open quote file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read quote row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// A row lacks one of body, author or categories. The whole load fails.
    #[error("quote row {row} has {found} columns, expected body, author and categories")]
    MissingColumns { row: usize, found: usize },
}
