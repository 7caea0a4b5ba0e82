use thiserror::Error;

/// Convenience result type for dataset loading.
pub type DataResult<T> = Result<T, DataError>;

/// Error type returned when the delivery dataset cannot be loaded.
///
/// Every variant means the same thing to a caller: the data is unavailable and the
/// analytics surfaces cannot start. Queries and aggregations over an already-loaded
/// table never fail; an empty filter result is a value, not an error.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The source is missing a required delivery column.
    #[error("missing required column '{column}'. headers={headers:?}")]
    MissingColumn { column: String, headers: Vec<String> },

    /// The source parsed cleanly but contains no delivery rows.
    #[error("source contains no delivery rows")]
    EmptyDataset,

    /// A cell could not be parsed into the type the column requires.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    Parse {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
