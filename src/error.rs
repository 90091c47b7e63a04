use thiserror::Error;

/// Errors raised while parsing, sorting, serializing or persisting a table.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum TableError {
    /// A record has a different number of fields than the header.
    #[error("format error at line {line}: row does not match header length, expected {expected} fields, found {actual}")]
    Format {
        line: usize,
        expected: usize,
        actual: usize,
    },
    /// The sorting metric is not a column of the first row, or there is no first row.
    #[error("sorting metric '{metric}' does not exist in the data")]
    MetricNotFound { metric: String },
    /// A table without rows has no column names to write.
    #[error("cannot serialize an empty dataset")]
    EmptyDataset,
    /// The sorted table could not be written to its destination.
    #[error("failed to persist output to {path}: {message}")]
    Persist { path: String, message: String },
    #[error("unknown sort order '{0}', expected 'asc' or 'desc'")]
    UnknownOrder(String),
}
