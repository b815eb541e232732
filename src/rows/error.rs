use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowError {
    #[error("Function only accepts {required} or more columns, but {actual} provided")]
    TooFewColumns { required: usize, actual: usize },

    #[error("Row {row} has {actual} columns, expected {expected}")]
    WidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Row {row}: column {column} must be text or null")]
    NotText { row: usize, column: usize },

    #[error("Line {line} is not a JSON array of column values")]
    Malformed {
        line: usize,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Failed to read or write rows: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode row: {0}")]
    Encode(#[from] serde_json::Error),
}
