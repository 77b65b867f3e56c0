use thiserror::Error;

pub type VisResult<T> = Result<T, VisError>;

#[derive(Debug, Error)]
pub enum VisError {
    #[error("column `{column}` has {actual} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid json: {0}")]
    InvalidJson(String),
}
