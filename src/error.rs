use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFoundError(String),
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl LedgerError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFoundError(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
