use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Price table error: {0}")]
    PriceTableError(String),
    #[error("Submission error: {0}")]
    SubmissionError(String),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
