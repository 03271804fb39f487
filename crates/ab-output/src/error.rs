//! Output errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating the output directory or flushing a file failed.
    #[error("output I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
