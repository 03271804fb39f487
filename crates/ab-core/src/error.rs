//! Errors raised while validating core inputs.
//!
//! Higher crates wrap these (or their message) in their own enums.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AbError {
    #[error("{what}: {detail}")]
    InvalidDelay { what: String, detail: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AbResult<T> = Result<T, AbError>;
