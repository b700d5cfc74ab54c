//! Error types for the trade journal.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level journal error.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Statistics engine errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Cannot compute {0} over an empty sequence")]
    EmptyInput(&'static str),
}

/// Journal persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt journal file {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors raised while parsing or recording a trade entry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Not a valid number: {0:?}")]
    InvalidNumber(String),

    #[error("Value must be finite: {0}")]
    NotFinite(f64),

    #[error("Risk-reward multiple cannot be negative: {0}")]
    NegativeMultiple(f64),

    #[error("Invalid risk settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;
