//! Error types for the centime library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`CentimeError`] enum.
//!
//! # Examples
//!
//! ```
//! use centime::error::{CentimeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CentimeError::corpus("no training documents"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for centime operations.
///
/// Local, recoverable conditions (a malformed record line, a record with
/// no usable fields) never surface through this enum; they are skipped
/// and counted during ingestion. Only conditions that abort a run do.
#[derive(Error, Debug)]
pub enum CentimeError {
    /// I/O errors (reading the input corpus, writing the snapshot).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON errors at a fatal boundary (e.g. an unreadable model snapshot).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ingestion-related errors.
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// Degenerate training corpus (zero retained documents or zero
    /// categories); estimation cannot produce a valid prior distribution.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Model-related errors (invalid or inconsistent snapshot).
    #[error("Model error: {0}")]
    Model(String),

    /// Invalid operation.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CentimeError.
pub type Result<T> = std::result::Result<T, CentimeError>;

impl CentimeError {
    /// Create a new ingest error.
    pub fn ingest<S: Into<String>>(msg: S) -> Self {
        CentimeError::Ingest(msg.into())
    }

    /// Create a new degenerate-corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        CentimeError::Corpus(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        CentimeError::Model(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CentimeError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CentimeError::Other(msg.into())
    }
}
