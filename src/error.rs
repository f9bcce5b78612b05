//! Error types for the Corrigo library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`CorrigoError`] enum.
//!
//! # Examples
//!
//! ```
//! use corrigo::error::{CorrigoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CorrigoError::invalid_input("No word provided"))
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

/// The main error type for Corrigo operations.
#[derive(Error, Debug)]
pub enum CorrigoError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus loading and vocabulary initialization errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Language detection and support errors
    #[error("Language error: {0}")]
    Language(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid request input (empty word, empty correction, etc.)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CorrigoError.
pub type Result<T> = std::result::Result<T, CorrigoError>;

impl CorrigoError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        CorrigoError::Corpus(msg.into())
    }

    /// Create a new language error.
    pub fn language<S: Into<String>>(msg: S) -> Self {
        CorrigoError::Language(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CorrigoError::Config(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        CorrigoError::InvalidInput(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CorrigoError::Other(msg.into())
    }
}
