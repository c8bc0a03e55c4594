//! Errors raised while loading dictionaries and rendering results.
//!
//! The trie and the distance search themselves never fail; only the layers
//! that touch files and text formats return [`SuggestError`].

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggestError {
    /// I/O errors while reading a dictionary
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dictionary line that does not match the configured format
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SuggestError>;

impl SuggestError {
    /// Create a new parse error for a 1-based line number.
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        SuggestError::Parse {
            line,
            message: msg.into(),
        }
    }
}
