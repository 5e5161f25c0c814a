//! Error types for timecode parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a timecode string.
///
/// Parsing is all-or-nothing: on error no partial value is produced.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not match the timecode grammar.
    #[error("malformed timecode: {message}")]
    Malformed {
        /// Description of where the input deviates from the grammar.
        message: String,
    },
}

impl ParseError {
    /// Create a malformed-input error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}
