//! Shared error types for the scoring pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for commscore operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Speech-to-text failures
    #[error("Transcription error: {0}")]
    Transcription(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by an external collaborator adapter.
///
/// Scoring modules never propagate these; they match on them and fall back
/// to the module default, recording a [`crate::core::Degradation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// Service or model could not be reached
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// Service answered with something unusable
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Lexical resource has no entry for the word
    #[error("no entry for '{0}'")]
    MissingEntry(String),

    /// Embedding vectors of different sizes were returned
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl CollaboratorError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_system_error_display() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::file_system("Failed to read file", "speech.txt", source);
        assert_eq!(err.to_string(), "File system error: Failed to read file");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_collaborator_error_display() {
        let err = CollaboratorError::DimensionMismatch {
            expected: 384,
            actual: 768,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 384, got 768");
        assert_eq!(
            CollaboratorError::unavailable("timeout").to_string(),
            "unavailable: timeout"
        );
    }
}
