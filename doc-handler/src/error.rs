//! Error types for doc-handler

use thiserror::Error;

/// Result type alias for document handling operations
pub type Result<T> = std::result::Result<T, DocError>;

/// Document handling error types
#[derive(Error, Debug)]
pub enum DocError {
    /// Payload is not valid base64
    #[error("Invalid base64 data: {0}")]
    InvalidBase64(String),

    /// Payload decoded to zero bytes
    #[error("Empty file data")]
    EmptyPayload,

    /// `data:` prefix without a `,` separating header and payload
    #[error("Invalid base64 data: malformed data URL")]
    MalformedDataUrl,

    /// Stored file missing or outside the storage directory
    #[error("File not found or invalid path")]
    NotFound(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DocError {
    /// Whether the error was caused by the client's payload
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DocError::InvalidBase64(_) | DocError::EmptyPayload | DocError::MalformedDataUrl
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_kinds() {
        assert!(DocError::EmptyPayload.is_invalid_input());
        assert!(DocError::MalformedDataUrl.is_invalid_input());
        assert!(DocError::InvalidBase64("bad".to_string()).is_invalid_input());
        assert!(!DocError::Storage("disk full".to_string()).is_invalid_input());
        assert!(!DocError::NotFound("x".to_string()).is_invalid_input());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DocError::EmptyPayload.to_string(), "Empty file data");
        assert_eq!(
            DocError::InvalidBase64("Invalid padding".to_string()).to_string(),
            "Invalid base64 data: Invalid padding"
        );
    }
}
