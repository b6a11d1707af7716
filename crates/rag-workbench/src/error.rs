//! Error types for the workbench client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Client-side errors
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input rejected before any network call was made
    #[error("{0}")]
    Validation(String),

    /// HTTP failure or malformed response for a named backend operation
    #[error("{operation} request failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a transport error labeled with the attempted operation
    pub fn transport(operation: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Transport {
            operation,
            message: message.to_string(),
        }
    }

    /// Name of the backend operation that failed, if this is a transport error
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Transport { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_carry_the_operation_name() {
        let err = Error::transport("search", "HTTP 502");
        assert_eq!(err.operation(), Some("search"));
        assert_eq!(err.to_string(), "search request failed: HTTP 502");
    }

    #[test]
    fn validation_errors_display_their_message_verbatim() {
        let err = Error::validation("Please select files first");
        assert_eq!(err.operation(), None);
        assert_eq!(err.to_string(), "Please select files first");
    }
}
