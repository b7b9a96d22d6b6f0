//! Unified error types for Inkcheck

use thiserror::Error;

/// Unified error type for all Inkcheck operations
///
/// The CLI downgrades every variant to a single printed `Error:` line,
/// so messages must carry enough context (URL, selector, path) to be
/// useful on their own.
#[derive(Error, Debug)]
pub enum InkcheckError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using InkcheckError
pub type Result<T> = std::result::Result<T, InkcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_display_includes_selector() {
        let err = InkcheckError::ElementNotFound {
            selector: "button \"New Novel\"".to_string(),
        };
        assert_eq!(err.to_string(), "Element not found: button \"New Novel\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err: InkcheckError = io.into();
        assert!(err.to_string().contains("no such directory"));
    }
}
