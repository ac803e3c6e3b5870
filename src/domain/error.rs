//! Error types for the inkpane plugin.
//!
//! This module defines the centralized error type [`InkpaneError`] and a type alias
//! [`Result`] used throughout the crate. Errors never cross into the renderer: the
//! state container turns them into retained error strings or notifications.

use thiserror::Error;

/// The main error type for inkpane operations.
///
/// Most variants carry a human-readable description because they end up in
/// the UI as a notification or a retained error string.
///
/// # Examples
///
/// ```
/// use inkpane::domain::InkpaneError;
///
/// fn check(email: &str) -> Result<(), InkpaneError> {
///     if email.contains('@') {
///         Ok(())
///     } else {
///         Err(InkpaneError::Validation("Invalid email address".to_string()))
///     }
/// }
///
/// assert!(check("not-an-email").is_err());
/// ```
#[derive(Debug, Error)]
pub enum InkpaneError {
    /// User input was rejected.
    ///
    /// Always recoverable: the user can correct the input and resubmit.
    #[error("{0}")]
    Validation(String),

    /// The simulated catalog API failed to serve a request.
    ///
    /// Surfaced as a retained error on the affected state domain and cleared
    /// by a successful retry.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Only reachable from theme files and the span log.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for inkpane operations.
pub type Result<T> = std::result::Result<T, InkpaneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = InkpaneError::Validation("Invalid email address".to_string());
        assert_eq!(err.to_string(), "Invalid email address");
    }

    #[test]
    fn catalog_errors_are_prefixed() {
        let err = InkpaneError::Catalog("service unavailable".to_string());
        assert_eq!(err.to_string(), "Catalog error: service unavailable");
    }
}
