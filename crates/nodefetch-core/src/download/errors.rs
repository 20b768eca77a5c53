//! Fetch error types.
//!
//! These errors are designed to be serializable and not depend on external
//! error types like `std::io::Error`. For I/O errors, we capture the kind
//! and message as strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for download operations.
///
/// Designed to be serializable across host boundaries (pipeline host, CLI)
/// without depending on non-serializable types like `std::io::Error`.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum FetchError {
    /// I/O error during file operations.
    #[error("I/O error ({kind}): {message}")]
    Io {
        /// The kind of I/O error (e.g., "not found", "permission denied").
        kind: String,
        /// Detailed error message.
        message: String,
    },

    /// Network/HTTP error during download.
    #[error("Network error for {url}: {message}")]
    Network {
        /// The URL being fetched when the error occurred.
        url: String,
        /// Detailed error message.
        message: String,
        /// HTTP status code if available.
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },

    /// The URL could not be parsed.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL string.
        url: String,
        /// Parse error detail.
        message: String,
    },

    /// Token resolution failed (unreadable token file).
    #[error("Token error: {message}")]
    Token {
        /// Detailed error message.
        message: String,
    },

    /// General/uncategorized error.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl FetchError {
    /// Create an I/O error from kind and message strings.
    pub fn io(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error from a `std::io::Error`.
    ///
    /// This captures the error kind name and message for serialization.
    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::Io {
            kind: format!("{kind:?}"),
            message: err.to_string(),
        }
    }

    /// Create a network error.
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a network error with HTTP status code.
    pub fn network_with_status(
        url: impl Into<String>,
        message: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a token error.
    pub fn token(message: impl Into<String>) -> Self {
        Self::Token {
            message: message.into(),
        }
    }

    /// Create a generic error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Convert to a user-friendly message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { message, .. } => format!("File operation failed: {message}"),
            Self::Network {
                url,
                message,
                status_code: Some(code),
            } => format!("Network error (HTTP {code}) for {url}: {message}"),
            Self::Network { url, message, .. } => format!("Network error for {url}: {message}"),
            Self::InvalidUrl { url, message } => format!("Invalid URL '{url}': {message}"),
            Self::Token { message } => format!("Token could not be resolved: {message}"),
            Self::Other { message } => message.clone(),
        }
    }
}

impl From<crate::paths::PathError> for FetchError {
    fn from(err: crate::paths::PathError) -> Self {
        use crate::paths::PathError;
        let kind = match &err {
            PathError::NotADirectory(_) => "NotADirectory",
            PathError::CreateFailed { .. } => "CreateFailed",
            PathError::RemoveFailed { .. } => "RemoveFailed",
        };
        Self::io(kind, err.to_string())
    }
}

/// Convenience result type for download operations.
pub type FetchResult<T> = Result<T, FetchError>;
