//! PDOK provider error types

use thiserror::Error;

/// Errors that can occur during PDOK geocoding operations
#[derive(Debug, Error)]
pub enum PdokError {
    /// The Locatieserver cannot answer this kind of request (e.g. IP addresses)
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The request is malformed and was not sent
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The response could not be turned into addresses
    #[error("Could not execute query \"{query}\": {reason}")]
    InvalidServerResponse {
        /// The full request URL that was executed
        query: String,
        /// What went wrong
        reason: String,
    },

    /// Network-level failure reported by the HTTP client
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl PdokError {
    pub(crate) fn invalid_response(query: &str, reason: impl Into<String>) -> Self {
        Self::InvalidServerResponse {
            query: query.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true if repeating the same call may succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
