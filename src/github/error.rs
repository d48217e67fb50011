//! Error types exposed by the notification triage layer.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced while configuring the client or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TriageError {
    /// No access token could be resolved from configuration.
    #[error("personal access token is required")]
    MissingToken,

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The notification request did not complete before its deadline.
    #[error("notification request exceeded its deadline of {deadline:?}")]
    DeadlineExceeded {
        /// The deadline that elapsed.
        deadline: Duration,
    },

    /// A notification record lacked a field the triage depends on.
    #[error("notification record is missing required field `{field}`")]
    MissingField {
        /// Dotted path of the absent field, e.g. `subject.type`.
        field: &'static str,
    },

    /// A custom reason priority order was rejected.
    #[error("invalid reason priority order: {message}")]
    InvalidPriorityOrder {
        /// Why the order was rejected.
        message: String,
    },

    /// Notification listing parameters were out of range.
    #[error("invalid notification parameters: {message}")]
    InvalidParameters {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
