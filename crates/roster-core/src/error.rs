//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to install error reporting: {message}")]
    ErrorReporting { message: String },

    // ─────────────────────────────────────────────────────────────
    // Backend Errors (all of these are fetch failures)
    // ─────────────────────────────────────────────────────────────
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Backend error: {message}")]
    Backend { message: String },

    #[error("Invalid API response: {body}")]
    MalformedResponse { body: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a [`Error::MalformedResponse`] carrying the offending body.
    pub fn malformed_response(body: impl Into<String>) -> Self {
        Self::MalformedResponse { body: body.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn error_reporting(message: impl Into<String>) -> Self {
        Self::ErrorReporting {
            message: message.into(),
        }
    }

    /// Check if this error came out of a data fetch.
    ///
    /// Network, backend-reported and malformed-response errors are all
    /// surfaced to the list view the same way.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Network { .. } | Error::Backend { .. } | Error::MalformedResponse { .. }
        )
    }

    /// Check if this error should end the run.
    ///
    /// Fetch failures are shown and the run goes on; everything else is fatal.
    pub fn is_fatal(&self) -> bool {
        !self.is_fetch_failure()
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Log the error with `context`, then pass it on unchanged
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}
