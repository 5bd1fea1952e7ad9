//! Error types for replication-scout.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Note that source adapters never surface `ClientError`
//! to callers: every transport or parse failure is absorbed into an empty
//! candidate list at the adapter boundary.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if this error came from the transport rather than the
    /// response body.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Server { .. } | Self::UnexpectedStatus { .. } | Self::NotFound { .. }
        )
    }
}

/// Errors from the paper pipeline (metadata acquisition and export).
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Error from the bibliographic metadata client
    #[error("Bibliographic source error: {0}")]
    Client(#[from] ClientError),

    /// Journal name not present in the registry
    #[error("Unknown journal: {0}")]
    UnknownJournal(String),

    /// Failed to write results
    #[error("Export error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
