//! Error types for kemono.
//!
//! Every failure surfaces to the immediate caller; the client performs
//! no local recovery.

use thiserror::Error;

/// The main error type for kemono.
#[derive(Debug, Error)]
pub enum KemonoError {
    /// Failed to reach the detection server (DNS, refused connection,
    /// request timeout).
    #[error("Connection error: {target}")]
    Connection {
        target: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The server answered with a non-success HTTP status. Carries the
    /// numeric status and the raw response body.
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not the JSON the caller expected.
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to build the HTTP client itself.
    #[error("Client setup error: {message}")]
    Setup {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error reading a video file from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KemonoError {
    /// Creates a connection error without a source.
    pub fn connection(target: impl Into<String>) -> Self {
        KemonoError::Connection {
            target: target.into(),
            source: None,
        }
    }

    /// Creates a connection error with a source.
    pub fn connection_with_source(
        target: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        KemonoError::Connection {
            target: target.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a parse error with a source.
    pub fn parse_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        KemonoError::Parse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a setup error with a source.
    pub fn setup_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        KemonoError::Setup {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the HTTP status if this is an `Http` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            KemonoError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for transport-level failures, the only class a retry policy
    /// is allowed to retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, KemonoError::Connection { .. })
    }
}

/// Result type alias for kemono operations.
pub type Result<T> = std::result::Result<T, KemonoError>;
