//! Client configuration types.
//!
//! The detection server is expected on localhost; the only required setting
//! is the base endpoint, and the default matches the server's default port.

use serde::{Deserialize, Serialize};

/// Default base endpoint of the detection server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5005";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base endpoint of the detection server. Not validated; a malformed
    /// URL fails at request time.
    pub endpoint: String,

    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,

    /// Retry policy for transport failures. `None` disables retries and
    /// every failure surfaces immediately.
    pub retry: Option<RetryConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            retry: None,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with the given endpoint and default
    /// timeout, no retries.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// Retry configuration for transport-level failures.
///
/// Only connection errors are retried; HTTP error statuses and parse
/// failures are returned on the first occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,

    /// Initial retry interval in milliseconds.
    pub initial_interval_ms: u64,

    /// Maximum retry interval in milliseconds.
    pub max_interval_ms: u64,

    /// Backoff multiplier.
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_interval_ms: 1000,
            max_interval_ms: 30000,
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Returns the backoff interval in milliseconds for the given attempt
    /// (0-based), capped at `max_interval_ms`.
    pub fn interval_ms(&self, attempt: u32) -> u64 {
        let interval = self.initial_interval_ms as f64 * self.multiplier.powi(attempt as i32);
        (interval as u64).min(self.max_interval_ms)
    }
}
