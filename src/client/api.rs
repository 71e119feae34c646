//! Kemono HTTP client API.
//!
//! This module provides the client for communicating with the detection
//! server. Every call is an independent, stateless request using whatever
//! endpoint value is current at the moment the call is issued.

use crate::config::{ClientConfig, RetryConfig};
use crate::detector::DetectorKind;
use crate::error::{KemonoError, Result};
use reqwest::multipart;
use reqwest::Client;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Kemono HTTP client for communicating with the detection server.
#[derive(Debug, Clone)]
pub struct KemonoClient {
    /// HTTP client.
    client: Client,
    /// Base URL of the detection server.
    endpoint: String,
    /// Retry policy for transport failures, disabled by default.
    retry: Option<RetryConfig>,
}

impl KemonoClient {
    /// Creates a client for the default endpoint (`http://localhost:5005`).
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client for the specified endpoint.
    ///
    /// The endpoint is not validated; a malformed URL fails at request
    /// time.
    ///
    /// # Arguments
    /// * `endpoint` - Base URL of the server (e.g., "http://localhost:5005")
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::with_endpoint(endpoint))
    }

    /// Creates a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                KemonoError::setup_with_source("Failed to create HTTP client".to_string(), e)
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
            retry: config.retry,
        })
    }

    /// Returns the current base endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Replaces the base endpoint.
    ///
    /// Only affects requests issued after the call; requests already in
    /// flight keep the endpoint they were issued with.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    /// Pings the server root endpoint.
    ///
    /// # Returns
    /// The server's hello response, passed through as opaque JSON.
    pub async fn ping(&self) -> Result<Value> {
        self.get_json("/").await
    }

    /// Checks the health of the detection server.
    pub async fn health(&self) -> Result<Value> {
        self.get_json("/health").await
    }

    /// Lists the detector models the server has available.
    pub async fn available_detectors(&self) -> Result<Value> {
        self.get_json("/available-detectors").await
    }

    /// Uploads a video for processing with the default detector (YOLO).
    ///
    /// # Arguments
    /// * `file_name` - File name reported in the multipart `video` part
    /// * `video` - Raw video bytes
    pub async fn process_video(&self, file_name: &str, video: Vec<u8>) -> Result<Value> {
        self.process_video_with(file_name, video, DetectorKind::default())
            .await
    }

    /// Uploads a video for processing with the given detector.
    ///
    /// Sends a multipart POST to `/process-video` with a `video` file part
    /// and a `detector` text part.
    ///
    /// # Returns
    /// The server's detection results, passed through as opaque JSON.
    pub async fn process_video_with(
        &self,
        file_name: &str,
        video: Vec<u8>,
        detector: DetectorKind,
    ) -> Result<Value> {
        let url = format!("{}/process-video", self.endpoint);
        let file_name = file_name.to_string();

        info!(
            url = %url,
            detector = %detector,
            bytes = video.len(),
            "Uploading video for processing"
        );

        let result = self
            .request_json(&url, || {
                let part = multipart::Part::bytes(video.clone()).file_name(file_name.clone());
                let form = multipart::Form::new()
                    .part("video", part)
                    .text("detector", detector.as_str());
                self.client.post(&url).multipart(form)
            })
            .await;

        if let Err(e) = &result {
            error!(url = %url, error = %e, "Video processing request failed");
        }

        result
    }

    /// Reads a video file from disk and uploads it for processing.
    ///
    /// # Arguments
    /// * `path` - Path to the video file
    /// * `detector` - Detector model to run
    pub async fn process_video_path(
        &self,
        path: impl AsRef<Path>,
        detector: DetectorKind,
    ) -> Result<Value> {
        let path = path.as_ref();
        let video = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());

        self.process_video_with(&file_name, video, detector).await
    }

    /// Issues a GET to the endpoint plus the given path and parses the
    /// JSON body.
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.endpoint, path);
        debug!(url = %url, "Sending GET request");

        self.request_json(&url, || self.client.get(&url)).await
    }

    /// Sends a request, retrying transport failures when a retry policy
    /// is configured. HTTP error statuses and parse failures are never
    /// retried.
    async fn request_json(
        &self,
        url: &str,
        build: impl Fn() -> reqwest::RequestBuilder,
    ) -> Result<Value> {
        let max_attempts = self.retry.as_ref().map_or(1, |r| r.max_attempts.max(1));
        let mut attempt = 0u32;

        loop {
            match self.dispatch(url, build()).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt + 1 < max_attempts => {
                    let delay = self.retry.as_ref().map_or(0, |r| r.interval_ms(attempt));
                    warn!(
                        url = %url,
                        attempt = attempt + 1,
                        delay_ms = delay,
                        error = %e,
                        "Transport failure, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Executes a single request and maps the outcome to the error
    /// taxonomy: transport failure, non-success status, or parse failure.
    async fn dispatch(&self, url: &str, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| KemonoError::connection_with_source(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KemonoError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| {
            KemonoError::parse_with_source(format!("Invalid JSON response from {}", url), e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;

    #[test]
    fn test_client_creation_default_endpoint() {
        let client = KemonoClient::new().unwrap();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(client.endpoint(), "http://localhost:5005");
    }

    #[test]
    fn test_client_with_endpoint() {
        let client = KemonoClient::with_endpoint("http://example.test").unwrap();
        assert_eq!(client.endpoint(), "http://example.test");
    }

    #[test]
    fn test_set_endpoint() {
        let mut client = KemonoClient::new().unwrap();
        client.set_endpoint("http://example.test");
        assert_eq!(client.endpoint(), "http://example.test");
    }

    #[test]
    fn test_client_with_config() {
        let config = ClientConfig {
            endpoint: "http://127.0.0.1:9000".to_string(),
            timeout_seconds: 5,
            retry: Some(RetryConfig::default()),
        };
        let client = KemonoClient::with_config(config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9000");
        assert!(client.retry.is_some());
    }

    // Integration tests require a running detection server.
    // These are marked as ignored by default.
    #[tokio::test]
    #[ignore]
    async fn test_ping_integration() {
        let client = KemonoClient::new().unwrap();
        let response = client.ping().await.unwrap();
        assert!(response.get("message").is_some());
    }

    #[tokio::test]
    #[ignore]
    async fn test_health_integration() {
        let client = KemonoClient::new().unwrap();
        let response = client.health().await.unwrap();
        assert!(response.is_object());
    }
}
