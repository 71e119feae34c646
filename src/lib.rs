//! kemono - client for a local animal-detection video server
//!
//! This crate provides an async HTTP client for a detection server running
//! on the local machine. The server exposes a hello endpoint, a health
//! check, a list of available detector models, and a video-upload endpoint
//! that runs a chosen model over the uploaded file.
//!
//! Responses are passed through as opaque [`serde_json::Value`]; the client
//! performs no schema validation.
//!
//! # Modules
//!
//! - [`client`] - The HTTP client and its operations
//! - [`config`] - Client configuration (endpoint, timeout, retry)
//! - [`detector`] - Detector model selection
//! - [`error`] - Error types and error handling
//!
//! # Example
//!
//! ```no_run
//! use kemono::{DetectorKind, KemonoClient};
//!
//! # async fn run() -> kemono::Result<()> {
//! let client = KemonoClient::new()?;
//! let detectors = client.available_detectors().await?;
//! println!("available: {}", detectors);
//!
//! let results = client
//!     .process_video_path("clip.mp4", DetectorKind::Yolo)
//!     .await?;
//! println!("detections: {}", results);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod detector;
pub mod error;

// Re-exports for convenience
pub use client::KemonoClient;
pub use config::{ClientConfig, RetryConfig, DEFAULT_ENDPOINT};
pub use detector::DetectorKind;
pub use error::{KemonoError, Result};
