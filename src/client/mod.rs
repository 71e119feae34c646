//! HTTP Client module for kemono.
//!
//! This module provides the HTTP client functionality for communicating
//! with the detection server.

pub mod api;


pub use api::KemonoClient;
