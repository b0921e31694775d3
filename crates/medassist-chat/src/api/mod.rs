//! HTTP client for the MedAssist backend.
//!
//! Implements `ChatBackend` against the two JSON endpoints
//! `POST {base}/api/sessions` and `POST {base}/api/chat`.

mod backend;
mod client;
mod config;

pub use client::HttpBackend;
pub use config::HttpBackendConfig;
