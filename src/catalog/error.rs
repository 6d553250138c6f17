//! Error types for catalog requests.
//!
//! Every failure a synchronizer can observe flattens into one message string
//! through [`CatalogError::user_message`].

use thiserror::Error;

/// Message shown when an error carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Errors that can occur while talking to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request URL could not be built
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport-level failure (DNS, connect, reset, body read)
    #[error("Network error: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request failed: {status}")]
    Status { status: u16, url: String },

    /// Body was not the expected JSON shape
    #[error("Malformed response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timed out after {duration}s")]
    Timeout { duration: u64 },

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),

    /// A concurrent sub-request task panicked or was aborted
    #[error("Background task failed: {0}")]
    Task(String),
}

impl CatalogError {
    /// Short machine-readable kind, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::InvalidUrl { .. } => "invalid_url",
            CatalogError::Connection { .. } => "connection_error",
            CatalogError::Status { .. } => "status_error",
            CatalogError::Decode { .. } => "decode_error",
            CatalogError::Timeout { .. } => "timeout",
            CatalogError::Client(_) => "client_error",
            CatalogError::Task(_) => "task_error",
        }
    }

    /// Human-readable message for a view.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}
