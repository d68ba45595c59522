//! Error types for building the HTTP adapter

use thiserror::Error;

/// Result type alias for HTTP adapter construction
pub type Result<T> = std::result::Result<T, HttpGatewayError>;

/// Errors raised while setting up the HTTP gateway (not while talking to it)
#[derive(Error, Debug)]
pub enum HttpGatewayError {
    #[error("Invalid endpoint URL {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
