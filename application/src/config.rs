//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases reach
//! the aggregation endpoint.

use std::time::Duration;

/// Default aggregation endpoint
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:5001/api/ask";

/// Where and how to reach the aggregation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Full URL the question is POSTed to.
    pub url: String,
    /// Maximum time to wait for the whole exchange. `None` waits as long as
    /// the transport does.
    pub timeout: Option<Duration>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout: None,
        }
    }
}

impl EndpointConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    /// Sets the timeout from an optional number of seconds.
    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = EndpointConfig::default();
        assert_eq!(config.url, "http://localhost:5001/api/ask");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_with_timeout_seconds() {
        let config = EndpointConfig::new("http://example.test/ask").with_timeout_seconds(Some(30));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));

        let config = config.with_timeout_seconds(None);
        assert!(config.timeout.is_none());
    }
}
