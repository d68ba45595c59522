//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! the rest of the program needs them.

use panel_application::EndpointConfig;
use panel_application::config::DEFAULT_ENDPOINT_URL;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("endpoint.url cannot be empty")]
    EmptyEndpoint,

    #[error("endpoint.url must start with http:// or https:// (got {0:?})")]
    UnsupportedScheme(String),

    #[error("endpoint.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("tui.tick_millis cannot be 0")]
    InvalidTick,
}

/// Raw endpoint configuration from TOML (`[endpoint]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Aggregation endpoint URL
    pub url: String,
    /// Timeout in seconds for the whole exchange
    pub timeout_seconds: Option<u64>,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout_seconds: Some(120),
        }
    }
}

impl FileEndpointConfig {
    pub fn to_endpoint_config(&self) -> EndpointConfig {
        EndpointConfig::new(self.url.trim()).with_timeout_seconds(self.timeout_seconds)
    }
}

/// Output format for one-shot mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Colored cards, one per agent
    #[default]
    Text,
    /// The final view state as JSON
    Json,
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format for one-shot mode
    pub format: Option<FileOutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw TUI configuration from TOML (`[tui]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Redraw interval for spinners, in milliseconds
    pub tick_millis: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self { tick_millis: 120 }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Aggregation endpoint settings
    pub endpoint: FileEndpointConfig,
    /// One-shot output settings
    pub output: FileOutputConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.endpoint.url.trim();
        if url.is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::UnsupportedScheme(url.to_string()));
        }

        if let Some(0) = self.endpoint.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.tui.tick_millis == 0 {
            return Err(ConfigValidationError::InvalidTick);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[endpoint]
url = "https://panel.example.com/api/ask"
timeout_seconds = 30

[output]
format = "json"
color = false

[tui]
tick_millis = 250
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.url, "https://panel.example.com/api/ask");
        assert_eq!(config.endpoint.timeout_seconds, Some(30));
        assert_eq!(config.output.format, Some(FileOutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.tui.tick_millis, 250);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[endpoint]
url = "http://10.0.0.5:5001/api/ask"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.url, "http://10.0.0.5:5001/api/ask");
        // Defaults should apply
        assert_eq!(config.endpoint.timeout_seconds, Some(120));
        assert!(config.output.color);
        assert!(config.output.format.is_none());
        assert_eq!(config.tui.tick_millis, 120);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.endpoint.url, "http://localhost:5001/api/ask");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_endpoint_config() {
        let config = FileEndpointConfig {
            url: "  http://localhost:9000/ask ".to_string(),
            timeout_seconds: Some(5),
        };
        let endpoint = config.to_endpoint_config();
        assert_eq!(endpoint.url, "http://localhost:9000/ask");
        assert_eq!(endpoint.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_validate_empty_endpoint() {
        let toml_str = r#"
[endpoint]
url = "   "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyEndpoint)
        ));
    }

    #[test]
    fn test_validate_scheme() {
        let toml_str = r#"
[endpoint]
url = "ws://localhost:5001/api/ask"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[endpoint]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_zero_tick() {
        let toml_str = r#"
[tui]
tick_millis = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTick)
        ));
    }
}
