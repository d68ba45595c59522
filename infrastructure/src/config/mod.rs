//! Configuration file loading for answer-panel
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `ANSWER_PANEL_ENDPOINT__URL`, `ANSWER_PANEL_ENDPOINT__TIMEOUT_SECONDS`
//! 2. `--config <path>` specified file
//! 3. Project root: `./panel.toml` or `./.panel.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/answer-panel/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEndpointConfig, FileOutputConfig, FileOutputFormat,
    FileTuiConfig,
};
pub use loader::ConfigLoader;
