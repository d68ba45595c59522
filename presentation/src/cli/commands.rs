//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One colored card per agent
    Text,
    /// The final view state as JSON
    Json,
}

/// CLI arguments for answer-panel
#[derive(Parser, Debug)]
#[command(name = "answer-panel")]
#[command(author, version, about = "Ask one question, compare the answers of several AI agents")]
#[command(long_about = r#"
answer-panel sends a single question to an aggregation endpoint, which asks
several AI agents at once, and shows their answers side by side.

Without a question it starts an interactive terminal UI. With a question it
asks once, prints the answers, and exits.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./panel.toml        Project-level config (or ./.panel.toml)
3. ~/.config/answer-panel/config.toml   Global config

Example:
  answer-panel
  answer-panel "What is artificial intelligence and how does it work?"
  answer-panel --endpoint http://localhost:5001/api/ask -o json "Explain ownership in Rust"
"#)]
pub struct Cli {
    /// The question to ask (omit to start the interactive UI)
    pub question: Option<String>,

    /// Aggregation endpoint URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format for one-shot mode
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Whether this invocation runs the interactive UI
    pub fn is_interactive(&self) -> bool {
        self.question.is_none()
    }
}
