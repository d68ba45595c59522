//! Presentation layer for answer-panel
//!
//! This crate contains CLI definitions, the results view model, console
//! output, progress reporters, and the interactive terminal UI.

pub mod cli;
pub mod output;
pub mod progress;
pub mod style;
pub mod tui;
pub mod view;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use style::catalog::{AgentColor, AgentIcon, AgentStyle};
pub use tui::TuiApp;
pub use view::{PlaceholderCard, ResponseCard, ResultsView};
