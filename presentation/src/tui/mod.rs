//! TUI (Text User Interface) module for answer-panel
//!
//! A single-screen terminal UI built on ratatui: question editor at the
//! bottom, side-by-side agent answers above it.

mod app;
mod keys;
mod state;
mod widgets;

pub use app::TuiApp;
pub use keys::{KeyAction, handle_key_event};
pub use state::TuiState;
