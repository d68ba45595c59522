//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Results (flex) ────────────────────────────────┤
//! ├── Input (3..=8) ─────────────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod header;
pub mod input;
pub mod results;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Maximum number of question lines shown before the input scrolls
pub const MAX_INPUT_LINES: u16 = 6;

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub results: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Compute layout with dynamic input height.
    ///
    /// The input area grows from 3 (1 line + borders) up to
    /// `MAX_INPUT_LINES + 2`, but never pushes the other regions off screen.
    pub fn compute(area: Rect, input_lines: u16) -> Self {
        let header_h: u16 = 3;
        let status_h: u16 = 1;

        let max_for_input = area.height.saturating_sub(header_h + status_h);
        let desired_h = input_lines.saturating_add(2).clamp(3, MAX_INPUT_LINES + 2);
        let input_h = desired_h.min(max_for_input).max(1);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_h),
                Constraint::Fill(1),
                Constraint::Length(input_h),
                Constraint::Length(status_h),
            ])
            .split(area);

        Self {
            header: vertical[0],
            results: vertical[1],
            input: vertical[2],
            status_bar: vertical[3],
        }
    }
}
