//! Status bar widget: state indicator + key hints + flash messages

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        if self.state.session.is_submitting() {
            "Esc:stop waiting  ↑/↓:scroll  Ctrl+C:quit"
        } else if self.state.session.can_submit() {
            "Enter:ask  Alt+Enter:newline  Ctrl+L:clear  ↑/↓:scroll  Ctrl+C:quit"
        } else {
            "Type a question  Ctrl+L:clear  ↑/↓:scroll  Ctrl+C:quit"
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let view_state = self.state.session.state();
        let indicator = view_state.label().to_uppercase();
        let indicator_color = match view_state {
            panel_domain::ViewState::Idle => Color::Blue,
            panel_domain::ViewState::Submitting => Color::Yellow,
            panel_domain::ViewState::Succeeded(_) => Color::Green,
            panel_domain::ViewState::Failed(_) => Color::Red,
        };
        let indicator_style = Style::default()
            .fg(Color::Black)
            .bg(indicator_color)
            .add_modifier(Modifier::BOLD);

        let indicator_width = indicator.chars().count() as u16 + 2;
        let indicator_line = Line::from(Span::styled(format!(" {} ", indicator), indicator_style));
        buf.set_line(area.x, area.y, &indicator_line, indicator_width);

        // Flash message or key hints on the right
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.as_str(),
            None => self.hints(),
        };
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + indicator_width {
            let right_line = Line::from(Span::styled(
                right_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
