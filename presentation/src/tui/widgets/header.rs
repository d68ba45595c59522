//! Header widget: shows the endpoint and the current view state

use crate::tui::state::TuiState;
use panel_domain::ViewState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

fn state_color(state: &ViewState) -> Color {
    match state {
        ViewState::Idle => Color::DarkGray,
        ViewState::Submitting => Color::Yellow,
        ViewState::Succeeded(_) => Color::Green,
        ViewState::Failed(_) => Color::Red,
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view_state = self.state.session.state();

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                view_state.label(),
                Style::default()
                    .fg(state_color(view_state))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(self.state.session.endpoint(), Style::default().fg(Color::White)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Answer Panel ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
