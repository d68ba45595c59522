//! Results widget: the side-by-side comparison grid
//!
//! Cards are dealt into one or two columns depending on the available
//! width. Each column is a wrapped `Paragraph`; both scroll together.

use crate::view::{NO_RESPONSES_NOTICE, PlaceholderCard, ResponseCard, ResultsView};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Inner width from which cards are laid out in two columns
const TWO_COLUMN_MIN_WIDTH: u16 = 80;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct ResultsWidget<'a> {
    view: &'a ResultsView,
    scroll: u16,
    spinner_frame: usize,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(view: &'a ResultsView, scroll: u16, spinner_frame: usize) -> Self {
        Self {
            view,
            scroll,
            spinner_frame,
        }
    }

    /// Largest useful scroll offset for the given area
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let inner = self.block().inner(area);
        self.columns(inner)
            .into_iter()
            .map(|(paragraph, rect)| {
                let total = u16::try_from(paragraph.line_count(rect.width)).unwrap_or(u16::MAX);
                total.saturating_sub(rect.height)
            })
            .max()
            .unwrap_or(0)
    }

    fn block(&self) -> Block<'static> {
        let title = self
            .view
            .heading()
            .map(|heading| format!(" {} ", heading))
            .unwrap_or_else(|| " Results ".to_string());
        let color = match self.view {
            ResultsView::Failure(_) => Color::Red,
            ResultsView::Loading(_) => Color::Yellow,
            _ => Color::White,
        };
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(color))
    }

    fn columns(&self, inner: Rect) -> Vec<(Paragraph<'a>, Rect)> {
        let two_columns = inner.width >= TWO_COLUMN_MIN_WIDTH;

        let columns = match self.view {
            ResultsView::Empty => vec![empty_lines()],
            ResultsView::Loading(cards) => deal(
                cards
                    .iter()
                    .map(|card| placeholder_lines(card, self.spinner_frame))
                    .collect(),
                two_columns,
            ),
            ResultsView::Responses(cards) => {
                deal(cards.iter().map(card_lines).collect(), two_columns)
            }
            ResultsView::NoResponses => vec![vec![Line::styled(
                NO_RESPONSES_NOTICE,
                Style::default().fg(Color::Yellow),
            )]],
            ResultsView::Failure(message) => vec![failure_lines(message)],
        };

        let areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns.len() as u32); columns.len()])
            .spacing(2)
            .split(inner);

        columns
            .into_iter()
            .zip(areas.iter().copied())
            .map(|(lines, rect)| {
                let paragraph = Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((self.scroll, 0));
                (paragraph, rect)
            })
            .collect()
    }
}

impl<'a> Widget for ResultsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        for (paragraph, rect) in self.columns(inner) {
            paragraph.render(rect, buf);
        }
    }
}

/// Deal cards into columns left-to-right, keeping each column in order
fn deal<'a>(cards: Vec<Vec<Line<'a>>>, two_columns: bool) -> Vec<Vec<Line<'a>>> {
    let column_count = if two_columns && cards.len() > 1 { 2 } else { 1 };
    let mut columns: Vec<Vec<Line<'a>>> = vec![Vec::new(); column_count];
    for (i, card) in cards.into_iter().enumerate() {
        columns[i % column_count].extend(card);
    }
    columns
}

fn empty_lines() -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    vec![
        Line::from(""),
        Line::styled("Ask one question and compare the answers of several AI agents.", dim),
        Line::styled("Type below and press Enter to send.", dim),
    ]
}

fn failure_lines(message: &str) -> Vec<Line<'_>> {
    vec![Line::from(vec![
        Span::styled("Error: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(message, Style::default().fg(Color::Red)),
    ])]
}

fn placeholder_lines(card: &PlaceholderCard, frame: usize) -> Vec<Line<'static>> {
    let color = card.color.tui();
    vec![
        Line::from(vec![
            Span::raw(format!("{} ", card.icon.glyph())),
            Span::styled(card.name(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]),
        Line::styled("─".repeat(24), Style::default().fg(color)),
        Line::from(vec![
            Span::styled(
                format!("{} ", SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]),
                Style::default().fg(color),
            ),
            Span::styled(card.indicator, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ]
}

fn card_lines(card: &ResponseCard) -> Vec<Line<'_>> {
    let color = card.color.tui();
    let mut lines = Vec::new();

    let mut title = vec![
        Span::raw(format!("{} ", card.icon.glyph())),
        Span::styled(
            card.agent_name.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    if !card.style_badge.is_empty() {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            format!("[{}]", card.style_badge),
            Style::default().fg(Color::Black).bg(color),
        ));
    }
    lines.push(Line::from(title));

    if !card.agent_description.is_empty() {
        lines.push(Line::styled(
            card.agent_description.as_str(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ));
    }

    lines.push(Line::styled("─".repeat(24), Style::default().fg(color)));

    for text_line in card.response_text.split('\n') {
        lines.push(Line::styled(text_line, Style::default().fg(Color::White)));
    }

    if let Some(notice) = card.agent_error_notice {
        lines.push(Line::styled(notice, Style::default().fg(Color::Red)));
    }

    lines.push(Line::from(""));
    lines
}
