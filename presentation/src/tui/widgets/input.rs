//! Input widget: the question editor
//!
//! Supports multiline input: text is split on `\n` and rendered as
//! multiple `Line`s inside a `Paragraph`. The prompt prefix is shown
//! only on the first line; continuation lines get an indent. While a
//! request is outstanding the editor is drawn dimmed and without a cursor.

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "ask> ";
const CONTINUATION: &str = "     ";
const PLACEHOLDER: &str = "e.g. What is artificial intelligence and how does it work?";

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.state.session.question();
        let active = !self.state.session.is_submitting();
        let color = if active { Color::Green } else { Color::DarkGray };

        let prompt_span = Span::styled(PROMPT, Style::default().fg(color).add_modifier(Modifier::BOLD));

        let title = if active {
            " Question "
        } else {
            " Question (waiting for answers) "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(color));

        let inner_height = area.height.saturating_sub(2) as usize;

        let lines = if active && text.is_empty() {
            vec![Line::from(vec![
                prompt_span,
                Span::styled(" ", Style::default().bg(color)),
                Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ])]
        } else if active {
            build_active_lines(text, self.state.cursor_pos, color, prompt_span)
        } else {
            build_inactive_lines(text, color, prompt_span)
        };

        // Scroll so the cursor line is visible
        let cursor_line = find_cursor_line(text, self.state.cursor_pos);
        let scroll_offset = if lines.len() > inner_height && cursor_line >= inner_height {
            (cursor_line + 1).saturating_sub(inner_height)
        } else {
            0
        };

        Paragraph::new(lines)
            .block(block)
            .scroll((u16::try_from(scroll_offset).unwrap_or(u16::MAX), 0))
            .render(area, buf);
    }
}

fn prefix<'a>(index: usize, prompt_span: &Span<'a>, color: Color) -> Span<'a> {
    if index == 0 {
        prompt_span.clone()
    } else {
        Span::styled(CONTINUATION, Style::default().fg(color))
    }
}

/// Build lines with a block cursor at `cursor_pos`
fn build_active_lines<'a>(
    text: &'a str,
    cursor_pos: usize,
    color: Color,
    prompt_span: Span<'a>,
) -> Vec<Line<'a>> {
    let cursor_style = Style::default().fg(Color::Black).bg(color);

    let mut lines = Vec::new();
    let mut byte_offset = 0;

    for (i, line_text) in text.split('\n').enumerate() {
        let line_start = byte_offset;
        let line_end = line_start + line_text.len();

        let mut spans = vec![prefix(i, &prompt_span, color)];

        if cursor_pos >= line_start && cursor_pos <= line_end {
            let local_cursor = cursor_pos - line_start;
            let before = &line_text[..local_cursor];
            let after = &line_text[local_cursor..];

            spans.push(Span::raw(before));

            match after.chars().next() {
                None => spans.push(Span::styled(" ", cursor_style)),
                Some(ch) => {
                    let ch_len = ch.len_utf8();
                    spans.push(Span::styled(&after[..ch_len], cursor_style));
                    spans.push(Span::raw(&after[ch_len..]));
                }
            }
        } else {
            spans.push(Span::raw(line_text));
        }

        lines.push(Line::from(spans));
        byte_offset = line_end + 1;
    }

    lines
}

/// Build dimmed lines without a cursor
fn build_inactive_lines<'a>(text: &'a str, color: Color, prompt_span: Span<'a>) -> Vec<Line<'a>> {
    let style = Style::default().fg(color);
    text.split('\n')
        .enumerate()
        .map(|(i, line_text)| Line::from(vec![prefix(i, &prompt_span, color), Span::styled(line_text, style)]))
        .collect()
}

/// Find which line (0-indexed) the cursor is on
fn find_cursor_line(text: &str, cursor_pos: usize) -> usize {
    text[..cursor_pos.min(text.len())]
        .chars()
        .filter(|&c| c == '\n')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_active_lines_place_cursor() {
        let prompt = Span::raw(PROMPT);
        let lines = build_active_lines("ab\ncd", 4, Color::Green, prompt);

        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "ask> ab");
        assert_eq!(line_text(&lines[1]), "     cd");
        // Cursor sits on 'd'
        assert_eq!(lines[1].spans[2].content, "d");
    }

    #[test]
    fn test_cursor_at_end_gets_block() {
        let lines = build_active_lines("ab", 2, Color::Green, Span::raw(PROMPT));
        assert_eq!(line_text(&lines[0]), "ask> ab ");
    }

    #[test]
    fn test_find_cursor_line() {
        assert_eq!(find_cursor_line("a\nb\nc", 0), 0);
        assert_eq!(find_cursor_line("a\nb\nc", 4), 2);
        assert_eq!(find_cursor_line("a", 10), 0);
    }
}
