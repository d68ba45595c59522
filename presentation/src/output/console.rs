//! Console output formatter for one-shot results

use crate::view::{ResponseCard, ResultsView};
use colored::Colorize;
use panel_domain::ViewState;
use serde::Serialize;

/// JSON document printed by `--output json`
#[derive(Serialize)]
struct JsonReport<'a> {
    question: &'a str,
    result: &'a ViewState,
}

/// Formats a finished submission for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the question and whatever the view state holds
    pub fn format(question: &str, state: &ViewState) -> String {
        let view = ResultsView::from_state(state);
        let mut output = String::new();

        output.push_str(&Self::header("Answer Panel"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Question:".cyan().bold(), question));

        if let Some(heading) = view.heading() {
            output.push_str(&Self::section_header(&heading));
        }

        match &view {
            ResultsView::Empty => {}
            ResultsView::Loading(cards) => {
                for card in cards {
                    output.push_str(&format!(
                        "\n{} {} {}\n",
                        card.icon.glyph(),
                        card.name().color(card.color.console()).bold(),
                        card.indicator.dimmed()
                    ));
                }
            }
            ResultsView::Responses(cards) => {
                for card in cards {
                    output.push_str(&Self::card(card));
                }
            }
            ResultsView::NoResponses => {
                output.push_str(&format!("\n{}\n", crate::view::NO_RESPONSES_NOTICE.yellow()));
            }
            ResultsView::Failure(message) => {
                output.push_str(&format!("\n{} {}\n", "Error:".red().bold(), message));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(question: &str, state: &ViewState) -> String {
        let report = JsonReport {
            question,
            result: state,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    fn card(card: &ResponseCard) -> String {
        let color = card.color.console();
        let mut output = String::new();

        let title = format!("── {} {} ──", card.icon.glyph(), card.agent_name);
        output.push_str(&format!("\n{}", title.color(color).bold()));
        if !card.style_badge.is_empty() {
            output.push_str(&format!(" {}", format!("[{}]", card.style_badge).dimmed()));
        }
        output.push('\n');

        if !card.agent_description.is_empty() {
            output.push_str(&format!("{}\n", card.agent_description.italic()));
        }

        output.push('\n');
        output.push_str(&Self::indent(&card.response_text, "  "));
        output.push('\n');

        if let Some(notice) = card.agent_error_notice {
            output.push_str(&format!("  {}\n", notice.red()));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string, keeping blank lines
    pub fn indent(text: &str, prefix: &str) -> String {
        text.split('\n')
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", prefix, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::{AgentResponse, ResponseBatch};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_lists_every_card_in_order() {
        plain();
        let batch = ResponseBatch::new(vec![
            AgentResponse::new("GPT-4", "Versatile", "balanced", "Answer A\n\n  indented"),
            AgentResponse::new("Claude", "Careful", "thoughtful", "Answer B").with_agent_error(true),
        ]);
        let output = ConsoleFormatter::format("What is Rust?", &ViewState::Succeeded(batch));

        assert!(output.contains("Question: What is Rust?"));
        assert!(output.contains("Answers from 2 agents"));
        let a = output.find("GPT-4").unwrap();
        let b = output.find("Claude").unwrap();
        assert!(a < b);
        assert!(output.contains("[balanced]"));
        assert!(output.contains("  Answer A\n\n    indented"));
        assert_eq!(output.matches(crate::view::AGENT_ERROR_NOTICE).count(), 1);
    }

    #[test]
    fn test_format_failure() {
        plain();
        let output = ConsoleFormatter::format("q", &ViewState::Failed("Request timed out".into()));
        assert!(output.contains("Error: Request timed out"));
        assert!(!output.contains("Answers from"));
    }

    #[test]
    fn test_format_empty_batch() {
        plain();
        let output = ConsoleFormatter::format("q", &ViewState::Succeeded(ResponseBatch::empty()));
        assert!(output.contains(crate::view::NO_RESPONSES_NOTICE));
    }

    #[test]
    fn test_format_json() {
        let batch = ResponseBatch::new(vec![AgentResponse::new("Gemini", "d", "s", "text")]);
        let json = ConsoleFormatter::format_json("q", &ViewState::Succeeded(batch));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["question"], "q");
        assert_eq!(value["result"]["state"], "succeeded");
        assert_eq!(value["result"]["data"][0]["agent_name"], "Gemini");
    }

    #[test]
    fn test_indent_keeps_blank_lines() {
        assert_eq!(ConsoleFormatter::indent("a\n\nb", "> "), "> a\n\n> b");
    }
}
