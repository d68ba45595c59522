//! Progress reporting while a question is outstanding

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use panel_application::SubmissionNotifier;
use panel_domain::{KnownAgent, Question, ViewState};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with an animated spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn agent_list(expected: &[KnownAgent]) -> String {
        expected
            .iter()
            .map(|agent| agent.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn outcome_summary(state: &ViewState) -> String {
        match state {
            ViewState::Succeeded(batch) if batch.failed_count() > 0 => format!(
                "{} {} answers ({} failed)",
                "v".green(),
                batch.len(),
                batch.failed_count()
            ),
            ViewState::Succeeded(batch) => format!("{} {} answers", "v".green(), batch.len()),
            ViewState::Failed(_) => format!("{} request failed", "x".red()),
            ViewState::Idle | ViewState::Submitting => String::new(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionNotifier for ProgressReporter {
    fn on_submit_start(&self, _question: &Question, expected: &[KnownAgent]) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Processing");
        pb.set_message(format!("asking {}", Self::agent_list(expected)));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_submit_complete(&self, state: &ViewState) {
        let pb = self.spinner.lock().ok().and_then(|mut slot| slot.take());
        if let Some(pb) = pb {
            pb.finish_with_message(Self::outcome_summary(state));
        }
    }
}

/// Simple text-based progress (no animation), for non-terminal stderr
pub struct SimpleProgress;

impl SubmissionNotifier for SimpleProgress {
    fn on_submit_start(&self, question: &Question, expected: &[KnownAgent]) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            question.preview(60).bold(),
            ProgressReporter::agent_list(expected)
        );
    }

    fn on_submit_complete(&self, state: &ViewState) {
        let summary = ProgressReporter::outcome_summary(state);
        if !summary.is_empty() {
            eprintln!("  {}", summary);
        }
    }
}
