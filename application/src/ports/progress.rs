//! Progress notification port
//!
//! Defines the interface for reporting a submission's progress.

use panel_domain::{KnownAgent, Question, ViewState};

/// Callback for progress updates while a question is outstanding
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait SubmissionNotifier: Send + Sync {
    /// Called right after the state moved to `Submitting`
    fn on_submit_start(&self, question: &Question, expected: &[KnownAgent]);

    /// Called once the outcome has been applied to the view state
    fn on_submit_complete(&self, state: &ViewState);
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionNotifier for NoProgress {
    fn on_submit_start(&self, _question: &Question, _expected: &[KnownAgent]) {}
    fn on_submit_complete(&self, _state: &ViewState) {}
}
