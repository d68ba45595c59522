//! Input controller
//!
//! Owns the question draft and decides whether submit and clear are
//! currently allowed. Whether a request is in flight is owned by the
//! orchestrator, so every gate takes it as an argument.

use panel_domain::Question;

/// Question draft plus the submit/clear gates
#[derive(Debug, Clone, Default)]
pub struct InputController {
    draft: String,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft. Any text is accepted, including whitespace only.
    pub fn update_question(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Current draft, exactly as typed
    pub fn question(&self) -> &str {
        &self.draft
    }

    /// Mutable access for editors that work on the buffer in place
    pub fn question_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// True iff the trimmed draft is non-empty and nothing is in flight
    pub fn can_submit(&self, in_flight: bool) -> bool {
        !in_flight && !self.draft.trim().is_empty()
    }

    /// The trimmed question to hand to the orchestrator, or `None` when
    /// submission is not allowed. Never changes the draft.
    pub fn prepare_submission(&self, in_flight: bool) -> Option<Question> {
        if !self.can_submit(in_flight) {
            return None;
        }
        Question::try_new(&self.draft)
    }

    pub fn can_clear(&self, in_flight: bool) -> bool {
        !in_flight
    }

    /// Empty the draft
    pub fn clear(&mut self) {
        self.draft.clear();
    }
}
