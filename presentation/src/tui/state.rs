//! TUI application state
//!
//! Single source of truth for everything the TUI renders. Owns the
//! [`ComparisonSession`]; the select! loop in [`super::app`] feeds it key
//! actions and request outcomes.

use super::keys::KeyAction;
use panel_application::{ComparisonSession, PendingRequest, RequestOutcome};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Lines moved by PageUp/PageDown
const PAGE_SIZE: u16 = 10;

/// Central TUI state, owned by the TuiApp select! loop
pub struct TuiState {
    pub session: ComparisonSession,

    // -- Input cursor (byte offset into the question draft) --
    pub cursor_pos: usize,

    // -- Results scrolling --
    pub scroll_offset: u16,

    // -- Animation --
    pub spinner_frame: usize,

    // -- Overlay --
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(session: ComparisonSession) -> Self {
        Self {
            session,
            cursor_pos: 0,
            scroll_offset: 0,
            spinner_frame: 0,
            flash_message: None,
            should_quit: false,
        }
    }

    /// Apply a key action. Returns the request to run when the action
    /// started a submission.
    pub fn apply_action(&mut self, action: KeyAction) -> Option<PendingRequest> {
        match action {
            KeyAction::None => {}

            KeyAction::InsertChar(c) => self.insert_char(c),
            KeyAction::InsertNewline => self.insert_char('\n'),
            KeyAction::DeleteChar => self.delete_char(),
            KeyAction::DeleteForward => self.delete_forward(),
            KeyAction::CursorLeft => self.cursor_left(),
            KeyAction::CursorRight => self.cursor_right(),
            KeyAction::CursorHome => self.cursor_pos = 0,
            KeyAction::CursorEnd => self.cursor_pos = self.session.question().len(),

            KeyAction::Submit => return self.submit(),
            KeyAction::Clear => {
                if self.session.clear() {
                    self.cursor_pos = 0;
                    self.scroll_offset = 0;
                } else {
                    self.set_flash("Cannot clear while waiting for answers");
                }
            }
            KeyAction::Abandon => {
                if self.session.abandon() {
                    info!("Stopped waiting for the outstanding request");
                    self.set_flash("Stopped waiting; late answers will be ignored");
                }
            }

            KeyAction::ScrollUp => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyAction::ScrollDown => self.scroll_offset = self.scroll_offset.saturating_add(1),
            KeyAction::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_SIZE),
            KeyAction::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(PAGE_SIZE)
            }

            KeyAction::Quit => self.should_quit = true,
        }
        None
    }

    fn submit(&mut self) -> Option<PendingRequest> {
        if self.session.is_submitting() {
            debug!("Submit ignored while a request is outstanding");
            return None;
        }
        match self.session.submit() {
            Some(pending) => {
                self.scroll_offset = 0;
                self.flash_message = None;
                Some(pending)
            }
            None => {
                self.set_flash("Type a question first");
                None
            }
        }
    }

    /// Feed back a finished request. Stale outcomes are ignored.
    pub fn apply_outcome(&mut self, outcome: RequestOutcome) -> bool {
        let applied = self.session.apply(outcome);
        if applied {
            self.scroll_offset = 0;
        }
        applied
    }

    /// Advance animations and expire old flash messages
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.expire_flash(Duration::from_secs(4));
    }

    /// Keep the scroll offset inside the rendered content
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll_offset = self.scroll_offset.min(max);
    }

    // -- Input editing (the draft is read-only while submitting) --

    fn editable(&self) -> bool {
        !self.session.is_submitting()
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.editable() {
            return;
        }
        let cursor = self.cursor_pos;
        self.session.question_mut().insert(cursor, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Insert pasted text at the cursor. Terminals deliver pasted line
    /// breaks as `\r` or `\r\n`; both become `\n`.
    pub fn insert_paste(&mut self, text: &str) {
        if !self.editable() {
            return;
        }
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let cursor = self.cursor_pos;
        self.session.question_mut().insert_str(cursor, &normalized);
        self.cursor_pos += normalized.len();
    }

    pub fn delete_char(&mut self) {
        if !self.editable() || self.cursor_pos == 0 {
            return;
        }
        let cursor = self.cursor_pos;
        let input = self.session.question_mut();
        let prev_char_len = input[..cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        input.remove(cursor - prev_char_len);
        self.cursor_pos -= prev_char_len;
    }

    pub fn delete_forward(&mut self) {
        if !self.editable() {
            return;
        }
        let cursor = self.cursor_pos;
        let input = self.session.question_mut();
        if cursor < input.len() {
            input.remove(cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        let prev_char_len = self.session.question()[..self.cursor_pos]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor_pos -= prev_char_len;
    }

    pub fn cursor_right(&mut self) {
        let next_char_len = self.session.question()[self.cursor_pos..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor_pos += next_char_len;
    }

    /// Number of lines in the question draft
    pub fn input_line_count(&self) -> usize {
        self.session.question().split('\n').count()
    }

    /// [`Self::input_line_count`] as a layout height, saturating at `u16::MAX`
    pub fn input_rows(&self) -> u16 {
        u16::try_from(self.input_line_count()).unwrap_or(u16::MAX)
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use panel_application::{AggregationGateway, GatewayError};
    use panel_domain::{AgentResponse, Question, ResponseBatch, ViewState};
    use std::sync::Arc;

    struct FixedGateway;

    #[async_trait]
    impl AggregationGateway for FixedGateway {
        async fn ask(&self, _question: &Question) -> Result<ResponseBatch, GatewayError> {
            Ok(ResponseBatch::new(vec![AgentResponse::new(
                "GPT-4", "d", "s", "answer",
            )]))
        }

        fn endpoint(&self) -> &str {
            "http://test/api/ask"
        }
    }

    fn state() -> TuiState {
        TuiState::new(ComparisonSession::new(Arc::new(FixedGateway)))
    }

    fn type_text(state: &mut TuiState, text: &str) {
        for c in text.chars() {
            state.apply_action(KeyAction::InsertChar(c));
        }
    }

    #[test]
    fn test_input_editing() {
        let mut state = state();
        type_text(&mut state, "hé");
        assert_eq!(state.session.question(), "hé");
        assert_eq!(state.cursor_pos, 3);

        state.apply_action(KeyAction::CursorLeft);
        assert_eq!(state.cursor_pos, 1);
        state.apply_action(KeyAction::DeleteForward);
        assert_eq!(state.session.question(), "h");

        state.apply_action(KeyAction::DeleteChar);
        assert_eq!(state.session.question(), "");
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_newline_and_line_count() {
        let mut state = state();
        type_text(&mut state, "a");
        state.apply_action(KeyAction::InsertNewline);
        type_text(&mut state, "b");
        assert_eq!(state.session.question(), "a\nb");
        assert_eq!(state.input_line_count(), 2);
    }

    #[test]
    fn test_paste_normalizes_line_breaks() {
        let mut state = state();
        state.insert_paste("a\r\nb\rc");
        assert_eq!(state.session.question(), "a\nb\nc");
        assert_eq!(state.input_line_count(), 3);
        assert_eq!(state.cursor_pos, 5);

        state.apply_action(KeyAction::CursorHome);
        state.insert_paste(">");
        assert_eq!(state.session.question(), ">a\nb\nc");
    }

    #[test]
    fn test_input_rows_saturate() {
        let mut state = state();
        state.insert_paste(&"\n".repeat(70_000));
        assert_eq!(state.input_line_count(), 70_001);
        assert_eq!(state.input_rows(), u16::MAX);
    }

    #[test]
    fn test_blank_submit_is_refused() {
        let mut state = state();
        type_text(&mut state, "   ");
        assert!(state.apply_action(KeyAction::Submit).is_none());
        assert!(state.session.state().is_idle());
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn test_submit_gates_editing_and_clear() {
        let mut state = state();
        type_text(&mut state, " What is Rust? ");

        let pending = state.apply_action(KeyAction::Submit).unwrap();
        assert_eq!(pending.question().content(), "What is Rust?");
        assert!(state.session.is_submitting());

        // Draft is kept and frozen
        type_text(&mut state, "x");
        assert_eq!(state.session.question(), " What is Rust? ");

        // Second submit and clear are ignored
        assert!(state.apply_action(KeyAction::Submit).is_none());
        state.apply_action(KeyAction::Clear);
        assert!(state.session.is_submitting());
        assert_eq!(state.session.question(), " What is Rust? ");
    }

    #[tokio::test]
    async fn test_outcome_reaches_view_state() {
        let mut state = state();
        type_text(&mut state, "q");
        let pending = state.apply_action(KeyAction::Submit).unwrap();

        assert!(state.apply_outcome(pending.send().await));
        let ViewState::Succeeded(batch) = state.session.state() else {
            panic!("expected success");
        };
        assert_eq!(batch.len(), 1);

        state.apply_action(KeyAction::Clear);
        assert!(state.session.state().is_idle());
        assert_eq!(state.session.question(), "");
        assert_eq!(state.cursor_pos, 0);
    }

    #[tokio::test]
    async fn test_abandon_drops_late_outcome() {
        let mut state = state();
        type_text(&mut state, "q");
        let pending = state.apply_action(KeyAction::Submit).unwrap();

        state.apply_action(KeyAction::Abandon);
        assert!(state.session.state().is_idle());

        assert!(!state.apply_outcome(pending.send().await));
        assert!(state.session.state().is_idle());
        assert_eq!(state.session.question(), "q");
    }

    #[test]
    fn test_scroll_clamps() {
        let mut state = state();
        state.apply_action(KeyAction::ScrollUp);
        assert_eq!(state.scroll_offset, 0);

        state.apply_action(KeyAction::PageDown);
        state.apply_action(KeyAction::ScrollDown);
        assert_eq!(state.scroll_offset, PAGE_SIZE + 1);

        state.clamp_scroll(4);
        assert_eq!(state.scroll_offset, 4);
    }

    #[test]
    fn test_quit() {
        let mut state = state();
        state.apply_action(KeyAction::Quit);
        assert!(state.should_quit);
    }
}
