//! Comparison session
//!
//! One user's screen: the question draft ([`InputController`]) wired to the
//! view state machine ([`RequestOrchestrator`]). Interactive front-ends call
//! [`ComparisonSession::submit`], run the returned [`PendingRequest`] wherever
//! they like, and feed the outcome back through [`ComparisonSession::apply`].

use crate::ports::aggregation_gateway::AggregationGateway;
use crate::ports::progress::SubmissionNotifier;
use crate::use_cases::input_controller::InputController;
use crate::use_cases::request_orchestrator::{PendingRequest, RequestOrchestrator, RequestOutcome};
use panel_domain::ViewState;
use std::sync::Arc;
use tracing::debug;

/// Question draft plus view state for a single session
pub struct ComparisonSession {
    input: InputController,
    orchestrator: RequestOrchestrator,
}

impl ComparisonSession {
    pub fn new(gateway: Arc<dyn AggregationGateway>) -> Self {
        Self {
            input: InputController::new(),
            orchestrator: RequestOrchestrator::new(gateway),
        }
    }

    // ==================== Input ====================

    pub fn question(&self) -> &str {
        self.input.question()
    }

    pub fn update_question(&mut self, text: impl Into<String>) {
        self.input.update_question(text);
    }

    /// The draft buffer, for in-place editing
    pub fn question_mut(&mut self) -> &mut String {
        self.input.question_mut()
    }

    pub fn can_submit(&self) -> bool {
        self.input.can_submit(self.orchestrator.is_submitting())
    }

    pub fn can_clear(&self) -> bool {
        self.input.can_clear(self.orchestrator.is_submitting())
    }

    // ==================== State ====================

    pub fn state(&self) -> &ViewState {
        self.orchestrator.state()
    }

    pub fn is_submitting(&self) -> bool {
        self.orchestrator.is_submitting()
    }

    pub fn endpoint(&self) -> &str {
        self.orchestrator.gateway().endpoint()
    }

    // ==================== Actions ====================

    /// Start a submission of the trimmed draft.
    ///
    /// Returns `None`, with no effect at all, when submission is not allowed.
    pub fn submit(&mut self) -> Option<PendingRequest> {
        let in_flight = self.orchestrator.is_submitting();
        let question = self.input.prepare_submission(in_flight)?;
        Some(self.orchestrator.begin(question))
    }

    /// Empty the draft and return to `Idle`. Refused while a request is in
    /// flight; returns whether anything happened.
    pub fn clear(&mut self) -> bool {
        if !self.can_clear() {
            debug!("Clear ignored while a request is outstanding");
            return false;
        }
        self.input.clear();
        self.orchestrator.reset();
        true
    }

    /// Stop waiting for the outstanding request. The draft is kept and the
    /// late result, if any, is dropped. Returns whether a request was abandoned.
    pub fn abandon(&mut self) -> bool {
        if !self.orchestrator.is_submitting() {
            return false;
        }
        self.orchestrator.reset();
        true
    }

    /// Feed back the outcome of a request started by [`Self::submit`].
    pub fn apply(&mut self, outcome: RequestOutcome) -> bool {
        self.orchestrator.resolve(outcome)
    }

    /// Submit the draft and wait for its outcome.
    ///
    /// Returns `None` when submission is not allowed.
    pub async fn submit_and_wait(
        &mut self,
        progress: &dyn SubmissionNotifier,
    ) -> Option<&ViewState> {
        let in_flight = self.orchestrator.is_submitting();
        let question = self.input.prepare_submission(in_flight)?;
        Some(self.orchestrator.execute(question, progress).await)
    }
}
