//! Request orchestrator use case.
//!
//! Owns the [`ViewState`] machine and the single outstanding exchange with
//! the aggregation endpoint:
//!
//! ```text
//! Idle ──begin──> Submitting ──resolve(ok)───> Succeeded(batch)
//!   ^                 │       └─resolve(err)──> Failed(message)
//!   └──── reset ──────┴─────────── (any state) ──────────┘
//! ```
//!
//! Every `begin` issues a fresh [`RequestTicket`]. `resolve` only applies an
//! outcome whose ticket is still the latest one; anything older was
//! superseded by a newer `begin` or a `reset` and is dropped.

use crate::ports::aggregation_gateway::{AggregationGateway, GatewayError};
use crate::ports::progress::SubmissionNotifier;
use panel_domain::{KnownAgent, Question, RequestTicket, ResponseBatch, ViewState};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shown when a failure carries no usable description
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong while sending the question";

/// A submission that has been registered but not yet sent.
///
/// Owns everything it needs, so it can be moved into a spawned task.
pub struct PendingRequest {
    ticket: RequestTicket,
    question: Question,
    gateway: Arc<dyn AggregationGateway>,
}

impl PendingRequest {
    pub fn ticket(&self) -> RequestTicket {
        self.ticket
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Perform the network exchange. Exactly one call to the gateway.
    pub async fn send(self) -> RequestOutcome {
        debug!(
            "Request {} sending to {}",
            self.ticket,
            self.gateway.endpoint()
        );
        let result = self.gateway.ask(&self.question).await;
        RequestOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

impl std::fmt::Debug for PendingRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingRequest")
            .field("ticket", &self.ticket)
            .field("question", &self.question)
            .finish_non_exhaustive()
    }
}

/// Result of one exchange, tagged with the ticket it was issued under
#[derive(Debug)]
pub struct RequestOutcome {
    pub ticket: RequestTicket,
    pub result: Result<ResponseBatch, GatewayError>,
}

/// Owner of the view state machine
pub struct RequestOrchestrator {
    gateway: Arc<dyn AggregationGateway>,
    state: ViewState,
    latest: RequestTicket,
}

impl RequestOrchestrator {
    pub fn new(gateway: Arc<dyn AggregationGateway>) -> Self {
        Self {
            gateway,
            state: ViewState::Idle,
            latest: RequestTicket::INITIAL,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn gateway(&self) -> &Arc<dyn AggregationGateway> {
        &self.gateway
    }

    /// Enter `Submitting` for `question`.
    ///
    /// The previous batch or error is dropped here, before anything is sent.
    pub fn begin(&mut self, question: Question) -> PendingRequest {
        self.latest = self.latest.next();
        self.state = ViewState::Submitting;
        info!(
            "Request {} submitted: {}",
            self.latest,
            question.preview(80)
        );
        PendingRequest {
            ticket: self.latest,
            question,
            gateway: Arc::clone(&self.gateway),
        }
    }

    /// Apply an outcome if it belongs to the latest request.
    ///
    /// Returns `true` when the state changed.
    pub fn resolve(&mut self, outcome: RequestOutcome) -> bool {
        if outcome.ticket != self.latest || !self.state.is_submitting() {
            debug!(
                "Dropping result of superseded request {} (latest {}, state {})",
                outcome.ticket,
                self.latest,
                self.state.label()
            );
            return false;
        }

        self.state = match outcome.result {
            Ok(batch) => {
                info!(
                    "Request {} succeeded with {} responses ({} flagged)",
                    outcome.ticket,
                    batch.len(),
                    batch.failed_count()
                );
                ViewState::Succeeded(batch)
            }
            Err(e) => {
                warn!("Request {} failed: {}", outcome.ticket, e);
                let message = e.user_message();
                if message.is_empty() {
                    ViewState::Failed(FALLBACK_ERROR_MESSAGE.to_string())
                } else {
                    ViewState::Failed(message)
                }
            }
        };
        true
    }

    /// Return to `Idle` from any state. Any outstanding result is discarded
    /// when it arrives.
    pub fn reset(&mut self) {
        if self.state.is_submitting() {
            debug!("Abandoning outstanding request {}", self.latest);
        }
        self.latest = self.latest.next();
        self.state = ViewState::Idle;
    }

    /// Begin, send and resolve in one step.
    pub async fn execute(
        &mut self,
        question: Question,
        progress: &dyn SubmissionNotifier,
    ) -> &ViewState {
        let pending = self.begin(question);
        progress.on_submit_start(pending.question(), &KnownAgent::ALL);
        let outcome = pending.send().await;
        self.resolve(outcome);
        progress.on_submit_complete(&self.state);
        &self.state
    }
}
