//! View state entity

use crate::agent::response::ResponseBatch;
use serde::{Deserialize, Serialize};

/// What the results area of a session represents right now
///
/// Transitions are driven only by the request orchestrator; see
/// `RequestOrchestrator` in the application layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState {
    /// Nothing submitted, or cleared
    #[default]
    Idle,
    /// One request is outstanding
    Submitting,
    /// The endpoint answered; the batch may be empty
    Succeeded(ResponseBatch),
    /// The request as a whole failed
    Failed(String),
}

impl ViewState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ViewState::Submitting)
    }

    /// Responses, when in `Succeeded`
    pub fn batch(&self) -> Option<&ResponseBatch> {
        match self {
            ViewState::Succeeded(batch) => Some(batch),
            _ => None,
        }
    }

    /// Whole-request error message, when in `Failed`
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short label used in status lines and logs
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Submitting => "submitting",
            ViewState::Succeeded(_) => "succeeded",
            ViewState::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewState::Succeeded(batch) => write!(f, "succeeded ({} responses)", batch.len()),
            ViewState::Failed(message) => write!(f, "failed: {}", message),
            other => write!(f, "{}", other.label()),
        }
    }
}
