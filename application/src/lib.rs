//! Application layer for answer-panel
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EndpointConfig;
pub use ports::{
    aggregation_gateway::{AggregationGateway, GatewayError},
    progress::{NoProgress, SubmissionNotifier},
};
pub use use_cases::comparison_session::ComparisonSession;
pub use use_cases::input_controller::InputController;
pub use use_cases::request_orchestrator::{
    FALLBACK_ERROR_MESSAGE, PendingRequest, RequestOrchestrator, RequestOutcome,
};
