//! Domain layer for answer-panel
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A single free-text question, trimmed and guaranteed non-empty, that is
//! sent once to the aggregation endpoint.
//!
//! ## Response batch
//!
//! The ordered set of [`AgentResponse`]s that the aggregation endpoint
//! returns for one question. Each agent may flag its own failure without
//! failing the whole batch.
//!
//! ## View state
//!
//! [`ViewState`] is the single source of truth for what the results area
//! shows: `Idle`, `Submitting`, `Succeeded(batch)` or `Failed(message)`.
//! Each submission is tagged with a [`RequestTicket`] so that results of
//! superseded requests can be recognised and dropped.

pub mod agent;
pub mod core;
pub mod view;

// Re-export commonly used types
pub use agent::{
    catalog::KnownAgent,
    response::{AgentResponse, ResponseBatch},
};
pub use core::{error::DomainError, question::Question};
pub use view::{state::ViewState, ticket::RequestTicket};
