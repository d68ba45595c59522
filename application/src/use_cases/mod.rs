//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod comparison_session;
pub mod input_controller;
pub mod request_orchestrator;
