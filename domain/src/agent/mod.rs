//! Agent subdomain: the agents on the panel and what they answer.
//!
//! - [`catalog::KnownAgent`]: the fixed set of agents we expect to hear from
//! - [`response::AgentResponse`] / [`response::ResponseBatch`]: one submission's answers

pub mod catalog;
pub mod response;
