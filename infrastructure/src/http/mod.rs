//! HTTP adapter for the aggregation endpoint
//!
//! - [`gateway::HttpAggregationGateway`]: [`AggregationGateway`] over reqwest
//! - [`protocol`]: JSON request/reply shapes the endpoint speaks
//!
//! [`AggregationGateway`]: panel_application::AggregationGateway

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::HttpGatewayError;
pub use gateway::HttpAggregationGateway;
