//! Aggregation gateway port
//!
//! Defines the interface for sending a question to the aggregation endpoint,
//! which fans it out to several agents and returns their answers together.

use async_trait::async_trait;
use panel_domain::{Question, ResponseBatch};
use thiserror::Error;

/// Errors that can occur during an aggregation exchange
///
/// The variants only exist for logging; callers treat every one of them as
/// "the request failed" and show [`GatewayError::user_message`].
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Could not reach the aggregation endpoint: {0}")]
    Connection(String),

    #[error("The aggregation endpoint did not answer in time")]
    Timeout,

    #[error("{message}")]
    Status { code: u16, message: String },

    #[error("Invalid response from the aggregation endpoint: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Other(String),
}

impl GatewayError {
    /// Best-effort description for the user. May be empty when the endpoint
    /// gave nothing usable.
    pub fn user_message(&self) -> String {
        self.to_string().trim().to_string()
    }
}

/// Gateway to the aggregation endpoint
///
/// One call is one network exchange. Implementations must not retry.
#[async_trait]
pub trait AggregationGateway: Send + Sync {
    /// Send the question and return every agent's answer, in the order the
    /// endpoint listed them. A reply without a response list is an empty batch.
    async fn ask(&self, question: &Question) -> Result<ResponseBatch, GatewayError>;

    /// Address of the endpoint, for display
    fn endpoint(&self) -> &str;
}
