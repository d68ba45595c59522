//! Agent response value objects: what one submission brings back.
//!
//! - [`AgentResponse`] - One agent's answer, possibly flagged as failed
//! - [`ResponseBatch`] - All answers for one question, in the order returned

use serde::{Deserialize, Serialize};

/// One agent's answer to the submitted question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Agent identifier (normally one of [`KnownAgent`](super::catalog::KnownAgent), but not guaranteed)
    pub agent_name: String,
    /// Human-readable description of the agent's character
    pub agent_description: String,
    /// Short tag describing the agent's answering style
    pub style: String,
    /// The answer itself; line breaks are significant
    pub response_text: String,
    /// The agent failed even though the batch as a whole succeeded
    #[serde(default)]
    pub agent_error: bool,
}

impl AgentResponse {
    /// Creates a successful answer from an agent.
    pub fn new(
        agent_name: impl Into<String>,
        agent_description: impl Into<String>,
        style: impl Into<String>,
        response_text: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            agent_description: agent_description.into(),
            style: style.into(),
            response_text: response_text.into(),
            agent_error: false,
        }
    }

    /// Marks this answer as a per-agent failure.
    pub fn with_agent_error(mut self, failed: bool) -> Self {
        self.agent_error = failed;
        self
    }
}

/// Ordered answers returned together for one question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseBatch {
    responses: Vec<AgentResponse>,
}

impl ResponseBatch {
    pub fn new(responses: Vec<AgentResponse>) -> Self {
        Self { responses }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgentResponse> {
        self.responses.iter()
    }

    /// Number of entries carrying the per-agent error flag
    pub fn failed_count(&self) -> usize {
        self.responses.iter().filter(|r| r.agent_error).count()
    }
}

impl From<Vec<AgentResponse>> for ResponseBatch {
    fn from(responses: Vec<AgentResponse>) -> Self {
        Self::new(responses)
    }
}

impl IntoIterator for ResponseBatch {
    type Item = AgentResponse;
    type IntoIter = std::vec::IntoIter<AgentResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResponseBatch {
    type Item = &'a AgentResponse;
    type IntoIter = std::slice::Iter<'a, AgentResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> AgentResponse {
        AgentResponse::new(name, "desc", "style", "text")
    }

    #[test]
    fn test_batch_preserves_order() {
        let batch = ResponseBatch::new(vec![sample("Llama"), sample("GPT-4"), sample("Claude")]);
        let names: Vec<_> = batch.iter().map(|r| r.agent_name.as_str()).collect();
        assert_eq!(names, vec!["Llama", "GPT-4", "Claude"]);
    }

    #[test]
    fn test_failed_count() {
        let batch = ResponseBatch::new(vec![
            sample("GPT-4"),
            sample("Claude").with_agent_error(true),
            sample("Gemini"),
        ]);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.failed_count(), 1);
    }

    #[test]
    fn test_agent_error_defaults_to_false_when_absent() {
        let json = r#"{
            "agent_name": "Claude",
            "agent_description": "careful",
            "style": "analytical",
            "response_text": "hi"
        }"#;
        let response: AgentResponse = serde_json::from_str(json).unwrap();
        assert!(!response.agent_error);
    }

    #[test]
    fn test_empty_batch() {
        let batch = ResponseBatch::empty();
        assert!(batch.is_empty());
        assert_eq!(serde_json::to_string(&batch).unwrap(), "[]");
    }
}
