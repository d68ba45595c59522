//! Wire format of the aggregation endpoint
//!
//! Request: `{"question": "..."}`
//!
//! Reply:
//! ```json
//! {"responses": [
//!   {"ai_name": "Claude", "ai_description": "...", "style": "...",
//!    "response": "...", "error": false}
//! ]}
//! ```
//! Every field of a record may be missing or null. A missing or null
//! `responses` list means no agent answered.

use panel_domain::{AgentResponse, ResponseBatch};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of the POST request
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// Body of a successful reply
#[derive(Debug, Default, Deserialize)]
pub struct AskReply {
    #[serde(default)]
    pub responses: Option<Vec<WireAgentResponse>>,
}

impl AskReply {
    pub fn into_batch(self) -> ResponseBatch {
        self.responses
            .unwrap_or_default()
            .into_iter()
            .map(AgentResponse::from)
            .collect::<Vec<_>>()
            .into()
    }
}

/// One agent record as the endpoint sends it
#[derive(Debug, Default, Deserialize)]
pub struct WireAgentResponse {
    #[serde(default)]
    pub ai_name: Option<String>,
    #[serde(default)]
    pub ai_description: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    /// Truthy values mark a per-agent failure
    #[serde(default, deserialize_with = "truthy")]
    pub error: bool,
}

impl From<WireAgentResponse> for AgentResponse {
    fn from(wire: WireAgentResponse) -> Self {
        AgentResponse::new(
            wire.ai_name.unwrap_or_default(),
            wire.ai_description.unwrap_or_default(),
            wire.style.unwrap_or_default(),
            wire.response.unwrap_or_default(),
        )
        .with_agent_error(wire.error)
    }
}

/// Error body some endpoints send with a non-success status
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// First non-blank message in the body, if it parses at all
    pub fn extract(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        [parsed.error, parsed.message]
            .into_iter()
            .flatten()
            .map(|m| m.trim().to_string())
            .find(|m| !m.is_empty())
    }
}

// Backends disagree on the flag's type; accept booleans, numbers, strings.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(AskRequest { question: "Why?" }).unwrap();
        assert_eq!(body, serde_json::json!({ "question": "Why?" }));
    }

    #[test]
    fn test_missing_responses_is_empty_batch() {
        let reply: AskReply = serde_json::from_str("{}").unwrap();
        assert!(reply.into_batch().is_empty());

        let reply: AskReply = serde_json::from_str(r#"{"responses": null}"#).unwrap();
        assert!(reply.into_batch().is_empty());
    }

    #[test]
    fn test_records_are_mapped_in_order() {
        let json = r#"{"responses": [
            {"ai_name": "Gemini", "ai_description": "Curious", "style": "Exploratory",
             "response": "line 1\nline 2", "error": false},
            {"ai_name": "GPT-4", "ai_description": "Precise", "style": "Analytical",
             "response": "ok"}
        ]}"#;
        let batch = serde_json::from_str::<AskReply>(json).unwrap().into_batch();
        assert_eq!(batch.len(), 2);

        let first = batch.iter().next().unwrap();
        assert_eq!(first.agent_name, "Gemini");
        assert_eq!(first.agent_description, "Curious");
        assert_eq!(first.style, "Exploratory");
        assert_eq!(first.response_text, "line 1\nline 2");
        assert!(!first.agent_error);
        assert_eq!(batch.iter().nth(1).unwrap().agent_name, "GPT-4");
    }

    #[test]
    fn test_error_flag_variants() {
        let cases = [
            (r#"{"error": true}"#, true),
            (r#"{"error": false}"#, false),
            (r#"{"error": null}"#, false),
            (r#"{"error": 1}"#, true),
            (r#"{"error": 0}"#, false),
            (r#"{"error": "rate limited"}"#, true),
            (r#"{"error": ""}"#, false),
            (r#"{}"#, false),
        ];
        for (json, expected) in cases {
            let wire: WireAgentResponse = serde_json::from_str(json).unwrap();
            assert_eq!(wire.error, expected, "for {}", json);
        }
    }

    #[test]
    fn test_null_fields_become_empty_strings() {
        let wire: WireAgentResponse =
            serde_json::from_str(r#"{"ai_name": null, "response": null}"#).unwrap();
        let response = AgentResponse::from(wire);
        assert_eq!(response.agent_name, "");
        assert_eq!(response.response_text, "");
    }

    #[test]
    fn test_error_body_extract() {
        assert_eq!(
            ErrorBody::extract(r#"{"error": "Question is required"}"#),
            Some("Question is required".to_string())
        );
        assert_eq!(
            ErrorBody::extract(r#"{"error": " ", "message": "Upstream down"}"#),
            Some("Upstream down".to_string())
        );
        assert_eq!(ErrorBody::extract("<html>502</html>"), None);
        assert_eq!(ErrorBody::extract("{}"), None);
    }
}
