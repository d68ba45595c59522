//! reqwest implementation of the aggregation gateway port

use super::error::{HttpGatewayError, Result};
use super::protocol::{AskReply, AskRequest, ErrorBody};
use async_trait::async_trait;
use panel_application::{AggregationGateway, EndpointConfig, GatewayError};
use panel_domain::{Question, ResponseBatch};
use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("answer-panel/", env!("CARGO_PKG_VERSION"));

/// Sends questions to the aggregation endpoint over HTTP(S)
pub struct HttpAggregationGateway {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpAggregationGateway {
    /// Build a gateway for the configured endpoint.
    ///
    /// The URL must be absolute http or https. The configured timeout, if
    /// any, bounds the whole exchange.
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        let endpoint = parse_endpoint(&config.url)?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }
}

#[async_trait]
impl AggregationGateway for HttpAggregationGateway {
    async fn ask(&self, question: &Question) -> std::result::Result<ResponseBatch, GatewayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&AskRequest {
                question: question.content(),
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Aggregation endpoint answered {}", status);
            return Err(GatewayError::Status {
                code: status.as_u16(),
                message: status_message(status, &body),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        debug!("Aggregation reply: {} bytes", body.len());

        let reply: AskReply = serde_json::from_slice(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        Ok(reply.into_batch())
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let invalid = |reason: String| HttpGatewayError::InvalidEndpoint {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() || e.is_request() {
        GatewayError::Connection(error_chain(&e))
    } else if e.is_decode() || e.is_body() {
        GatewayError::InvalidResponse(error_chain(&e))
    } else {
        GatewayError::Other(error_chain(&e))
    }
}

/// Render an error followed by each of its causes, skipping causes whose
/// text the message already contains.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn status_message(status: StatusCode, body: &str) -> String {
    ErrorBody::extract(body).unwrap_or_else(|| format!("Request failed with status {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_application::{NoProgress, RequestOrchestrator};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // ============= Helper Functions =============

    async fn gateway_for(server: &MockServer) -> HttpAggregationGateway {
        let config = EndpointConfig::new(format!("{}/api/ask", server.uri()));
        HttpAggregationGateway::new(&config).unwrap()
    }

    fn question(text: &str) -> Question {
        Question::try_new(text).unwrap()
    }

    // ============= Tests =============

    #[tokio::test]
    async fn test_posts_trimmed_question_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "question": "What is Rust?" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "responses": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let batch = gateway.ask(&question("  What is Rust?  ")).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_decodes_records_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "question": "q",
                "responses": [
                    {"ai_name": "GPT-4", "ai_description": "Analytical", "style": "Formal",
                     "response": "First\nSecond"},
                    {"ai_name": "Claude", "ai_description": "Thoughtful", "style": "Careful",
                     "response": "", "error": true},
                    {"ai_name": "Mistral", "ai_description": "Unknown", "style": "Terse",
                     "response": "hi"}
                ]
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let batch = gateway.ask(&question("q")).await.unwrap();

        let names: Vec<_> = batch.iter().map(|r| r.agent_name.as_str()).collect();
        assert_eq!(names, vec!["GPT-4", "Claude", "Mistral"]);
        assert_eq!(batch.iter().next().unwrap().response_text, "First\nSecond");
        assert!(batch.iter().nth(1).unwrap().agent_error);
        assert_eq!(batch.failed_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_responses_field_is_empty_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        assert!(gateway.ask(&question("q")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_error_status_uses_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "error": "Question is required" })),
            )
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let err = gateway.ask(&question("q")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Status { code: 400, .. }));
        assert_eq!(err.user_message(), "Question is required");
    }

    #[tokio::test]
    async fn test_error_status_without_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let err = gateway.ask(&question("q")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Status { code: 503, .. }));
        assert!(err.user_message().contains("503"));
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let err = gateway.ask(&question("q")).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    /// A local port with nothing listening on it
    fn closed_port() -> u16 {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let url = format!("http://127.0.0.1:{}/api/ask", closed_port());
        let gateway = HttpAggregationGateway::new(&EndpointConfig::new(url)).unwrap();

        let err = gateway.ask(&question("q")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Connection(_)), "got {:?}", err);
        assert!(
            err.user_message().to_lowercase().contains("refused"),
            "cause missing from {:?}",
            err.user_message()
        );
    }

    #[tokio::test]
    async fn test_connection_refused_becomes_failed_state() {
        let url = format!("http://127.0.0.1:{}/api/ask", closed_port());
        let gateway = Arc::new(HttpAggregationGateway::new(&EndpointConfig::new(url)).unwrap());
        let mut orchestrator = RequestOrchestrator::new(gateway);

        let state = orchestrator.execute(question("q"), &NoProgress).await;
        let message = state.error_message().expect("request should fail");
        assert!(!message.is_empty());
        assert!(state.batch().is_none());
    }

    #[test]
    fn test_error_chain_appends_causes() {
        #[derive(Debug)]
        struct Outer(std::io::Error);
        impl std::fmt::Display for Outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "error sending request")
            }
        }
        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(error_chain(&err), "error sending request: Connection refused");
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "responses": [] }))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let mut config = EndpointConfig::new(format!("{}/api/ask", server.uri()));
        config.timeout = Some(Duration::from_millis(200));
        let gateway = HttpAggregationGateway::new(&config).unwrap();

        let err = gateway.ask(&question("q")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout), "got {:?}", err);
    }

    #[test]
    fn test_rejects_bad_endpoints() {
        for url in ["", "not a url", "ftp://example.com/ask", "localhost:5001/api/ask"] {
            let result = HttpAggregationGateway::new(&EndpointConfig::new(url));
            assert!(
                matches!(result, Err(HttpGatewayError::InvalidEndpoint { .. })),
                "{:?} should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_endpoint_is_reported() {
        let gateway =
            HttpAggregationGateway::new(&EndpointConfig::new("http://localhost:5001/api/ask"))
                .unwrap();
        assert_eq!(gateway.endpoint(), "http://localhost:5001/api/ask");
    }
}
