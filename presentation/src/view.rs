//! Results view model
//!
//! [`ResultsView`] is a pure projection of [`ViewState`]: it decides which
//! cards exist and how each is labelled, leaving layout and colors to the
//! console and TUI renderers.

use crate::style::catalog::{AgentColor, AgentIcon, AgentStyle};
use panel_domain::{AgentResponse, KnownAgent, ViewState};

/// Text shown on every placeholder card while a question is outstanding
pub const WORKING_INDICATOR: &str = "Analyzing the question...";

/// Notice attached to a card whose agent reported a failure
pub const AGENT_ERROR_NOTICE: &str = "This agent ran into an error";

/// Shown when the endpoint answered with an empty batch
pub const NO_RESPONSES_NOTICE: &str = "No agent returned an answer";

/// A loading card for one expected agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCard {
    pub agent: KnownAgent,
    pub icon: AgentIcon,
    pub color: AgentColor,
    pub indicator: &'static str,
}

impl PlaceholderCard {
    fn for_agent(agent: KnownAgent) -> Self {
        let style = AgentStyle::for_agent(agent);
        Self {
            agent,
            icon: style.icon,
            color: style.color,
            indicator: WORKING_INDICATOR,
        }
    }

    pub fn name(&self) -> &'static str {
        self.agent.as_str()
    }
}

/// One rendered agent answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseCard {
    pub icon: AgentIcon,
    pub color: AgentColor,
    pub agent_name: String,
    pub agent_description: String,
    pub style_badge: String,
    pub response_text: String,
    pub agent_error_notice: Option<&'static str>,
}

impl From<&AgentResponse> for ResponseCard {
    fn from(response: &AgentResponse) -> Self {
        let style = AgentStyle::resolve(&response.agent_name);
        Self {
            icon: style.icon,
            color: style.color,
            agent_name: response.agent_name.clone(),
            agent_description: response.agent_description.clone(),
            style_badge: response.style.clone(),
            response_text: response.response_text.clone(),
            agent_error_notice: response.agent_error.then_some(AGENT_ERROR_NOTICE),
        }
    }
}

/// What the results area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing asked yet
    Empty,
    /// One placeholder per expected agent
    Loading(Vec<PlaceholderCard>),
    /// One card per response, in the order received
    Responses(Vec<ResponseCard>),
    /// The request succeeded but no agent answered
    NoResponses,
    /// The request failed as a whole
    Failure(String),
}

impl ResultsView {
    pub fn from_state(state: &ViewState) -> Self {
        match state {
            ViewState::Idle => ResultsView::Empty,
            ViewState::Submitting => ResultsView::Loading(
                KnownAgent::ALL
                    .into_iter()
                    .map(PlaceholderCard::for_agent)
                    .collect(),
            ),
            ViewState::Succeeded(batch) if batch.is_empty() => ResultsView::NoResponses,
            ViewState::Succeeded(batch) => {
                ResultsView::Responses(batch.iter().map(ResponseCard::from).collect())
            }
            ViewState::Failed(message) => ResultsView::Failure(message.clone()),
        }
    }

    /// Section heading, if this view has one
    pub fn heading(&self) -> Option<String> {
        match self {
            ResultsView::Loading(_) => Some("Processing...".to_string()),
            ResultsView::Responses(cards) => Some(format!("Answers from {} agents", cards.len())),
            ResultsView::NoResponses => Some("Answers from 0 agents".to_string()),
            ResultsView::Empty | ResultsView::Failure(_) => None,
        }
    }

    /// Response cards (empty unless the view is [`ResultsView::Responses`])
    pub fn cards(&self) -> &[ResponseCard] {
        match self {
            ResultsView::Responses(cards) => cards,
            _ => &[],
        }
    }
}
