//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question to be answered by the agent panel (Value Object)
///
/// The content is always trimmed and never empty. The raw text a user is
/// still editing is not a `Question`; it only becomes one at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a question from raw input, returning None if the
    /// trimmed text is empty
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Short single-line preview for log lines, cut at `max_chars` characters
    pub fn preview(&self, max_chars: usize) -> String {
        let flat: String = self
            .content
            .chars()
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        if flat.chars().count() <= max_chars {
            flat
        } else {
            let cut: String = flat.chars().take(max_chars).collect();
            format!("{}...", cut)
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Question::try_new(&value).ok_or(DomainError::InvalidQuestion(value))
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Question::try_new(value).ok_or_else(|| DomainError::InvalidQuestion(value.to_string()))
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}
