//! Known agent catalog

/// Agents the aggregation endpoint is expected to consult (Value Object)
///
/// The catalog is closed, but responses may still carry names outside it;
/// callers go through [`KnownAgent::from_name`] and handle `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownAgent {
    Gpt4,
    Claude,
    Gemini,
    Llama,
}

impl KnownAgent {
    /// All known agents, in display order
    pub const ALL: [KnownAgent; 4] = [
        KnownAgent::Gpt4,
        KnownAgent::Claude,
        KnownAgent::Gemini,
        KnownAgent::Llama,
    ];

    /// The identifier the aggregation endpoint uses for this agent
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownAgent::Gpt4 => "GPT-4",
            KnownAgent::Claude => "Claude",
            KnownAgent::Gemini => "Gemini",
            KnownAgent::Llama => "Llama",
        }
    }

    /// Look up an agent by its wire identifier (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|agent| agent.as_str() == name)
    }
}

impl std::fmt::Display for KnownAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = KnownAgent::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, vec!["GPT-4", "Claude", "Gemini", "Llama"]);
    }

    #[test]
    fn test_from_name_roundtrip() {
        for agent in KnownAgent::ALL {
            assert_eq!(KnownAgent::from_name(agent.as_str()), Some(agent));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(KnownAgent::from_name("Mistral"), None);
        assert_eq!(KnownAgent::from_name("claude"), None);
        assert_eq!(KnownAgent::from_name(""), None);
    }
}
