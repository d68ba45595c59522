//! Agent icon and color catalogs
//!
//! Both catalogs are keyed by agent identifier and fall back to a neutral
//! entry for names the catalog does not know.

use panel_domain::KnownAgent;

/// Icon shown next to an agent's name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentIcon {
    Brain,
    Shield,
    Search,
    Sparkles,
    /// Generic fallback for unknown agents
    Bot,
}

impl AgentIcon {
    pub fn for_agent(agent: KnownAgent) -> Self {
        match agent {
            KnownAgent::Gpt4 => AgentIcon::Brain,
            KnownAgent::Claude => AgentIcon::Shield,
            KnownAgent::Gemini => AgentIcon::Search,
            KnownAgent::Llama => AgentIcon::Sparkles,
        }
    }

    /// Resolve an icon from a wire name, falling back to [`AgentIcon::Bot`]
    pub fn resolve(name: &str) -> Self {
        KnownAgent::from_name(name)
            .map(Self::for_agent)
            .unwrap_or(AgentIcon::Bot)
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            AgentIcon::Brain => "🧠",
            AgentIcon::Shield => "🛡",
            AgentIcon::Search => "🔍",
            AgentIcon::Sparkles => "✨",
            AgentIcon::Bot => "🤖",
        }
    }
}

/// Accent color for an agent's card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentColor {
    Blue,
    Green,
    Purple,
    Orange,
    /// Generic fallback for unknown agents
    Neutral,
}

impl AgentColor {
    pub fn for_agent(agent: KnownAgent) -> Self {
        match agent {
            KnownAgent::Gpt4 => AgentColor::Blue,
            KnownAgent::Claude => AgentColor::Green,
            KnownAgent::Gemini => AgentColor::Purple,
            KnownAgent::Llama => AgentColor::Orange,
        }
    }

    /// Resolve a color from a wire name, falling back to [`AgentColor::Neutral`]
    pub fn resolve(name: &str) -> Self {
        KnownAgent::from_name(name)
            .map(Self::for_agent)
            .unwrap_or(AgentColor::Neutral)
    }

    /// Color for console output
    pub fn console(&self) -> colored::Color {
        match self {
            AgentColor::Blue => colored::Color::Blue,
            AgentColor::Green => colored::Color::Green,
            AgentColor::Purple => colored::Color::Magenta,
            AgentColor::Orange => colored::Color::TrueColor {
                r: 255,
                g: 140,
                b: 0,
            },
            AgentColor::Neutral => colored::Color::White,
        }
    }

    /// Color for the terminal UI
    pub fn tui(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AgentColor::Blue => Color::Blue,
            AgentColor::Green => Color::Green,
            AgentColor::Purple => Color::Magenta,
            AgentColor::Orange => Color::Rgb(255, 140, 0),
            AgentColor::Neutral => Color::Gray,
        }
    }
}

/// Icon and color resolved together for one agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentStyle {
    pub icon: AgentIcon,
    pub color: AgentColor,
}

impl AgentStyle {
    pub fn for_agent(agent: KnownAgent) -> Self {
        Self {
            icon: AgentIcon::for_agent(agent),
            color: AgentColor::for_agent(agent),
        }
    }

    pub fn resolve(name: &str) -> Self {
        Self {
            icon: AgentIcon::resolve(name),
            color: AgentColor::resolve(name),
        }
    }
}
