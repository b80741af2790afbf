//! Structured thinking
//!
//! Wraps a problem statement in one of four analytical scaffolds. The mode is
//! either chosen by the caller or classified from the problem text.

mod orchestrator;
pub mod router;
pub mod scaffold;

pub use orchestrator::{NoStatus, StatusIndicator, Thinker, NO_MEMORY_NOTE, STATUS_KEY};
pub use router::{classify, ModeRouter, RuleSet};

use crate::{PaiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four thinking modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThinkMode {
    /// Multi-perspective debate
    Council,
    /// Failure and attack analysis
    RedTeam,
    /// Assumption challenging
    FirstPrinciples,
    /// Lateral thinking
    BeCreative,
}

impl ThinkMode {
    pub fn all() -> &'static [ThinkMode] {
        &[
            ThinkMode::Council,
            ThinkMode::RedTeam,
            ThinkMode::FirstPrinciples,
            ThinkMode::BeCreative,
        ]
    }

    /// Wire name, as accepted by the `think` tool
    pub fn name(&self) -> &'static str {
        match self {
            ThinkMode::Council => "council",
            ThinkMode::RedTeam => "red_team",
            ThinkMode::FirstPrinciples => "first_principles",
            ThinkMode::BeCreative => "be_creative",
        }
    }

    /// Human-readable label for status lines
    pub fn label(&self) -> &'static str {
        match self {
            ThinkMode::Council => "council",
            ThinkMode::RedTeam => "red team",
            ThinkMode::FirstPrinciples => "first principles",
            ThinkMode::BeCreative => "creative",
        }
    }
}

impl fmt::Display for ThinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThinkMode {
    type Err = PaiError;

    fn from_str(name: &str) -> Result<Self> {
        let name = name.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|mode| mode.name() == name)
            .copied()
            .ok_or_else(|| {
                PaiError::usage(format!(
                    "unknown thinking mode '{name}' (expected council, red_team, first_principles or be_creative)"
                ))
            })
    }
}

/// Requested mode: a fixed mode, or `auto` for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ModeSelection {
    #[default]
    Auto,
    Fixed(ThinkMode),
}

impl ModeSelection {
    /// The explicit mode, if one was requested
    pub fn fixed(self) -> Option<ThinkMode> {
        match self {
            ModeSelection::Auto => None,
            ModeSelection::Fixed(mode) => Some(mode),
        }
    }
}

impl From<ThinkMode> for ModeSelection {
    fn from(mode: ThinkMode) -> Self {
        ModeSelection::Fixed(mode)
    }
}

impl FromStr for ModeSelection {
    type Err = PaiError;

    fn from_str(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("auto") {
            return Ok(ModeSelection::Auto);
        }
        name.parse().map(ModeSelection::Fixed).map_err(|_| {
            PaiError::usage(format!(
                "unknown thinking mode '{}' (expected council, red_team, first_principles, be_creative or auto)",
                name.to_lowercase()
            ))
        })
    }
}

impl TryFrom<String> for ModeSelection {
    type Error = PaiError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl From<ModeSelection> for String {
    fn from(selection: ModeSelection) -> Self {
        match selection {
            ModeSelection::Auto => "auto".to_string(),
            ModeSelection::Fixed(mode) => mode.name().to_string(),
        }
    }
}

/// Input to the `think` operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThinkRequest {
    /// What needs thinking about
    pub problem: String,

    /// Thinking mode; absent means auto
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ModeSelection>,

    /// Additional context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ThinkRequest {
    pub fn new(problem: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: impl Into<ModeSelection>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Output of the `think` operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThinkResponse {
    pub text: String,
    /// Mode that produced the scaffold, also when auto-selected
    pub resolved_mode: ThinkMode,
}
