//! Mode auto-selection by keyword patterns

use super::ThinkMode;
use regex::Regex;
use std::sync::LazyLock;

/// Security and risk signals
pub const RED_TEAM_PATTERNS: &[&str] = &[
    r"\battack\b",
    r"\bvulnerab",
    r"\bsecurity\s+risk",
    r"\bexploit",
    r"\bthreat\b",
    r"\bpenetrat",
];

/// Signals that the framing itself is in question
pub const FIRST_PRINCIPLES_PATTERNS: &[&str] = &[
    r"\bwhy\s+do\s+we\b",
    r"\bassumptions?\b",
    r"\bfundamental",
    r"\bfrom\s+scratch\b",
    r"\bfirst\s+principles?\b",
];

/// Signals of being stuck or wanting divergent ideas
pub const CREATIVE_PATTERNS: &[&str] = &[
    r"\bstuck\b",
    r"\bnovel\b",
    r"\blateral\b",
    r"\bwhat\s+if\s+we\b",
    r"\bunconventional",
    r"\bwild\s+idea",
    r"\bout\s+of\s+the\s+box",
];

/// Mode used when no rule set matches
pub const DEFAULT_MODE: ThinkMode = ThinkMode::Council;

static DEFAULT_ROUTER: LazyLock<ModeRouter> = LazyLock::new(ModeRouter::new);

/// Classify a problem statement with the built-in rule sets.
pub fn classify(problem: &str) -> ThinkMode {
    DEFAULT_ROUTER.classify(problem)
}

/// Compiled patterns that all select one mode
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub mode: ThinkMode,
    patterns: Vec<Regex>,
}

impl RuleSet {
    /// Compile case-insensitive patterns for `mode`.
    pub fn new(mode: ThinkMode, patterns: &[&str]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){p}")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { mode, patterns })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }
}

/// Ordered rule sets; the first set with a match decides the mode.
///
/// Priority: red_team > first_principles > be_creative > council (default).
#[derive(Debug, Clone)]
pub struct ModeRouter {
    rules: Vec<RuleSet>,
    fallback: ThinkMode,
}

impl ModeRouter {
    pub fn new() -> Self {
        Self::with_rules(Self::compile_default_rules(), DEFAULT_MODE)
    }

    pub fn with_rules(rules: Vec<RuleSet>, fallback: ThinkMode) -> Self {
        Self { rules, fallback }
    }

    fn compile_default_rules() -> Vec<RuleSet> {
        [
            (ThinkMode::RedTeam, RED_TEAM_PATTERNS),
            (ThinkMode::FirstPrinciples, FIRST_PRINCIPLES_PATTERNS),
            (ThinkMode::BeCreative, CREATIVE_PATTERNS),
        ]
        .into_iter()
        .map(|(mode, patterns)| {
            RuleSet::new(mode, patterns).expect("built-in mode patterns are valid regexes")
        })
        .collect()
    }

    pub fn rules(&self) -> &[RuleSet] {
        &self.rules
    }

    pub fn classify(&self, problem: &str) -> ThinkMode {
        self.rules
            .iter()
            .find(|rule| rule.is_match(problem))
            .map(|rule| rule.mode)
            .unwrap_or(self.fallback)
    }
}

impl Default for ModeRouter {
    fn default() -> Self {
        Self::new()
    }
}
