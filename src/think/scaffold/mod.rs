//! Markdown scaffolds, one per thinking mode
//!
//! Every scaffold has the same shape: title and problem, optional context,
//! optional memory digest, mode-specific instructions, success criteria.

mod be_creative;
mod council;
mod first_principles;
mod red_team;

use super::ThinkMode;

/// Checklist closing every scaffold
pub const SUCCESS_CRITERIA: &str = "## Success Criteria
- [ ] Criterion 1
- [ ] Criterion 2
- [ ] Criterion 3

Define 3-5 bullets for what \"done\" looks like.";

/// Build the scaffold for `mode`.
pub fn generate(
    mode: ThinkMode,
    problem: &str,
    context: Option<&str>,
    memory: Option<&str>,
) -> String {
    match mode {
        ThinkMode::Council => council::generate(problem, context, memory),
        ThinkMode::RedTeam => red_team::generate(problem, context, memory),
        ThinkMode::FirstPrinciples => first_principles::generate(problem, context, memory),
        ThinkMode::BeCreative => be_creative::generate(problem, context, memory),
    }
}

/// Title of the scaffold for `mode`
pub fn title(mode: ThinkMode) -> &'static str {
    match mode {
        ThinkMode::Council => council::TITLE,
        ThinkMode::RedTeam => red_team::TITLE,
        ThinkMode::FirstPrinciples => first_principles::TITLE,
        ThinkMode::BeCreative => be_creative::TITLE,
    }
}

/// Join the shared sections around a mode's instruction body.
fn assemble(
    title: &str,
    problem: &str,
    context: Option<&str>,
    memory: Option<&str>,
    instructions: &str,
) -> String {
    let mut sections = vec![format!("# {title}\n\n**Problem:** {problem}")];

    if let Some(context) = context.filter(|c| !c.is_empty()) {
        sections.push(format!("**Additional context:** {context}"));
    }
    if let Some(memory) = memory.filter(|m| !m.is_empty()) {
        sections.push(format!("**From memory:**\n{memory}"));
    }

    sections.push(format!(
        "\n## Instructions\n\n{}\n\n{}",
        instructions.trim(),
        SUCCESS_CRITERIA
    ));

    sections.join("\n\n")
}
