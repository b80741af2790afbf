//! Slash commands
//!
//! - `/council`, `/redteam`, `/firstprinciples`, `/creative` force a mode
//! - `/memory-status` reports the size of each memory file

use crate::think::{StatusIndicator, ThinkMode, ThinkRequest, ThinkResponse, Thinker};
use crate::Result;
use std::fmt;

/// PAI slash commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaiCommand {
    Council,
    RedTeam,
    FirstPrinciples,
    Creative,
    /// Show memory file sizes
    MemoryStatus,
}

impl PaiCommand {
    pub fn all() -> &'static [PaiCommand] {
        &[
            PaiCommand::Council,
            PaiCommand::RedTeam,
            PaiCommand::FirstPrinciples,
            PaiCommand::Creative,
            PaiCommand::MemoryStatus,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaiCommand::Council => "council",
            PaiCommand::RedTeam => "redteam",
            PaiCommand::FirstPrinciples => "firstprinciples",
            PaiCommand::Creative => "creative",
            PaiCommand::MemoryStatus => "memory-status",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PaiCommand::Council => "Multi-perspective debate on a problem",
            PaiCommand::RedTeam => "Failure and attack analysis of a plan",
            PaiCommand::FirstPrinciples => "Challenge the assumptions behind a problem",
            PaiCommand::Creative => "Lateral thinking when stuck",
            PaiCommand::MemoryStatus => "Show memory file sizes",
        }
    }

    /// Mode forced by this command, if it is a thinking shortcut
    pub fn forced_mode(&self) -> Option<ThinkMode> {
        match self {
            PaiCommand::Council => Some(ThinkMode::Council),
            PaiCommand::RedTeam => Some(ThinkMode::RedTeam),
            PaiCommand::FirstPrinciples => Some(ThinkMode::FirstPrinciples),
            PaiCommand::Creative => Some(ThinkMode::BeCreative),
            PaiCommand::MemoryStatus => None,
        }
    }

    pub fn takes_args(&self) -> bool {
        self.forced_mode().is_some()
    }

    pub fn usage(&self) -> String {
        if self.takes_args() {
            format!("Usage: {} <problem>", self)
        } else {
            format!("Usage: {}", self)
        }
    }

    pub fn parse(name: &str) -> Option<PaiCommand> {
        let name = name.to_lowercase();
        Self::all().iter().find(|cmd| cmd.name() == name).copied()
    }
}

impl fmt::Display for PaiCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

/// Parsed command input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Pai(PaiCommand, String),
    Unknown(String),
}

/// Parse `/name args`; returns `None` for input without a leading slash.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let rest = input.trim().strip_prefix('/')?;
    let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));

    Some(match PaiCommand::parse(name) {
        Some(cmd) => ParsedCommand::Pai(cmd, args.trim().to_string()),
        None => ParsedCommand::Unknown(name.to_string()),
    })
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// A forced-mode scaffold
    Think(ThinkResponse),
    /// Informational text for the user
    Notice(String),
    /// The command was invoked incorrectly; nothing ran
    Usage(String),
}

impl CommandOutput {
    pub fn text(&self) -> &str {
        match self {
            CommandOutput::Think(response) => &response.text,
            CommandOutput::Notice(text) | CommandOutput::Usage(text) => text,
        }
    }
}

/// Execute a command against `thinker`.
pub async fn run_command(
    thinker: &Thinker,
    command: PaiCommand,
    args: &str,
    status: &dyn StatusIndicator,
) -> Result<CommandOutput> {
    let args = args.trim();

    if let Some(mode) = command.forced_mode() {
        if args.is_empty() {
            return Ok(CommandOutput::Usage(command.usage()));
        }
        let request = ThinkRequest::new(args).with_mode(mode);
        let response = thinker.think(&request, status).await?;
        return Ok(CommandOutput::Think(response));
    }

    let lines: Vec<String> = thinker
        .store()
        .status()
        .await
        .iter()
        .map(|s| format!("- {}", s))
        .collect();
    Ok(CommandOutput::Notice(format!(
        "Memory files:\n{}",
        lines.join("\n")
    )))
}

/// Parse and execute one input line.
pub async fn run_line(
    thinker: &Thinker,
    input: &str,
    status: &dyn StatusIndicator,
) -> Result<CommandOutput> {
    match parse_command(input) {
        Some(ParsedCommand::Pai(command, args)) => {
            run_command(thinker, command, &args, status).await
        }
        Some(ParsedCommand::Unknown(name)) => Ok(CommandOutput::Usage(format!(
            "Unknown command '/{}'. Available commands:\n{}",
            name,
            available_commands()
        ))),
        None => Ok(CommandOutput::Usage(format!(
            "Commands start with '/'. Available commands:\n{}",
            available_commands()
        ))),
    }
}

fn available_commands() -> String {
    PaiCommand::all()
        .iter()
        .map(|cmd| format!("  {:<18}{}", cmd.to_string(), cmd.description()))
        .collect::<Vec<_>>()
        .join("\n")
}
