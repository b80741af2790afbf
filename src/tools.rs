//! Tool entry points for the host agent
//!
//! Both tools take JSON arguments and return text plus structured details.
//! Registration is the host's job; `ToolSpec` carries what it needs.

use crate::memory::{MemoryFile, MemoryStore};
use crate::think::{StatusIndicator, ThinkRequest, Thinker};
use crate::{PaiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use tracing::warn;

/// What a host needs to register a tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// JSON Schema of the arguments
    pub parameters: Value,
}

/// Result of a tool call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolOutput {
    pub text: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
    pub details: Value,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>, details: Value) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            details,
        }
    }

    pub fn error(text: impl Into<String>, details: Value) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            details,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryAction {
    /// Get file contents
    Read,
    /// Add a timestamped entry
    Append,
    /// Overwrite the file
    Replace,
}

impl fmt::Display for MemoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryAction::Read => write!(f, "read"),
            MemoryAction::Append => write!(f, "append"),
            MemoryAction::Replace => write!(f, "replace"),
        }
    }
}

/// Arguments of the `memory` tool
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryArgs {
    pub action: MemoryAction,
    pub file: MemoryFile,
    #[serde(default)]
    pub content: Option<String>,
}

pub fn memory_tool_spec() -> ToolSpec {
    ToolSpec {
        name: "memory",
        label: "Memory",
        description: "Read or write persistent memory files. Three files: preferences (tech stack, coding style), learnings (discoveries, append-only), context (current projects, goals). Use 'read' to check what's stored, 'append' to add to a file, 'replace' to rewrite a file.",
        parameters: json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": ["read", "append", "replace"],
                    "description": "read: get file contents. append: add to file. replace: overwrite file."
                },
                "file": {
                    "type": "string",
                    "enum": ["preferences", "learnings", "context"],
                    "description": "Which memory file to access."
                },
                "content": {
                    "type": "string",
                    "description": "Content to write. Required for append and replace."
                }
            },
            "required": ["action", "file"],
            "additionalProperties": false
        }),
    }
}

pub fn think_tool_spec() -> ToolSpec {
    ToolSpec {
        name: "think",
        label: "Think",
        description: "Structured thinking for complex problems. Modes: council (multi-perspective debate), red_team (failure analysis), first_principles (assumption challenging), be_creative (lateral thinking). Omit mode for auto-selection. Use for architectural decisions, risk assessment, assumption questioning, or when stuck. Don't use for simple tasks.",
        parameters: json!({
            "type": "object",
            "properties": {
                "problem": { "type": "string", "description": "What needs thinking about." },
                "mode": {
                    "type": "string",
                    "enum": ["council", "red_team", "first_principles", "be_creative", "auto"],
                    "description": "Thinking mode. Omit or 'auto' for automatic selection."
                },
                "context": { "type": "string", "description": "Additional context if needed." }
            },
            "required": ["problem"],
            "additionalProperties": false
        }),
    }
}

/// Run the `memory` tool. Failures come back as error output, never `Err`.
pub async fn memory_tool(store: &MemoryStore, args: Value) -> ToolOutput {
    let args: MemoryArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => {
            return ToolOutput::error(
                format!("Error: invalid memory arguments: {e}"),
                json!({ "error": "usage" }),
            )
        }
    };
    run_memory(store, &args).await
}

pub async fn run_memory(store: &MemoryStore, args: &MemoryArgs) -> ToolOutput {
    let details = json!({ "action": args.action, "file": args.file });
    let content = args.content.as_deref().unwrap_or_default();

    let result = match args.action {
        MemoryAction::Read => {
            let data = store.read(args.file).await;
            if data.is_empty() {
                return ToolOutput::text(
                    format!(
                        "Memory file '{}' is empty or hasn't been created yet. Use append or replace to add content.",
                        args.file
                    ),
                    details,
                );
            }
            return ToolOutput::text(data, details);
        }
        MemoryAction::Append => store
            .append(args.file, content)
            .await
            .map(|()| format!("Appended to {}.", args.file)),
        MemoryAction::Replace => store
            .replace(args.file, content)
            .await
            .map(|()| format!("Replaced contents of {}.", args.file)),
    };

    match result {
        Ok(text) => ToolOutput::text(text, details),
        Err(e @ PaiError::Usage(_)) => ToolOutput::error(format!("Error: {e}."), details),
        Err(e) => {
            warn!("Memory {} on {} failed: {}", args.action, args.file, e);
            ToolOutput::error(format!("Memory error: {e}"), details)
        }
    }
}

/// Run the `think` tool. Usage errors propagate to the host.
pub async fn think_tool(
    thinker: &Thinker,
    args: Value,
    status: &dyn StatusIndicator,
) -> Result<ToolOutput> {
    let request: ThinkRequest = serde_json::from_value(args)
        .map_err(|e| PaiError::usage(format!("invalid think arguments: {e}")))?;
    let response = thinker.think(&request, status).await?;
    Ok(ToolOutput::text(
        response.text,
        json!({ "mode": response.resolved_mode }),
    ))
}
