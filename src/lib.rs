//! PAI - persistent memory and structured thinking for coding agents
//!
//! Two independent capabilities exposed to a host agent:
//! - A small memory store backed by three Markdown files under `~/.pi/pai/`
//! - A `think` tool that wraps a problem in one of four analytical scaffolds,
//!   picked explicitly or by keyword classification

pub mod commands;
pub mod memory;
pub mod think;
pub mod tools;

pub use memory::{MemoryFile, MemoryStore};
pub use think::{ModeSelection, ThinkMode, ThinkRequest, ThinkResponse, Thinker};
pub use tools::{ToolOutput, ToolSpec};

use std::path::PathBuf;

/// Subdirectory of the home directory holding the memory files
pub const MEMORY_SUBDIR: [&str; 2] = [".pi", "pai"];

/// Configuration for PAI
#[derive(Debug, Clone)]
pub struct PaiConfig {
    /// Directory holding the three memory files
    pub memory_dir: PathBuf,

    /// Whether to emit debug logging
    pub verbose: bool,
}

impl PaiConfig {
    pub fn new(home: PathBuf) -> Self {
        let memory_dir = MEMORY_SUBDIR
            .iter()
            .fold(home, |dir, part| dir.join(part));
        Self {
            memory_dir,
            verbose: false,
        }
    }

    /// Resolve the memory directory from the current user's home directory.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(PaiError::HomeNotFound)?;
        Ok(Self::new(home))
    }

    pub fn with_memory_dir(mut self, path: PathBuf) -> Self {
        self.memory_dir = path;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the memory store rooted at the configured directory
    pub fn memory_store(&self) -> MemoryStore {
        MemoryStore::new(self.memory_dir.clone())
    }
}

/// Result type for PAI operations
pub type Result<T> = std::result::Result<T, PaiError>;

/// Errors that can occur in PAI
#[derive(Debug, thiserror::Error)]
pub enum PaiError {
    /// Caller supplied missing or invalid arguments; storage was not touched
    #[error("{0}")]
    Usage(String),

    #[error("Failed to write {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not find home directory")]
    HomeNotFound,
}

impl PaiError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
