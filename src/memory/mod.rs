//! Memory module for PAI
//!
//! Three fixed Markdown files (preferences, learnings, context) that survive
//! across agent sessions. Reads degrade to empty content; writes report
//! failures.

mod store;

pub use store::{FileStatus, MemoryFile, MemoryStore, MAX_READ_BYTES};
