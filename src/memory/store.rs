//! Memory file storage in Markdown format

use crate::{PaiError, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Reads of files larger than this return only the most recent tail
pub const MAX_READ_BYTES: usize = 4096;

/// One of the three memory files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryFile {
    /// Tech stack, coding style
    Preferences,
    /// Discoveries, append-only
    Learnings,
    /// Current projects, goals
    Context,
}

impl MemoryFile {
    /// All memory files, in digest order
    pub fn all() -> &'static [MemoryFile] {
        &[
            MemoryFile::Preferences,
            MemoryFile::Learnings,
            MemoryFile::Context,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MemoryFile::Preferences => "preferences",
            MemoryFile::Learnings => "learnings",
            MemoryFile::Context => "context",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            MemoryFile::Preferences => "preferences.md",
            MemoryFile::Learnings => "learnings.md",
            MemoryFile::Context => "context.md",
        }
    }
}

impl fmt::Display for MemoryFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MemoryFile {
    type Err = PaiError;

    fn from_str(name: &str) -> Result<Self> {
        let name = name.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|file| file.name() == name)
            .copied()
            .ok_or_else(|| {
                PaiError::usage(format!(
                    "unknown memory file '{name}' (expected preferences, learnings or context)"
                ))
            })
    }
}

/// Size report for one memory file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub file: MemoryFile,
    pub path: PathBuf,
    /// Character count of the stored content, 0 when missing
    pub chars: usize,
}

impl FileStatus {
    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}: empty ({})", self.file, self.path.display())
        } else {
            write!(f, "{}: {} chars ({})", self.file, self.chars, self.path.display())
        }
    }
}

/// The three memory files under one base directory.
///
/// Holds no cached content: every call goes to disk.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    dir: PathBuf,
}

impl MemoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Base directory of the memory files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, file: MemoryFile) -> PathBuf {
        self.dir.join(file.file_name())
    }

    /// Read a memory file, keeping only the last 4KB of large files.
    ///
    /// Missing or unreadable files read as the empty string.
    pub async fn read(&self, file: MemoryFile) -> String {
        let path = self.path(file);
        let content = self.load(&path).await;
        tail_for_read(content, &path)
    }

    /// Concatenate every non-empty memory file under a `## <name>` heading.
    pub async fn read_all(&self) -> String {
        let mut parts = Vec::new();
        for &file in MemoryFile::all() {
            let content = self.read(file).await;
            if !content.is_empty() {
                parts.push(format!("## {}\n\n{}", file, content));
            }
        }
        parts.join("\n\n---\n\n")
    }

    /// Append a timestamped entry to a memory file.
    ///
    /// The whole entry goes out in a single write on an append-mode handle;
    /// existing content is never read back.
    pub async fn append(&self, file: MemoryFile, content: &str) -> Result<()> {
        require_content(content, "append")?;
        let path = self.path(file);
        let entry = format_entry(&timestamp(), content);

        self.ensure_dir().await?;
        let mut handle = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|source| storage_error(&path, source))?;
        handle
            .write_all(entry.as_bytes())
            .await
            .map_err(|source| storage_error(&path, source))?;
        handle
            .flush()
            .await
            .map_err(|source| storage_error(&path, source))?;

        info!("Appended {} bytes to {}", content.len(), file);
        Ok(())
    }

    /// Overwrite a memory file with `content` verbatim.
    ///
    /// Writes a sibling temp file and renames it over the target so readers
    /// see either the old or the new content.
    pub async fn replace(&self, file: MemoryFile, content: &str) -> Result<()> {
        require_content(content, "replace")?;
        let path = self.path(file);
        let tmp_path = path.with_extension("md.tmp");

        self.ensure_dir().await?;
        if let Err(source) = fs::write(&tmp_path, content).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(storage_error(&path, source));
        }
        if let Err(source) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(storage_error(&path, source));
        }

        info!("Replaced {} ({} bytes)", file, content.len());
        Ok(())
    }

    /// Character counts of all memory files, without their content
    pub async fn status(&self) -> Vec<FileStatus> {
        let mut statuses = Vec::with_capacity(MemoryFile::all().len());
        for &file in MemoryFile::all() {
            let path = self.path(file);
            let chars = self.load(&path).await.chars().count();
            statuses.push(FileStatus { file, path, chars });
        }
        statuses
    }

    async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| storage_error(&self.dir, source))
    }

    /// Raw file content; invalid UTF-8 is replaced, I/O failures read as empty
    async fn load(&self, path: &Path) -> String {
        match fs::read(path).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                debug!("Ignoring unreadable memory file {:?}: {}", path, e);
                String::new()
            }
        }
    }
}

fn require_content(content: &str, action: &str) -> Result<()> {
    if content.is_empty() {
        return Err(PaiError::usage(format!("content is required for {action}")));
    }
    Ok(())
}

fn storage_error(path: &Path, source: io::Error) -> PaiError {
    PaiError::Storage {
        path: path.to_path_buf(),
        source,
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn format_entry(timestamp: &str, content: &str) -> String {
    format!("\n\n---\n_{timestamp}_\n\n{content}")
}

/// Keep the last `MAX_READ_BYTES` bytes, starting on a char boundary
fn tail_for_read(content: String, path: &Path) -> String {
    if content.len() <= MAX_READ_BYTES {
        return content;
    }
    let mut start = content.len() - MAX_READ_BYTES;
    while !content.is_char_boundary(start) {
        start += 1;
    }
    format!(
        "[truncated — showing last 4KB of {}]\n\n{}",
        path.display(),
        &content[start..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_memory_file() {
        assert_eq!("learnings".parse::<MemoryFile>().unwrap(), MemoryFile::Learnings);
        assert_eq!(" Context ".parse::<MemoryFile>().unwrap(), MemoryFile::Context);

        let err = "notes".parse::<MemoryFile>().unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("notes"));
    }

    #[test]
    fn test_entry_format() {
        assert_eq!(
            format_entry("2026-01-01T00:00:00.000Z", "hello"),
            "\n\n---\n_2026-01-01T00:00:00.000Z_\n\nhello"
        );
    }

    #[test]
    fn test_tail_keeps_short_content() {
        let content = "short".to_string();
        assert_eq!(tail_for_read(content, Path::new("/m/context.md")), "short");
    }

    #[test]
    fn test_tail_respects_char_boundaries() {
        // 3-byte chars so the raw cut lands mid-character
        let content = "é".repeat(10) + &"字".repeat(2000);
        let result = tail_for_read(content.clone(), Path::new("/m/learnings.md"));
        let (marker, tail) = result.split_once("\n\n").unwrap();

        assert_eq!(marker, "[truncated — showing last 4KB of /m/learnings.md]");
        assert!(tail.len() <= MAX_READ_BYTES);
        assert!(tail.len() > MAX_READ_BYTES - 4);
        assert!(content.ends_with(tail));
    }

    #[tokio::test]
    async fn test_status_counts_chars() {
        let temp_dir = TempDir::new().unwrap();
        let store = MemoryStore::new(temp_dir.path());
        store.replace(MemoryFile::Context, "héllo").await.unwrap();

        let status = store.status().await;
        assert_eq!(status.len(), 3);
        assert_eq!(
            status[0].to_string(),
            format!("preferences: empty ({})", store.path(MemoryFile::Preferences).display())
        );
        assert_eq!(
            status[2].to_string(),
            format!("context: 5 chars ({})", store.path(MemoryFile::Context).display())
        );
    }

    #[tokio::test]
    async fn test_invalid_utf8_keeps_content() {
        let temp_dir = TempDir::new().unwrap();
        let store = MemoryStore::new(temp_dir.path());
        store
            .append(MemoryFile::Learnings, "important learning")
            .await
            .unwrap();

        let path = store.path(MemoryFile::Learnings);
        let mut bytes = std::fs::read(&path).unwrap();
        bytes.extend_from_slice(b"\n\xff latin1 byte");
        std::fs::write(&path, &bytes).unwrap();

        let content = store.read(MemoryFile::Learnings).await;
        assert!(content.contains("important learning"));
        assert!(content.ends_with("\u{FFFD} latin1 byte"));

        let status = store.status().await;
        assert!(!status[1].is_empty());
        assert!(status[1].to_string().starts_with("learnings: "));
        assert!(!status[1].to_string().contains(": empty"));
    }

    #[tokio::test]
    async fn test_whitespace_content_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let store = MemoryStore::new(temp_dir.path());

        store.replace(MemoryFile::Context, " ").await.unwrap();
        assert_eq!(store.read(MemoryFile::Context).await, " ");

        store.append(MemoryFile::Context, "\n").await.unwrap();
        assert!(store.read(MemoryFile::Context).await.ends_with("_\n\n\n"));

        let err = store.replace(MemoryFile::Context, "").await.unwrap_err();
        assert!(err.is_usage());
    }

    #[tokio::test]
    async fn test_replace_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = MemoryStore::new(temp_dir.path());
        store.replace(MemoryFile::Preferences, "rust").await.unwrap();

        let names: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["preferences.md".to_string()]);
    }

    #[tokio::test]
    async fn test_append_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join(".pi").join("pai");
        let store = MemoryStore::new(&dir);

        store.append(MemoryFile::Learnings, "first").await.unwrap();
        assert!(dir.join("learnings.md").exists());
    }
}
