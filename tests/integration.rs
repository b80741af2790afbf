//! Integration tests for PAI memory and thinking

use pai::memory::{MemoryFile, MemoryStore, MAX_READ_BYTES};
use pai::think::{classify, NoStatus, NO_MEMORY_NOTE};
use pai::{ModeSelection, PaiConfig, ThinkMode, ThinkRequest, Thinker};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_store() -> (TempDir, MemoryStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = MemoryStore::new(temp_dir.path().join(".pi").join("pai"));
    (temp_dir, store)
}

/// Red team keywords win regardless of other keywords
#[test]
fn test_red_team_priority() {
    let messages = vec![
        "exploit",
        "a vulnerability in the parser",
        "why do we trust this input? possible exploit",
        "I'm stuck: novel attack on the session cookie",
    ];

    for msg in messages {
        assert_eq!(classify(msg), ThinkMode::RedTeam, "Should be red_team: {}", msg);
    }
}

#[test]
fn test_first_principles_without_red_team() {
    assert_eq!(classify("what are our assumptions here"), ThinkMode::FirstPrinciples);
}

#[test]
fn test_council_default() {
    assert_eq!(classify("tidy up the readme"), ThinkMode::Council);
}

#[tokio::test]
async fn test_read_missing_file_is_empty() {
    let (_temp_dir, store) = temp_store();
    for &file in MemoryFile::all() {
        assert_eq!(store.read(file).await, "");
    }
    assert_eq!(store.read_all().await, "");
}

#[tokio::test]
async fn test_append_twice_keeps_order() {
    let (_temp_dir, store) = temp_store();

    store.append(MemoryFile::Learnings, "hello").await.unwrap();
    let content = store.read(MemoryFile::Learnings).await;
    assert!(content.ends_with("hello"));
    assert!(content.starts_with("\n\n---\n_"));

    store.append(MemoryFile::Learnings, "world").await.unwrap();
    let content = store.read(MemoryFile::Learnings).await;

    let blocks: Vec<&str> = content.split("\n\n---\n").filter(|b| !b.is_empty()).collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].ends_with("_\n\nhello"));
    assert!(blocks[1].ends_with("_\n\nworld"));

    // _<timestamp>_ line parses as ISO-8601
    for block in blocks {
        let stamp = block.lines().next().unwrap().trim_matches('_');
        assert!(
            chrono::DateTime::parse_from_rfc3339(stamp).is_ok(),
            "Bad timestamp: {}",
            stamp
        );
    }
}

#[tokio::test]
async fn test_replace_discards_previous_content() {
    let (_temp_dir, store) = temp_store();

    store.append(MemoryFile::Context, "old entry").await.unwrap();
    store.replace(MemoryFile::Context, "X").await.unwrap();
    store.replace(MemoryFile::Context, "Y").await.unwrap();

    assert_eq!(store.read(MemoryFile::Context).await, "Y");
}

#[tokio::test]
async fn test_empty_content_is_rejected() {
    let (_temp_dir, store) = temp_store();
    store.replace(MemoryFile::Preferences, "keep me").await.unwrap();

    let err = store.append(MemoryFile::Preferences, "").await.unwrap_err();
    assert!(err.is_usage());
    let err = store.replace(MemoryFile::Preferences, "").await.unwrap_err();
    assert!(err.is_usage());

    assert_eq!(store.read(MemoryFile::Preferences).await, "keep me");

    // Nothing created for a file that never existed
    let err = store.append(MemoryFile::Learnings, "").await.unwrap_err();
    assert!(err.is_usage());
    assert!(!store.path(MemoryFile::Learnings).exists());
}

#[tokio::test]
async fn test_large_file_reads_tail() {
    let (_temp_dir, store) = temp_store();
    let content: String = (0..1000).map(|i| format!("line {i}\n")).collect();
    assert!(content.len() > MAX_READ_BYTES);
    store.replace(MemoryFile::Learnings, &content).await.unwrap();

    let result = store.read(MemoryFile::Learnings).await;
    let marker = format!(
        "[truncated — showing last 4KB of {}]\n\n",
        store.path(MemoryFile::Learnings).display()
    );
    assert!(result.starts_with(&marker));
    assert_eq!(
        &result[result.len() - MAX_READ_BYTES..],
        &content[content.len() - MAX_READ_BYTES..]
    );
    assert_eq!(result.len(), marker.len() + MAX_READ_BYTES);
}

#[tokio::test]
async fn test_exactly_limit_is_not_truncated() {
    let (_temp_dir, store) = temp_store();
    let content = "a".repeat(MAX_READ_BYTES);
    store.replace(MemoryFile::Context, &content).await.unwrap();

    assert_eq!(store.read(MemoryFile::Context).await, content);
}

#[tokio::test]
async fn test_read_all_digest() {
    let (_temp_dir, store) = temp_store();
    store.replace(MemoryFile::Context, "shipping v2").await.unwrap();
    store.replace(MemoryFile::Preferences, "tabs").await.unwrap();

    assert_eq!(
        store.read_all().await,
        "## preferences\n\ntabs\n\n---\n\n## context\n\nshipping v2"
    );
}

#[tokio::test]
async fn test_think_auto_first_principles() {
    let (_temp_dir, store) = temp_store();
    let thinker = Thinker::new(store);

    let request = ThinkRequest::new("why do we assume X").with_mode(ModeSelection::Auto);
    let response = thinker.think(&request, &NoStatus).await.unwrap();

    assert_eq!(response.resolved_mode, ThinkMode::FirstPrinciples);
    assert!(response.text.contains("### Assumption Audit"));
}

#[tokio::test]
async fn test_think_explicit_mode_wins() {
    let (_temp_dir, store) = temp_store();
    let thinker = Thinker::new(store);

    let request = ThinkRequest::new("is this safe").with_mode(ThinkMode::Council);
    let response = thinker.think(&request, &NoStatus).await.unwrap();
    assert_eq!(response.resolved_mode, ThinkMode::Council);

    let request = ThinkRequest::new("find the exploit").with_mode(ThinkMode::Council);
    let response = thinker.think(&request, &NoStatus).await.unwrap();
    assert_eq!(response.resolved_mode, ThinkMode::Council);
    assert!(response.text.starts_with("# Council Analysis"));
}

#[tokio::test]
async fn test_think_notes_missing_memory() {
    let (_temp_dir, store) = temp_store();
    let thinker = Thinker::new(store);

    let response = thinker
        .think(&ThinkRequest::new("plan the release"), &NoStatus)
        .await
        .unwrap();
    assert!(response.text.ends_with(
        "\n\n[Note: no memory files found — proceeding without stored context]"
    ));
    assert!(!response.text.contains("**From memory:**"));
}

#[tokio::test]
async fn test_think_survives_unreadable_memory() {
    let temp_dir = TempDir::new().unwrap();
    // Memory directory path points at a regular file
    let blocker = temp_dir.path().join("pai");
    std::fs::write(&blocker, "not a directory").unwrap();
    let thinker = Thinker::new(MemoryStore::new(blocker));

    let response = thinker
        .think(&ThinkRequest::new("a threat model"), &NoStatus)
        .await
        .unwrap();
    assert_eq!(response.resolved_mode, ThinkMode::RedTeam);
    assert!(response.text.ends_with(NO_MEMORY_NOTE));
}

#[test]
fn test_config_memory_dir() {
    let config = PaiConfig::new(PathBuf::from("/home/user")).with_verbose(true);

    assert_eq!(config.memory_dir, PathBuf::from("/home/user/.pi/pai"));
    assert!(config.verbose);
    assert_eq!(
        config.memory_store().path(MemoryFile::Preferences),
        PathBuf::from("/home/user/.pi/pai/preferences.md")
    );
}
