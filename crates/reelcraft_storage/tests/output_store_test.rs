//! Tests for the output directory.

use reelcraft_storage::OutputStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_creates_missing_directory() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let nested = temp_dir.path().join("runs").join("output");

    let store = OutputStore::new(&nested)?;

    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.as_path());
    Ok(())
}

#[tokio::test]
async fn test_opening_twice_is_fine() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    OutputStore::new(temp_dir.path())?;
    let store = OutputStore::new(temp_dir.path())?;

    assert!(store.base_path().is_dir());
    Ok(())
}

#[tokio::test]
async fn test_write_json_is_pretty_printed() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = OutputStore::new(temp_dir.path())?;

    let topics = vec!["First topic".to_string(), "Second topic".to_string()];
    let path = store.write_json("topics.json", &topics).await?;

    assert_eq!(path, temp_dir.path().join("topics.json"));
    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written, "[\n  \"First topic\",\n  \"Second topic\"\n]");
    Ok(())
}

#[tokio::test]
async fn test_writes_overwrite_previous_contents() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = OutputStore::new(temp_dir.path())?;

    store.write_text("notes.md", "first draft, much longer").await?;
    let path = store.write_text("notes.md", "second").await?;

    assert_eq!(std::fs::read_to_string(path)?, "second");
    Ok(())
}

#[tokio::test]
async fn test_topic_artifacts_use_sanitized_names() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = OutputStore::new(temp_dir.path())?;

    let path = store
        .write_topic_text("A/B Test", "_workflow_guide.md", "# Guide")
        .await?;

    assert_eq!(path, temp_dir.path().join("A-B_Test_workflow_guide.md"));
    assert_eq!(store.read_text(&path).await?, "# Guide");
    Ok(())
}

#[tokio::test]
async fn test_read_missing_file_is_an_error() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = OutputStore::new(temp_dir.path())?;

    let result = store.read_text(temp_dir.path().join("absent.json")).await;

    assert!(result.is_err());
    Ok(())
}
