//! Tests for topic generation and persistence.

mod test_utils;

use reelcraft_core::{ResponseFormat, Topic};
use reelcraft_error::{OpenAiErrorKind, ReelcraftErrorKind};
use reelcraft_pipeline::{
    TOPICS_FILE, TOPICS_INSTRUCTION, extract_topics, generate_video_topics, save_topics,
};
use reelcraft_storage::OutputStore;
use tempfile::TempDir;
use test_utils::{MockDriver, MockResponse, TOPICS_RESPONSE};

#[tokio::test]
async fn test_generate_video_topics_returns_text_verbatim() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence([TOPICS_RESPONSE]);

    let text = generate_video_topics(&driver, "gpt-4-turbo").await?;

    assert_eq!(text, TOPICS_RESPONSE);
    assert_eq!(driver.call_count(), 1);

    let request = &driver.requests()[0];
    assert_eq!(request.model().as_deref(), Some("gpt-4-turbo"));
    assert_eq!(*request.response_format(), ResponseFormat::Text);
    assert_eq!(request.messages().len(), 1);
    assert_eq!(request.messages()[0].content, TOPICS_INSTRUCTION);
    Ok(())
}

#[tokio::test]
async fn test_generate_video_topics_propagates_api_errors() {
    let driver = MockDriver::new_responses([MockResponse::Error(OpenAiErrorKind::Api {
        status: 401,
        message: "invalid key".to_string(),
    })]);

    let err = generate_video_topics(&driver, "gpt-4-turbo")
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), ReelcraftErrorKind::OpenAi(_)));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_save_topics_writes_json_array() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = OutputStore::new(dir.path())?;
    let topics = extract_topics(TOPICS_RESPONSE);

    let path = save_topics(&store, &topics).await?;

    assert_eq!(path, dir.path().join(TOPICS_FILE));
    let saved: Vec<String> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(saved.len(), 5);
    assert_eq!(saved[2], "The Y2K Bug");
    Ok(())
}

#[tokio::test]
async fn test_save_empty_topic_list() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = OutputStore::new(dir.path())?;

    let path = save_topics(&store, &[] as &[Topic]).await?;

    let saved: Vec<String> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert!(saved.is_empty());
    Ok(())
}
