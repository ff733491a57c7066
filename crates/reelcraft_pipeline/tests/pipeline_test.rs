//! End-to-end runs against a mock driver.

mod test_utils;

use reelcraft_error::{PipelineErrorKind, ReelcraftErrorKind};
use reelcraft_pipeline::{
    PipelineContext, PromptOutcome, ReelcraftConfig, TopicSelection, run_pipeline,
    run_topics_step, setup_environment,
};
use reelcraft_storage::OutputStore;
use tempfile::TempDir;
use test_utils::{MockDriver, PROMPTS_RESPONSE, TOPICS_RESPONSE};

fn context(driver: MockDriver, dir: &TempDir) -> anyhow::Result<PipelineContext> {
    let mut config = ReelcraftConfig::default();
    config.output.dir = dir.path().to_path_buf();
    Ok(PipelineContext::new(driver, OutputStore::new(dir.path())?, config))
}

#[tokio::test]
async fn test_full_run_writes_all_artifacts() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let driver = MockDriver::new_sequence([TOPICS_RESPONSE, PROMPTS_RESPONSE]);
    let ctx = context(driver.clone(), &dir)?;
    let mut reader = "".as_bytes();
    let mut writer = Vec::<u8>::new();

    let summary = run_pipeline(&ctx, TopicSelection::First, &mut reader, &mut writer).await?;

    assert_eq!(summary.topic.as_str(), "The Original iPhone Development");
    assert!(summary.outcome.is_generated());
    assert!(summary.documents.is_some());
    assert_eq!(driver.call_count(), 2);

    for name in [
        "topics.json",
        "The_Original_iPhone_Development_prompts.json",
        "The_Original_iPhone_Development_leonardo_instructions.md",
        "The_Original_iPhone_Development_workflow_guide.md",
    ] {
        assert!(dir.path().join(name).exists(), "missing {}", name);
    }

    let output = String::from_utf8(writer)?;
    assert!(output.contains("Step 1: Generating tech-related viral video topics..."));
    assert!(output.contains("3. The Y2K Bug"));
    assert!(output.contains("Selected topic: The Original iPhone Development"));
    assert!(output.contains("Generated 1 visual prompts."));
    assert!(output.contains("Moment: M1"));
    assert!(output.contains("Prompt: P1..."));
    Ok(())
}

#[tokio::test]
async fn test_models_come_from_config() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let driver = MockDriver::new_sequence([TOPICS_RESPONSE, PROMPTS_RESPONSE]);
    let mut config = ReelcraftConfig::default();
    config.models.topics = "topic-model".to_string();
    config.models.prompts = "prompt-model".to_string();
    let ctx = PipelineContext::new(driver.clone(), OutputStore::new(dir.path())?, config);

    run_pipeline(&ctx, TopicSelection::First, &mut "".as_bytes(), &mut Vec::<u8>::new()).await?;

    let requests = driver.requests();
    assert_eq!(requests[0].model().as_deref(), Some("topic-model"));
    assert_eq!(requests[1].model().as_deref(), Some("prompt-model"));
    Ok(())
}

#[tokio::test]
async fn test_explicit_topic_selection() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let driver = MockDriver::new_sequence([TOPICS_RESPONSE, PROMPTS_RESPONSE]);
    let ctx = context(driver, &dir)?;

    let summary = run_pipeline(
        &ctx,
        TopicSelection::Explicit(3),
        &mut "".as_bytes(),
        &mut Vec::<u8>::new(),
    )
    .await?;

    assert_eq!(summary.topic.as_str(), "The Y2K Bug");
    assert!(dir.path().join("The_Y2K_Bug_prompts.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_interactive_invalid_input_uses_first_topic() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let driver = MockDriver::new_sequence([TOPICS_RESPONSE, PROMPTS_RESPONSE]);
    let ctx = context(driver, &dir)?;
    let mut writer = Vec::<u8>::new();

    let summary = run_pipeline(
        &ctx,
        TopicSelection::Interactive,
        &mut "abc\n".as_bytes(),
        &mut writer,
    )
    .await?;

    assert_eq!(summary.topic.as_str(), "The Original iPhone Development");
    assert!(String::from_utf8(writer)?.contains("Invalid input, using the first topic"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_prompts_skip_documents() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let driver = MockDriver::new_sequence([TOPICS_RESPONSE, "not json at all"]);
    let ctx = context(driver, &dir)?;
    let mut writer = Vec::<u8>::new();

    let summary =
        run_pipeline(&ctx, TopicSelection::First, &mut "".as_bytes(), &mut writer).await?;

    assert!(matches!(summary.outcome, PromptOutcome::Malformed { .. }));
    assert!(summary.documents.is_none());
    assert!(
        !dir
            .path()
            .join("The_Original_iPhone_Development_leonardo_instructions.md")
            .exists()
    );
    assert!(String::from_utf8(writer)?.contains("Failed to generate visual prompts."));
    Ok(())
}

#[tokio::test]
async fn test_no_topics_is_an_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let driver = MockDriver::new_sequence(["Sorry."]);
    let ctx = context(driver.clone(), &dir)?;

    let err = run_pipeline(&ctx, TopicSelection::First, &mut "".as_bytes(), &mut Vec::<u8>::new())
        .await
        .unwrap_err();

    match err.kind() {
        ReelcraftErrorKind::Pipeline(e) => assert_eq!(e.kind, PipelineErrorKind::NoTopics),
        other => panic!("expected pipeline error, got {:?}", other),
    }
    assert_eq!(driver.call_count(), 1);
    assert!(dir.path().join("topics.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_topics_step_only() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let driver = MockDriver::new_sequence([TOPICS_RESPONSE]);
    let ctx = context(driver.clone(), &dir)?;
    let mut writer = Vec::<u8>::new();

    let step = run_topics_step(&ctx, &mut writer).await?;

    assert_eq!(step.raw, TOPICS_RESPONSE);
    assert_eq!(step.topics.len(), 5);
    assert_eq!(step.topics_path, dir.path().join("topics.json"));
    assert_eq!(driver.call_count(), 1);
    assert!(String::from_utf8(writer)?.contains("Extracted Topics:"));
    Ok(())
}

#[test]
fn test_setup_environment_requires_api_key() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut config = ReelcraftConfig::default();
    config.api.key_env = "REELCRAFT_TEST_KEY_THAT_IS_NEVER_SET".to_string();
    config.output.dir = dir.path().join("out");

    let err = setup_environment(config).unwrap_err();

    assert!(matches!(err.kind(), ReelcraftErrorKind::Config(_)));
    Ok(())
}
