//! Command handlers.

use reelcraft::{
    OutputStore, PipelineError, PipelineErrorKind, PromptOutcome, ReelcraftConfig,
    ReelcraftResult, Topic, TopicSelection, load_visual_prompts, print_previews,
    render_documents, run_pipeline, run_topics_step, setup_environment,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolve configuration from an explicit file or the default layers, then
/// apply the output directory override.
pub fn load_config(
    config_path: Option<&Path>,
    output_dir: Option<PathBuf>,
) -> ReelcraftResult<ReelcraftConfig> {
    let mut config = match config_path {
        Some(path) => ReelcraftConfig::from_file(path)?,
        None => ReelcraftConfig::load()?,
    };

    if let Some(dir) = output_dir {
        config.output.dir = dir;
    }

    Ok(config)
}

/// Run the full pipeline against the configured model.
pub async fn run_full(config: ReelcraftConfig, topic: Option<u16>) -> ReelcraftResult<()> {
    let ctx = setup_environment(config)?;
    let selection = TopicSelection::detect(topic.map(usize::from));

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut writer = std::io::stdout();

    let summary = run_pipeline(&ctx, selection, &mut reader, &mut writer).await?;

    match &summary.outcome {
        PromptOutcome::Generated(prompts) => {
            info!(topic = %summary.topic, prompts = prompts.len(), "Pipeline complete")
        }
        PromptOutcome::Empty | PromptOutcome::Malformed { .. } => {
            warn!(topic = %summary.topic, "Pipeline finished without visual prompts")
        }
    }

    Ok(())
}

/// Generate and save topics without selecting one.
pub async fn run_topics(config: ReelcraftConfig) -> ReelcraftResult<()> {
    let ctx = setup_environment(config)?;
    let step = run_topics_step(&ctx, &mut std::io::stdout()).await?;

    if step.topics.is_empty() {
        warn!("No topics could be extracted from the response");
    }
    println!("\nTopics saved to {}", step.topics_path.display());

    Ok(())
}

/// Write both guides from a prompts file saved by an earlier run.
///
/// Makes no model request, so no API key is needed.
pub async fn render_guides(
    config: ReelcraftConfig,
    topic: &str,
    prompts_path: &Path,
) -> ReelcraftResult<()> {
    let topic = Topic::new(topic).ok_or_else(|| PipelineError::new(PipelineErrorKind::BlankTopic))?;
    let store = OutputStore::new(config.output.dir)?;

    let prompts = load_visual_prompts(&store, prompts_path).await?;
    let paths = render_documents(&store, &topic, &prompts).await?;

    let mut stdout = std::io::stdout();
    println!("Leonardo AI instructions saved to {}", paths.instructions);
    println!("Complete workflow guide saved to {}", paths.workflow);
    print_previews(&prompts, &mut stdout)?;
    if let Err(e) = stdout.flush() {
        warn!(error = %e, "Failed to flush stdout");
    }

    Ok(())
}
