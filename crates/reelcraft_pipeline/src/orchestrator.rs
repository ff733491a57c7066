//! The end-to-end run: topics, selection, prompts, documents.
//!
//! Progress is printed to the supplied writer; diagnostics go through
//! `tracing`. Every step is awaited before the next starts.

use crate::selection::console_error;
use crate::{
    PipelineContext, PromptOutcome, TopicExtractor, TopicSelection, generate_video_topics,
    generate_visual_prompts, prepare_leonardo_instructions, prepare_workflow_guide, save_topics,
    select_topic_index,
};
use reelcraft_core::{Topic, VisualPrompt};
use reelcraft_error::ReelcraftResult;
use reelcraft_storage::OutputStore;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Characters of each prompt shown in the console preview.
pub const PREVIEW_CHARS: usize = 100;

/// Shown for a prompt without a moment label.
pub const MISSING_MOMENT: &str = "No moment description";

/// Output of the topic step.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicsStep {
    /// Model response as received
    pub raw: String,
    /// Topics extracted from it, possibly none
    pub topics: Vec<Topic>,
    /// Where the topic list was written
    pub topics_path: PathBuf,
}

/// Paths of the two rendered guides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    /// Leonardo AI instruction sheet
    pub instructions: String,
    /// Workflow checklist
    pub workflow: String,
}

/// What a full run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// The chosen topic
    pub topic: Topic,
    /// Result of the prompt request
    pub outcome: PromptOutcome,
    /// Written guides, when prompts were generated
    pub documents: Option<DocumentPaths>,
}

/// Generate, extract, persist and print the topic list.
#[instrument(skip_all)]
pub async fn run_topics_step<W: Write>(
    ctx: &PipelineContext,
    out: &mut W,
) -> ReelcraftResult<TopicsStep> {
    writeln!(out, "Step 1: Generating tech-related viral video topics...").map_err(console_error)?;

    let config = ctx.config();
    let raw = generate_video_topics(ctx.driver(), &config.models.topics).await?;
    writeln!(out, "{}", raw).map_err(console_error)?;

    let topics = TopicExtractor::new(config.topics.minimum_matches).extract(&raw);
    let topics_path = save_topics(ctx.store(), &topics).await?;
    info!(count = topics.len(), path = %topics_path.display(), "Saved topics");

    writeln!(out, "\nExtracted Topics:").map_err(console_error)?;
    for (index, topic) in topics.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, topic).map_err(console_error)?;
    }

    Ok(TopicsStep {
        raw,
        topics,
        topics_path,
    })
}

/// Write both guides for `topic`.
pub async fn render_documents(
    store: &OutputStore,
    topic: &Topic,
    prompts: &[VisualPrompt],
) -> ReelcraftResult<DocumentPaths> {
    let instructions = prepare_leonardo_instructions(topic, prompts, store).await?;
    let workflow = prepare_workflow_guide(topic, &instructions, store).await?;
    Ok(DocumentPaths {
        instructions,
        workflow,
    })
}

/// Run the whole pipeline once.
///
/// `reader` is only consulted for [`TopicSelection::Interactive`].
///
/// # Errors
///
/// Fails on transport, API and filesystem errors, and with
/// `PipelineErrorKind::NoTopics` when nothing could be extracted. A prompt
/// response that cannot be parsed is not an error; it is reported in the
/// returned [`RunSummary`].
#[instrument(skip(ctx, reader, writer))]
pub async fn run_pipeline<R: BufRead, W: Write>(
    ctx: &PipelineContext,
    selection: TopicSelection,
    reader: &mut R,
    writer: &mut W,
) -> ReelcraftResult<RunSummary> {
    let step = run_topics_step(ctx, writer).await?;

    let index = select_topic_index(selection, step.topics.len(), reader, writer)?;
    let topic = step.topics[index].clone();
    writeln!(writer, "\nSelected topic: {}", topic).map_err(console_error)?;

    writeln!(writer, "\nStep 2: Generating visual prompts...").map_err(console_error)?;
    let outcome =
        generate_visual_prompts(ctx.driver(), &ctx.config().models.prompts, &topic, ctx.store())
            .await?;

    let documents = match &outcome {
        PromptOutcome::Generated(prompts) => {
            writeln!(writer, "Generated {} visual prompts.", prompts.len())
                .map_err(console_error)?;

            let paths = render_documents(ctx.store(), &topic, prompts).await?;
            writeln!(
                writer,
                "\nStep 3: Leonardo AI instructions saved to {}",
                paths.instructions
            )
            .map_err(console_error)?;
            writeln!(writer, "\nComplete workflow guide saved to {}", paths.workflow)
                .map_err(console_error)?;

            print_previews(prompts, writer)?;
            Some(paths)
        }
        PromptOutcome::Empty => {
            writeln!(writer, "Failed to generate visual prompts.").map_err(console_error)?;
            None
        }
        PromptOutcome::Malformed { error, .. } => {
            writeln!(writer, "Failed to generate visual prompts.").map_err(console_error)?;
            writeln!(writer, "Could not parse the response: {}", error).map_err(console_error)?;
            None
        }
    };

    Ok(RunSummary {
        topic,
        outcome,
        documents,
    })
}

/// Print each prompt's moment and the start of its text.
pub fn print_previews<W: Write>(prompts: &[VisualPrompt], writer: &mut W) -> ReelcraftResult<()> {
    writeln!(writer, "\nVisual prompts:").map_err(console_error)?;
    for (index, prompt) in prompts.iter().enumerate() {
        let moment = prompt
            .moment()
            .unwrap_or_else(|| MISSING_MOMENT.to_string());
        writeln!(writer, "\nPrompt {}:", index + 1).map_err(console_error)?;
        writeln!(writer, "Moment: {}", moment).map_err(console_error)?;
        writeln!(writer, "Prompt: {}...", preview(&prompt.prompt_text())).map_err(console_error)?;
    }
    Ok(())
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
