//! Visual prompt generation for a selected topic.

use crate::request::user_request;
use reelcraft_core::{ResponseFormat, Topic, VisualPrompt};
use reelcraft_error::{PipelineError, PipelineErrorKind, ReelcraftResult};
use reelcraft_interface::ReelcraftDriver;
use reelcraft_storage::OutputStore;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Suffix of the persisted prompt list.
pub const PROMPTS_SUFFIX: &str = "_prompts.json";

/// Characters of a malformed response kept for diagnostics.
pub const EXCERPT_CHARS: usize = 200;

/// What came back from a visual prompts request.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptOutcome {
    /// At least one prompt was returned
    Generated(Vec<VisualPrompt>),
    /// Valid JSON, but `prompts` was missing, null or empty
    Empty,
    /// The response was not the expected JSON shape
    Malformed {
        /// Parser error message
        error: String,
        /// Start of the raw response
        excerpt: String,
    },
}

impl PromptOutcome {
    /// The prompts, empty unless `Generated`.
    pub fn prompts(&self) -> &[VisualPrompt] {
        match self {
            PromptOutcome::Generated(prompts) => prompts,
            PromptOutcome::Empty | PromptOutcome::Malformed { .. } => &[],
        }
    }

    /// Whether any prompts were produced.
    pub fn is_generated(&self) -> bool {
        matches!(self, PromptOutcome::Generated(_))
    }
}

#[derive(Deserialize)]
struct PromptEnvelope {
    #[serde(default)]
    prompts: Option<Vec<VisualPrompt>>,
}

/// Instruction requesting five POV moments for `topic` as JSON.
pub fn visual_prompts_instruction(topic: &str) -> String {
    format!(
        r#"I will go with video idea: "{topic}".

Now I need to create visuals for my TikTok. From here you are my new prompt expert and you're going
to help me create prompts I can use in Leonardo AI to generate my visuals.

What I want you to do is to give me five key moments of the {topic} event/period, describing the
person whose day we're following (a developer, engineer, executive, or other relevant person).
To each of these moments I want you to create an image prompt.

These image prompts will be descriptions of POV images, images from the perspective of the person
we're following living through this tech-related event.

For each moment, provide:
1. A brief description of the moment
2. A detailed prompt for Leonardo AI that includes visual details, style guidance, and POV framing

Return your response as a JSON object with a key called "prompts" that contains an array of objects with 'moment' and 'prompt' keys."#
    )
}

/// Parse a visual prompts response body.
///
/// Never fails: anything that is not `{"prompts": [...]}` becomes
/// [`PromptOutcome::Malformed`].
///
/// # Examples
///
/// ```
/// use reelcraft_pipeline::{parse_visual_prompts, PromptOutcome};
///
/// let outcome = parse_visual_prompts(r#"{"prompts":[{"moment":"M1","prompt":"P1"}]}"#);
/// assert_eq!(outcome.prompts().len(), 1);
///
/// assert_eq!(parse_visual_prompts(r#"{"prompts": []}"#), PromptOutcome::Empty);
/// assert!(matches!(parse_visual_prompts("not json"), PromptOutcome::Malformed { .. }));
/// ```
pub fn parse_visual_prompts(text: &str) -> PromptOutcome {
    match serde_json::from_str::<PromptEnvelope>(text) {
        Ok(PromptEnvelope {
            prompts: Some(prompts),
        }) if !prompts.is_empty() => PromptOutcome::Generated(prompts),
        Ok(_) => PromptOutcome::Empty,
        Err(e) => PromptOutcome::Malformed {
            error: e.to_string(),
            excerpt: text.chars().take(EXCERPT_CHARS).collect(),
        },
    }
}

/// Ask the model for visual prompts and persist them when there are any.
///
/// A response that does not parse is logged and reported as
/// [`PromptOutcome::Malformed`] rather than an error. Transport failures and
/// write failures propagate.
#[instrument(skip(driver, store), fields(topic = %topic))]
pub async fn generate_visual_prompts(
    driver: &dyn ReelcraftDriver,
    model: &str,
    topic: &Topic,
    store: &OutputStore,
) -> ReelcraftResult<PromptOutcome> {
    info!("Generating visual prompts");

    let request = user_request(
        visual_prompts_instruction(topic.as_str()),
        model,
        ResponseFormat::JsonObject,
    )?;
    let response = driver.generate(&request).await?;
    let outcome = parse_visual_prompts(response.text());

    match &outcome {
        PromptOutcome::Generated(prompts) => {
            let path = store
                .write_topic_json(topic.as_str(), PROMPTS_SUFFIX, prompts)
                .await?;
            info!(count = prompts.len(), path = %path.display(), "Saved visual prompts");
        }
        PromptOutcome::Empty => warn!("Response contained no prompts"),
        PromptOutcome::Malformed { error, excerpt } => {
            warn!(error = %error, raw = %excerpt, "Failed to parse JSON response");
        }
    }

    Ok(outcome)
}

/// Load a prompt list previously written by [`generate_visual_prompts`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// prompt objects.
#[instrument(skip(store), fields(path = %path.display()))]
pub async fn load_visual_prompts(
    store: &OutputStore,
    path: &Path,
) -> ReelcraftResult<Vec<VisualPrompt>> {
    let raw = store.read_text(path).await?;
    serde_json::from_str(&raw).map_err(|e| {
        PipelineError::new(PipelineErrorKind::PromptsFileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}
