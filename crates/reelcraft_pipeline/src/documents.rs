//! Markdown guides for the manual production steps.

use reelcraft_core::{Topic, VisualPrompt};
use reelcraft_error::ReelcraftResult;
use reelcraft_storage::OutputStore;
use std::fmt::Write;
use tracing::{info, instrument};

/// Suffix of the image generation instruction sheet.
pub const INSTRUCTIONS_SUFFIX: &str = "_leonardo_instructions.md";

/// Suffix of the end-to-end workflow checklist.
pub const WORKFLOW_SUFFIX: &str = "_workflow_guide.md";

/// Render the Leonardo AI instruction sheet.
///
/// # Examples
///
/// ```
/// use reelcraft_core::VisualPrompt;
/// use reelcraft_pipeline::render_leonardo_instructions;
///
/// let doc = render_leonardo_instructions("ENIAC", &[VisualPrompt::new("Power on", "A room of tubes")]);
/// assert!(doc.starts_with("# Leonardo AI Instructions for \"ENIAC\""));
/// assert!(doc.contains("### Image 1: Power on\n\n```\nA room of tubes\n```\n"));
/// ```
pub fn render_leonardo_instructions(topic: &str, prompts: &[VisualPrompt]) -> String {
    let mut doc = format!(
        "# Leonardo AI Instructions for \"{topic}\"

## Settings to Use
- Generation Mode: Text to Image
- Image Aspect Ratio: 9:16 (vertical for TikTok)
- Recommended Style: Photorealistic or Cinematic

## Prompts to Use

"
    );

    for (index, prompt) in prompts.iter().enumerate() {
        let position = index + 1;
        // Writing to a String cannot fail.
        let _ = write!(
            doc,
            "### Image {}: {}\n\n```\n{}\n```\n\n",
            position,
            prompt.moment_or(position),
            prompt.prompt_text()
        );
    }

    doc
}

/// Render the workflow checklist, pointing at the instruction sheet.
pub fn render_workflow_guide(topic: &str, instructions_path: &str) -> String {
    format!(
        "# Complete Workflow Guide for \"{topic}\" TikTok Video

## Step 1: Generate Topic ✅
- Selected topic: {topic}

## Step 2: Generate Visual Prompts ✅
- Visual prompts generated and saved

## Step 3: Generate Visuals in Leonardo AI
1. Go to [Leonardo AI](https://leonardo.ai)
2. Use the instructions in: {instructions_path}
3. Settings to use:
   - Generation mode: Text to Image
   - Image aspect ratio: 9:16 (vertical for TikTok)
   - Download all generated images

## Step 4: Animate Images in Runway
1. Go to [Runway](https://runwayml.com)
2. Upload the images from Leonardo AI
3. Use Motion Brush or Gen-2 for animation
4. Export the animated sequences

## Step 5: Edit Video in CapCut
1. Import animated visuals
2. Arrange clips in sequence
3. Add transitions (recommend smooth dissolves)
4. Add captions explaining each moment
5. Add sound effects & background music from Epidemic Sound
   - Consider technology sounds (keyboard typing, startup chimes, etc.)
   - Background music should match the era/feel of the technology event
6. Export in high quality (1080p minimum)

## Notes
- Keep the video between 30-60 seconds
- Focus on the POV perspective in your editing
- Consider adding factual text overlays to provide context
"
    )
}

/// Write the instruction sheet and return its path.
#[instrument(skip(prompts, store), fields(topic = %topic, prompts = prompts.len()))]
pub async fn prepare_leonardo_instructions(
    topic: &Topic,
    prompts: &[VisualPrompt],
    store: &OutputStore,
) -> ReelcraftResult<String> {
    let doc = render_leonardo_instructions(topic.as_str(), prompts);
    let path = store
        .write_topic_text(topic.as_str(), INSTRUCTIONS_SUFFIX, &doc)
        .await?;
    info!(path = %path.display(), "Wrote Leonardo AI instructions");
    Ok(path.display().to_string())
}

/// Write the workflow checklist and return its path.
#[instrument(skip(store), fields(topic = %topic))]
pub async fn prepare_workflow_guide(
    topic: &Topic,
    instructions_path: &str,
    store: &OutputStore,
) -> ReelcraftResult<String> {
    let doc = render_workflow_guide(topic.as_str(), instructions_path);
    let path = store
        .write_topic_text(topic.as_str(), WORKFLOW_SUFFIX, &doc)
        .await?;
    info!(path = %path.display(), "Wrote workflow guide");
    Ok(path.display().to_string())
}
