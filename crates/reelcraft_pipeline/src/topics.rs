//! Topic list generation.

use crate::request::user_request;
use reelcraft_core::{ResponseFormat, Topic};
use reelcraft_error::ReelcraftResult;
use reelcraft_interface::ReelcraftDriver;
use reelcraft_storage::OutputStore;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Name of the persisted topic list.
pub const TOPICS_FILE: &str = "topics.json";

/// Instruction sent to request candidate topics.
pub const TOPICS_INSTRUCTION: &str = "Can you give me a list of 10 different historical events, \
periods or crisis or facts or stories that would be interesting for a person to live through \
today but then related to computer science, technology and that sort of stuff. Some examples \
could be original apple iphone development, the microsoft vs us lawsuit or ai chatbots today.";

/// Ask the model for a free-text list of video topics.
///
/// Returns the response text verbatim. Transport and API failures propagate.
#[instrument(skip(driver), fields(provider = driver.provider_name()))]
pub async fn generate_video_topics(
    driver: &dyn ReelcraftDriver,
    model: &str,
) -> ReelcraftResult<String> {
    let request = user_request(TOPICS_INSTRUCTION, model, ResponseFormat::Text)?;
    let response = driver.generate(&request).await?;
    info!(chars = response.text().len(), "Received topic list");
    Ok(response.into_text())
}

/// Persist topics as a JSON array of strings.
pub async fn save_topics(store: &OutputStore, topics: &[Topic]) -> ReelcraftResult<PathBuf> {
    store.write_json(TOPICS_FILE, topics).await
}
