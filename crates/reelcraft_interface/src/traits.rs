//! Trait definitions for LLM backends.

use async_trait::async_trait;
use reelcraft_core::{GenerateRequest, GenerateResponse};
use reelcraft_error::ReelcraftResult;

/// Core trait that all LLM backends must implement.
///
/// One request produces one complete response; there is no streaming and no
/// conversation state kept between calls.
#[async_trait]
pub trait ReelcraftDriver: Send + Sync {
    /// Generate model output for a chat request.
    async fn generate(&self, req: &GenerateRequest) -> ReelcraftResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when a request names none.
    fn model_name(&self) -> &str;
}
