//! OpenAI chat completions client.

use super::conversion::{from_chat_response, to_chat_request};
use super::dto::ChatCompletionResponse;
use async_trait::async_trait;
use reelcraft_core::{GenerateRequest, GenerateResponse};
use reelcraft_error::{OpenAiError, OpenAiErrorKind, ReelcraftResult};
use reelcraft_interface::ReelcraftDriver;
use reqwest::Client;
use tracing::{debug, instrument};

/// Base URL of the hosted OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for the OpenAI chat completions API.
///
/// Works against any server implementing the same API when constructed with
/// a custom base URL. Each call is a single request/response exchange with
/// no retry.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Creates a new client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Point the client at a different OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ReelcraftDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> ReelcraftResult<GenerateResponse> {
        let body = to_chat_request(req, &self.model)?;
        let url = self.endpoint();
        debug!(url = %url, model = %body.model(), "Sending chat completions request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| OpenAiError::new(OpenAiErrorKind::Http(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OpenAiError::new(OpenAiErrorKind::Api {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::new(OpenAiErrorKind::ResponseParsing(e.to_string())))?;

        let generated = from_chat_response(&parsed)?;
        debug!(
            chars = generated.text().len(),
            finish_reason = ?generated.finish_reason(),
            "Received chat completion"
        );
        Ok(generated)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
