//! Request construction shared by the generation steps.

use reelcraft_core::{GenerateRequest, Message, ResponseFormat};
use reelcraft_error::{PipelineError, PipelineErrorKind, ReelcraftResult};

/// Single user message request for `model`.
pub(crate) fn user_request(
    prompt: impl Into<String>,
    model: &str,
    format: ResponseFormat,
) -> ReelcraftResult<GenerateRequest> {
    GenerateRequest::builder()
        .messages(vec![Message::user(prompt)])
        .model(Some(model.to_string()))
        .response_format(format)
        .build()
        .map_err(|e| PipelineError::new(PipelineErrorKind::RequestBuild(e.to_string())).into())
}
