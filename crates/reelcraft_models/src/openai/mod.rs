//! OpenAI chat completions integration.

mod client;
mod conversion;
mod dto;

pub use client::{DEFAULT_BASE_URL, OpenAiClient};
pub use conversion::{from_chat_response, to_chat_request};
pub use dto::{
    ChatChoice, ChatChoiceMessage, ChatCompletionRequest, ChatCompletionRequestBuilder,
    ChatCompletionResponse, ChatResponseFormat,
};
