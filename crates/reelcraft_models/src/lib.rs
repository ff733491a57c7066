//! Language model provider integrations for Reelcraft.
//!
//! # Available Providers
//!
//! - **OpenAI** and any server exposing the OpenAI chat completions API
//!   (set a custom base URL for local or proxy servers)
//!
//! # Example
//!
//! ```no_run
//! use reelcraft_models::OpenAiClient;
//! use reelcraft_interface::ReelcraftDriver;
//! use reelcraft_core::{GenerateRequest, Message};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::with_api_key(std::env::var("OPENAI_API_KEY")?, "gpt-4-turbo");
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Hello")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ChatChoice, ChatChoiceMessage, ChatCompletionRequest, ChatCompletionRequestBuilder,
    ChatCompletionResponse, ChatResponseFormat, DEFAULT_BASE_URL, OpenAiClient,
    from_chat_response, to_chat_request,
};
