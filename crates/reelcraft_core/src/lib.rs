//! Core data types for the Reelcraft pipeline.
//!
//! This crate provides the request/response types exchanged with language
//! model drivers and the content types (topics, visual prompts) that flow
//! through the pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod request;
mod role;
mod topic;
mod visual_prompt;

pub use message::Message;
pub use request::{
    FinishReason, GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError,
    GenerateResponse, ResponseFormat,
};
pub use role::Role;
pub use topic::Topic;
pub use visual_prompt::{VisualPrompt, MISSING_PROMPT};
