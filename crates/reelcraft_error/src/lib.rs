//! Error types for the Reelcraft pipeline.
//!
//! This crate provides the error types shared by every Reelcraft crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind (or a message) with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use reelcraft_error::{ReelcraftResult, ConfigError};
//!
//! fn load_key() -> ReelcraftResult<String> {
//!     Err(ConfigError::new("OPENAI_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod openai;
mod pipeline;
mod storage;

pub use config::ConfigError;
pub use error::{ReelcraftError, ReelcraftErrorKind, ReelcraftResult};
pub use json::JsonError;
pub use openai::{OpenAiError, OpenAiErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use storage::{StorageError, StorageErrorKind};
