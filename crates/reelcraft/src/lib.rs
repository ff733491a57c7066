//! Reelcraft - topic-to-storyboard kit generation for short tech history videos
//!
//! Reelcraft asks a language model for historical technology moments worth a
//! short vertical video, picks one, asks for five point-of-view image prompts
//! for it, and writes the guides needed to take those prompts through
//! Leonardo AI, Runway and CapCut by hand.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use reelcraft::{ReelcraftConfig, TopicSelection, run_pipeline, setup_environment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = setup_environment(ReelcraftConfig::load()?)?;
//!     let summary = run_pipeline(
//!         &ctx,
//!         TopicSelection::First,
//!         &mut std::io::stdin().lock(),
//!         &mut std::io::stdout(),
//!     )
//!     .await?;
//!     println!("Produced a kit for {}", summary.topic);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `reelcraft_error` - Error types
//! - `reelcraft_core` - Core data types (messages, topics, visual prompts)
//! - `reelcraft_interface` - ReelcraftDriver trait definition
//! - `reelcraft_models` - OpenAI-compatible client
//! - `reelcraft_storage` - Output directory and filename handling
//! - `reelcraft_pipeline` - Configuration and pipeline steps
//!
//! This crate (`reelcraft`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use reelcraft_core::*;
pub use reelcraft_error::*;
pub use reelcraft_interface::*;
pub use reelcraft_models::*;
pub use reelcraft_pipeline::*;
pub use reelcraft_storage::*;

pub mod telemetry;
