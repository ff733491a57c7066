//! Output directory handling for Reelcraft artifacts.
//!
//! Every artifact the pipeline produces (topic list, prompt list, markdown
//! guides) is written into a single output directory by [`OutputStore`].
//! Per-topic artifacts are named from the topic via [`sanitize_filename`]
//! followed by a fixed suffix.
//!
//! # Example
//!
//! ```no_run
//! use reelcraft_storage::OutputStore;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = OutputStore::new("output")?;
//! let path = store.write_topic_text("The Y2K Bug", "_notes.md", "# Notes\n").await?;
//! assert!(path.ends_with("The_Y2K_Bug_notes.md"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filename;
mod store;

pub use filename::{MAX_FILENAME_STEM, sanitize_filename, topic_filename};
pub use store::OutputStore;
