//! Trait definitions for Reelcraft language model drivers.
//!
//! Pipeline steps talk to a model only through [`ReelcraftDriver`], so tests
//! can substitute a canned implementation for the network client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::ReelcraftDriver;
