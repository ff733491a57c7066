//! Test utilities for pipeline tests.
//!
//! This module provides a mock driver and shared fixtures.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockResponse};

/// A topic list answer in the usual bold-list shape.
#[allow(dead_code)]
pub const TOPICS_RESPONSE: &str = "Here are 10 ideas:\n\
1. **The Original iPhone Development** - Secret Project Purple.\n\
2. **Microsoft vs. United States** - The antitrust trial.\n\
3. **The Y2K Bug** - Midnight, December 31st 1999.\n\
4. **The Dot-com Crash** - When the bubble burst.\n\
5. **The Rise of AI Chatbots** - Living through the launch.\n\
These topics blend history and technology.";

/// A visual prompts answer with a single moment.
#[allow(dead_code)]
pub const PROMPTS_RESPONSE: &str = r#"{"prompts":[{"moment":"M1","prompt":"P1"}]}"#;
