//! Video topic type.

use serde::{Deserialize, Serialize};

/// A short label naming a historical technology event or period.
///
/// Serialized as a bare JSON string, so a topic list persists as a
/// JSON array of strings.
///
/// # Examples
///
/// ```
/// use reelcraft_core::Topic;
///
/// let topic = Topic::new("The Y2K Bug").unwrap();
/// assert_eq!(topic.as_str(), "The Y2K Bug");
/// assert!(Topic::new("   ").is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Create a topic from text, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing remains after trimming.
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The topic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
