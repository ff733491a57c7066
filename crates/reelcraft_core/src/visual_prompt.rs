//! Visual prompt records returned by the model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder used when a visual prompt has no prompt text.
pub const MISSING_PROMPT: &str = "No prompt available";

/// One narrative beat of a topic paired with an image-generation prompt.
///
/// The record is the JSON object exactly as the model returned it, so
/// re-serializing writes back the same keys, in the same order, with the same
/// values (nulls included). `moment` and `prompt` are read leniently: strings
/// are used as-is, other values are rendered as JSON text, and absent or null
/// fields fall back to placeholders.
///
/// # Examples
///
/// ```
/// use reelcraft_core::VisualPrompt;
///
/// let vp = VisualPrompt::new("Launch day", "POV of an engineer on stage");
/// assert_eq!(vp.moment_or(1), "Launch day");
///
/// let bare: VisualPrompt = serde_json::from_str("{}").unwrap();
/// assert_eq!(bare.moment_or(3), "Moment 3");
/// assert_eq!(bare.prompt_text(), "No prompt available");
///
/// let odd: VisualPrompt = serde_json::from_str(r#"{"moment": 2, "prompt": {"scene": "desk"}}"#).unwrap();
/// assert_eq!(odd.moment_or(1), "2");
/// assert_eq!(odd.prompt_text(), r#"{"scene":"desk"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisualPrompt(Map<String, Value>);

impl VisualPrompt {
    /// Create a prompt with both fields set.
    pub fn new(moment: impl Into<String>, prompt: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("moment".to_string(), Value::String(moment.into()));
        fields.insert("prompt".to_string(), Value::String(prompt.into()));
        Self(fields)
    }

    /// All fields as received.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The moment label, if present and not null.
    pub fn moment(&self) -> Option<String> {
        self.text_field("moment")
    }

    /// The prompt text, if present and not null.
    pub fn prompt(&self) -> Option<String> {
        self.text_field("prompt")
    }

    /// The moment label, or `Moment {position}` when absent.
    ///
    /// `position` is 1-based.
    pub fn moment_or(&self, position: usize) -> String {
        self.moment()
            .unwrap_or_else(|| format!("Moment {}", position))
    }

    /// The prompt text, or [`MISSING_PROMPT`] when absent.
    pub fn prompt_text(&self) -> String {
        self.prompt().unwrap_or_else(|| MISSING_PROMPT.to_string())
    }

    fn text_field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl From<Map<String, Value>> for VisualPrompt {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_written_back_in_received_order() {
        let raw = r#"{"prompt":"P1","style":"cinematic","moment":null}"#;
        let vp: VisualPrompt = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&vp).unwrap(), raw);
        assert_eq!(vp.moment(), None);
        assert_eq!(vp.fields().get("style"), Some(&Value::from("cinematic")));
    }

    #[test]
    fn non_string_values_render_as_json() {
        let vp: VisualPrompt = serde_json::from_str(
            r#"{"moment": 4, "prompt": {"scene": "desk", "style": "cinematic"}}"#,
        )
        .unwrap();
        assert_eq!(vp.moment_or(1), "4");
        assert_eq!(vp.prompt_text(), r#"{"scene":"desk","style":"cinematic"}"#);
    }

    #[test]
    fn null_prompt_uses_placeholder() {
        let vp: VisualPrompt = serde_json::from_str(r#"{"prompt": null}"#).unwrap();
        assert_eq!(vp.prompt_text(), MISSING_PROMPT);
        assert_eq!(vp.moment_or(2), "Moment 2");
    }
}
