//! Turning a free-text topic list into discrete topics.
//!
//! Model output has no fixed grammar, so extraction is a cascade of
//! independent strategies. Each is tried in order; the first to find at
//! least `minimum_matches` candidates wins, and the last strategy is
//! accepted whatever it finds.

use reelcraft_core::Topic;
use regex::Regex;
use tracing::debug;

/// Matches a strategy must find to be accepted.
pub const DEFAULT_MINIMUM_MATCHES: usize = 5;

/// One way of pulling candidate topics out of text.
pub trait ExtractionStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Raw candidates in document order, before cleanup.
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Text wrapped in `**bold**` markers.
#[derive(Debug, Clone)]
pub struct BoldStrategy {
    pattern: Regex,
}

impl BoldStrategy {
    /// Create the strategy.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\*\*(.+?)\*\*").expect("Valid bold regex"),
        }
    }
}

impl Default for BoldStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStrategy for BoldStrategy {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Items of a numbered list, up to a trailing dash, parenthesis or colon.
///
/// `3. The Y2K Bug - when clocks rolled over` yields `The Y2K Bug`.
#[derive(Debug, Clone)]
pub struct NumberedListStrategy {
    pattern: Regex,
}

impl NumberedListStrategy {
    /// Create the strategy.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\d+\.\s*(?:\*\*)?([^*\n]+?)(?:\*\*)?(?:\s*-|\s*\(|\s*:)")
                .expect("Valid numbered list regex"),
        }
    }
}

impl Default for NumberedListStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStrategy for NumberedListStrategy {
    fn name(&self) -> &'static str {
        "numbered_list"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Every substantial line, skipping a closing "These ..." summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineStrategy;

impl LineStrategy {
    /// Lines of this many characters or fewer are skipped.
    pub const MIN_LINE_CHARS: usize = 10;
}

impl ExtractionStrategy for LineStrategy {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        text.split('\n')
            .map(str::trim)
            .filter(|line| {
                !line.is_empty()
                    && !line.starts_with("These")
                    && line.chars().count() > Self::MIN_LINE_CHARS
            })
            .map(str::to_string)
            .collect()
    }
}

/// Ordered extraction cascade plus candidate cleanup.
pub struct TopicExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
    minimum_matches: usize,
    leading_markers: Regex,
    trailing_suffix: Regex,
}

impl std::fmt::Debug for TopicExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("TopicExtractor")
            .field("strategies", &names)
            .field("minimum_matches", &self.minimum_matches)
            .finish()
    }
}

impl TopicExtractor {
    /// Bold, then numbered list, then lines.
    pub fn new(minimum_matches: usize) -> Self {
        Self::with_strategies(
            vec![
                Box::new(BoldStrategy::new()),
                Box::new(NumberedListStrategy::new()),
                Box::new(LineStrategy),
            ],
            minimum_matches,
        )
    }

    /// Use a custom cascade.
    pub fn with_strategies(
        strategies: Vec<Box<dyn ExtractionStrategy>>,
        minimum_matches: usize,
    ) -> Self {
        Self {
            strategies,
            minimum_matches,
            leading_markers: Regex::new(r"^[\d.\s*-]+").expect("Valid leading marker regex"),
            trailing_suffix: Regex::new(r"\s+[-–—].*$").expect("Valid suffix regex"),
        }
    }

    /// Run the cascade and clean the winning candidates.
    ///
    /// Candidates that are empty after cleanup are dropped, so the result may
    /// be shorter than what the strategy found, and may be empty.
    pub fn extract(&self, text: &str) -> Vec<Topic> {
        let mut candidates = Vec::new();

        for (position, strategy) in self.strategies.iter().enumerate() {
            candidates = strategy.extract(text);
            let last = position + 1 == self.strategies.len();

            if candidates.len() >= self.minimum_matches || last {
                debug!(
                    strategy = strategy.name(),
                    candidates = candidates.len(),
                    "Topic extraction strategy selected"
                );
                break;
            }

            debug!(
                strategy = strategy.name(),
                candidates = candidates.len(),
                "Too few candidates, trying next strategy"
            );
        }

        candidates
            .iter()
            .filter_map(|candidate| Topic::new(self.clean(candidate)))
            .collect()
    }

    /// Strip leading list markers and a trailing ` - ...` description.
    pub fn clean(&self, candidate: &str) -> String {
        let without_markers = self.leading_markers.replace(candidate.trim(), "");
        let without_suffix = self.trailing_suffix.replace(without_markers.trim(), "");
        without_suffix.trim().to_string()
    }
}

impl Default for TopicExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_MATCHES)
    }
}

/// Extract topics with the default cascade.
///
/// # Examples
///
/// ```
/// use reelcraft_pipeline::extract_topics;
///
/// assert!(extract_topics("").is_empty());
/// ```
pub fn extract_topics(text: &str) -> Vec<Topic> {
    TopicExtractor::default().extract(text)
}
