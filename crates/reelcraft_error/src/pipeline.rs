//! Pipeline error types.

/// Specific error conditions for pipeline steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Topic extraction produced nothing to select from
    #[display("No topics could be extracted from the model response")]
    NoTopics,
    /// The topic given on the command line was blank
    #[display("Topic must not be blank")]
    BlankTopic,
    /// A saved prompts file could not be loaded
    #[display("Failed to load prompts file: {}", _0)]
    PromptsFileRead(String),
    /// A generation request could not be assembled
    #[display("Failed to build request: {}", _0)]
    RequestBuild(String),
    /// Reading the selection or writing progress failed
    #[display("Console I/O failed: {}", _0)]
    Console(String),
}

/// Error type for pipeline steps.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::NoTopics);
/// assert!(format!("{}", err).contains("No topics"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
