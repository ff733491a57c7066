//! OpenAI-compatible API error types.

/// OpenAI-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OpenAiErrorKind {
    /// Request could not be sent or the body could not be read
    #[display("Request failed: {}", _0)]
    Http(String),
    /// API answered with a non-success status
    #[display("HTTP {} error: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Request could not be converted to the chat completions schema
    #[display("Failed to build request: {}", _0)]
    RequestConversion(String),
    /// Response body did not match the chat completions schema
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),
    /// Response carried no choices or no message content
    #[display("Response contained no message content")]
    EmptyResponse,
}

/// OpenAI error with source location tracking.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{OpenAiError, OpenAiErrorKind};
///
/// let err = OpenAiError::new(OpenAiErrorKind::Api {
///     status: 401,
///     message: "invalid api key".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 401"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("OpenAI Error: {} at line {} in {}", kind, line, file)]
pub struct OpenAiError {
    /// The kind of error that occurred
    pub kind: OpenAiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OpenAiError {
    /// Create a new OpenAiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OpenAiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
