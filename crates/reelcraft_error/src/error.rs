//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, OpenAiError, PipelineError, StorageError};

/// Every error condition a Reelcraft operation can surface.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{ReelcraftError, StorageError, StorageErrorKind};
///
/// let storage_err = StorageError::new(StorageErrorKind::FileWrite("disk full".to_string()));
/// let err: ReelcraftError = storage_err.into();
/// assert!(format!("{}", err).contains("disk full"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ReelcraftErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Output directory error
    #[from(StorageError)]
    Storage(StorageError),
    /// OpenAI-compatible API error
    #[from(OpenAiError)]
    OpenAi(OpenAiError),
    /// Pipeline step error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Reelcraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{ReelcraftErrorKind, ReelcraftResult, ConfigError};
///
/// fn might_fail() -> ReelcraftResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ReelcraftErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Reelcraft Error: {}", _0)]
pub struct ReelcraftError(Box<ReelcraftErrorKind>);

impl ReelcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: ReelcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReelcraftErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ReelcraftErrorKind
impl<T> From<T> for ReelcraftError
where
    T: Into<ReelcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Reelcraft operations.
pub type ReelcraftResult<T> = std::result::Result<T, ReelcraftError>;
