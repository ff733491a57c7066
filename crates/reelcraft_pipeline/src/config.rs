//! Configuration for the pipeline.
//!
//! Configuration is layered, later sources overriding earlier ones:
//! 1. Bundled defaults (reelcraft.toml shipped with the crate)
//! 2. User config in home directory (~/.config/reelcraft/reelcraft.toml)
//! 3. User config in current directory (./reelcraft.toml)
//! 4. `REELCRAFT_` environment variables, `__` separating section and key
//!    (e.g. `REELCRAFT_OUTPUT__DIR=renders`)

use reelcraft_error::{ConfigError, ReelcraftError, ReelcraftResult};
use reelcraft_models::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../reelcraft.toml");

/// Language model endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,
    /// Environment variable holding the API key
    pub key_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

/// Model used for each request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Model for the free-text topic list
    pub topics: String,
    /// Model for the JSON visual prompts
    pub prompts: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            topics: "gpt-4-turbo".to_string(),
            prompts: "gpt-4.1-nano".to_string(),
        }
    }
}

/// Where artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, relative to the working directory unless absolute
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
        }
    }
}

/// Topic extraction tuning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TopicsConfig {
    /// Matches an extraction strategy must find to be accepted
    pub minimum_matches: usize,
}

impl Default for TopicsConfig {
    fn default() -> Self {
        Self {
            minimum_matches: crate::DEFAULT_MINIMUM_MATCHES,
        }
    }
}

/// Complete pipeline configuration.
///
/// # Example
///
/// ```toml
/// [models]
/// prompts = "gpt-4o-mini"
///
/// [output]
/// dir = "renders"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReelcraftConfig {
    /// Endpoint settings
    pub api: ApiConfig,
    /// Model selection
    pub models: ModelsConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Topic extraction settings
    pub topics: TopicsConfig,
}

impl ReelcraftConfig {
    /// Load configuration from bundled defaults overlaid with one explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ReelcraftResult<Self> {
        debug!("Loading configuration from file");

        let path = path.as_ref();
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| {
                ReelcraftError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ReelcraftError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and skipped if not found.
    #[instrument]
    pub fn load() -> ReelcraftResult<Self> {
        debug!("Loading layered configuration");

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/reelcraft/reelcraft.toml");
            builder = builder.add_source(config::File::from(home_config).required(false));
        }

        builder = builder
            .add_source(config::File::with_name("reelcraft").required(false))
            .add_source(
                config::Environment::with_prefix("REELCRAFT")
                    .prefix_separator("_")
                    .separator("__"),
            );

        builder
            .build()
            .map_err(|e| {
                ReelcraftError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ReelcraftError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
