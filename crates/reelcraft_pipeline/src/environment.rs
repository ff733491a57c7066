//! Credential loading and output directory setup.

use crate::ReelcraftConfig;
use reelcraft_error::{ConfigError, ReelcraftResult};
use reelcraft_interface::ReelcraftDriver;
use reelcraft_models::OpenAiClient;
use reelcraft_storage::OutputStore;
use std::sync::Once;
use tracing::{debug, info, instrument};

static DOTENV: Once = Once::new();

/// Everything a pipeline run needs, built once at startup.
pub struct PipelineContext {
    driver: Box<dyn ReelcraftDriver>,
    store: OutputStore,
    config: ReelcraftConfig,
}

impl std::fmt::Debug for PipelineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineContext")
            .field("provider", &self.driver.provider_name())
            .field("store", &self.store)
            .field("config", &self.config)
            .finish()
    }
}

impl PipelineContext {
    /// Assemble a context from parts, e.g. with a test driver.
    pub fn new(
        driver: impl ReelcraftDriver + 'static,
        store: OutputStore,
        config: ReelcraftConfig,
    ) -> Self {
        Self {
            driver: Box::new(driver),
            store,
            config,
        }
    }

    /// The language model backend.
    pub fn driver(&self) -> &dyn ReelcraftDriver {
        self.driver.as_ref()
    }

    /// The output directory.
    pub fn store(&self) -> &OutputStore {
        &self.store
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ReelcraftConfig {
        &self.config
    }
}

/// Load `.env` into the process environment, at most once per process.
///
/// Returns `true` only for the call that performed the load. A missing file
/// is not an error.
pub fn load_dotenv() -> bool {
    let mut loaded_now = false;
    DOTENV.call_once(|| {
        loaded_now = true;
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) => debug!(error = %e, "No .env file loaded"),
        }
    });
    loaded_now
}

/// Read a required API key from the environment variable `var`.
///
/// # Errors
///
/// Returns a configuration error if the variable is unset or blank.
pub fn resolve_api_key(var: &str) -> ReelcraftResult<String> {
    std::env::var(var)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            ConfigError::new(format!("{} not set. Please add it to your .env file.", var)).into()
        })
}

/// Load `.env` (see [`load_dotenv`]), resolve the API key and open the
/// output directory.
///
/// Calling this twice with the same configuration is harmless: the output
/// directory is only created when missing.
#[instrument(skip(config), fields(output_dir = %config.output.dir.display()))]
pub fn setup_environment(config: ReelcraftConfig) -> ReelcraftResult<PipelineContext> {
    load_dotenv();

    let api_key = resolve_api_key(&config.api.key_env)?;
    let client = OpenAiClient::with_api_key(api_key, config.models.topics.clone())
        .with_base_url(config.api.base_url.clone());
    let store = OutputStore::new(config.output.dir.clone())?;

    info!(base_url = client.base_url(), "Environment ready");
    Ok(PipelineContext::new(client, store, config))
}
