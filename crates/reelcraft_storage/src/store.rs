//! Filesystem output directory.

use crate::topic_filename;
use reelcraft_error::{JsonError, ReelcraftResult, StorageError, StorageErrorKind};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The directory every pipeline artifact is written to.
///
/// Writes overwrite existing files of the same name. There is a single
/// writer per run, so no locking is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStore {
    base_path: PathBuf,
}

impl OutputStore {
    /// Open an output directory, creating it and its parents if missing.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> ReelcraftResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Output directory ready");
        Ok(Self { base_path })
    }

    /// The output directory.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `name` inside the output directory.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Path of the per-topic artifact with the given suffix.
    pub fn topic_path(&self, topic: &str, suffix: &str) -> PathBuf {
        self.path_for(&topic_filename(topic, suffix))
    }

    /// Write text to `name`, returning the written path.
    #[tracing::instrument(skip(self, contents), fields(bytes = contents.len()))]
    pub async fn write_text(&self, name: &str, contents: &str) -> ReelcraftResult<PathBuf> {
        let path = self.path_for(name);
        write_file(&path, contents.as_bytes()).await?;
        Ok(path)
    }

    /// Write `value` as pretty-printed JSON to `name`, returning the written path.
    #[tracing::instrument(skip(self, value))]
    pub async fn write_json<T>(&self, name: &str, value: &T) -> ReelcraftResult<PathBuf>
    where
        T: Serialize + ?Sized + Sync,
    {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| JsonError::new(format!("Failed to serialize {}: {}", name, e)))?;
        self.write_text(name, &json).await
    }

    /// Write text to the per-topic artifact with the given suffix.
    pub async fn write_topic_text(
        &self,
        topic: &str,
        suffix: &str,
        contents: &str,
    ) -> ReelcraftResult<PathBuf> {
        self.write_text(&topic_filename(topic, suffix), contents)
            .await
    }

    /// Write JSON to the per-topic artifact with the given suffix.
    pub async fn write_topic_json<T>(
        &self,
        topic: &str,
        suffix: &str,
        value: &T,
    ) -> ReelcraftResult<PathBuf>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.write_json(&topic_filename(topic, suffix), value).await
    }

    /// Read a text file, which need not live in the output directory.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn read_text(&self, path: impl AsRef<Path>) -> ReelcraftResult<String> {
        let path = path.as_ref();
        tokio::fs::read_to_string(path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }
}

async fn write_file(path: &Path, data: &[u8]) -> ReelcraftResult<()> {
    tokio::fs::write(path, data).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    tracing::debug!(path = %path.display(), size = data.len(), "Wrote artifact");
    Ok(())
}
