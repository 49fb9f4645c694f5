//! File-backed settings store using tokio::fs.

use crate::{Result, SettingsStore, StoreError};
use std::io;
use std::path::{Path, PathBuf};

/// Name of the settings file inside the configuration directory.
pub const SETTINGS_FILE_NAME: &str = "data.json";

/// Settings store persisting to a single JSON file.
///
/// Writes go to a sibling temporary file first and are then renamed over
/// the target, so a crash mid-write never leaves a truncated settings file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file does not need to exist yet; parent directories are created
    /// on first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Default settings path (`<config dir>/livesub/data.json`)
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StoreError::ConfigDirNotFound)?;
        Ok(config_dir.join("livesub").join(SETTINGS_FILE_NAME))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait::async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load_blob(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn save_blob(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, contents).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        tracing::debug!(path = %self.path.display(), bytes = contents.len(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSettingsStore::new(temp_dir.path().join("data.json"));

        assert!(store.load_blob().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSettingsStore::new(temp_dir.path().join("data.json"));

        store.save_blob("{}").await.unwrap();

        assert!(temp_dir.path().join("data.json").exists());
        assert!(!temp_dir.path().join("data.json.tmp").exists());
    }

    #[test]
    fn test_default_path_file_name() {
        if let Ok(path) = FileSettingsStore::default_path() {
            assert!(path.ends_with("livesub/data.json"));
        }
    }
}
