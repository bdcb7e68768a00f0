//! JSON file preference store adapter

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::ports::{PreferenceError, PreferenceStore};

/// Preferences kept as one JSON object of string values under the XDG data dir
pub struct JsonFilePreferences {
    path: PathBuf,
    // Serialises read-modify-write cycles
    lock: Mutex<()>,
}

impl JsonFilePreferences {
    /// Create a store at the default data path
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("harvester-meter");

        Self::with_path(data_dir.join("preferences.json"))
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| PreferenceError::ReadFailed(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| PreferenceError::Malformed {
            key: self.path.to_string_lossy().to_string(),
            message: e.to_string(),
        })
    }

    async fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PreferenceError::WriteFailed(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(values)
            .map_err(|e| PreferenceError::WriteFailed(e.to_string()))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| PreferenceError::WriteFailed(e.to_string()))
    }
}

impl Default for JsonFilePreferences {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for JsonFilePreferences {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.lock.lock().await;
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values).await?;
        debug!(key, path = %self.path.display(), "preference saved");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        let _guard = self.lock.lock().await;
        let mut values = self.read_all().await?;
        if values.remove(key).is_some() {
            self.write_all(&values).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonFilePreferences {
        JsonFilePreferences::with_path(dir.path().join("prefs").join("preferences.json"))
    }

    #[test]
    fn default_path_is_under_data_dir() {
        let store = JsonFilePreferences::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("harvester-meter"));
        assert!(path.to_string_lossy().ends_with("preferences.json"));
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("appLang").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_a_new_store() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).set("appLang", "en-US").await.unwrap();
        store_in(&dir).set("bills", "[]").await.unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get("appLang").await.unwrap(), Some("en-US".into()));
        assert_eq!(reopened.get("bills").await.unwrap(), Some("[]".into()));
    }

    #[tokio::test]
    async fn remove_deletes_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("appLang", "te-IN").await.unwrap();
        store.set("bills", "[]").await.unwrap();

        store.remove("bills").await.unwrap();
        store.remove("never-set").await.unwrap();

        assert_eq!(store.get("bills").await.unwrap(), None);
        assert_eq!(store.get("appLang").await.unwrap(), Some("te-IN".into()));
    }

    #[tokio::test]
    async fn corrupt_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{ nope").unwrap();

        let err = store.get("appLang").await.unwrap_err();
        assert!(matches!(err, PreferenceError::Malformed { .. }));
    }
}
