//! In-memory preference store adapter

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{PreferenceError, PreferenceStore};

/// Preferences that live only as long as the process
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.values().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get("appLang").await.unwrap(), None);

        prefs.set("appLang", "en-US").await.unwrap();
        assert_eq!(prefs.get("appLang").await.unwrap(), Some("en-US".into()));

        prefs.remove("appLang").await.unwrap();
        assert_eq!(prefs.get("appLang").await.unwrap(), None);
    }
}
