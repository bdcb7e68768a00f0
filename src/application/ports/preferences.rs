//! Key-value preference store port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Preference store errors
#[derive(Debug, Clone, Error)]
pub enum PreferenceError {
    #[error("Failed to read preferences: {0}")]
    ReadFailed(String),

    #[error("Failed to write preferences: {0}")]
    WriteFailed(String),

    #[error("Stored value for '{key}' is malformed: {message}")]
    Malformed { key: String, message: String },
}

/// Port for small persisted string values (language tag, bill list)
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    async fn remove(&self, key: &str) -> Result<(), PreferenceError>;
}

#[async_trait]
impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.as_ref().get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.as_ref().set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.as_ref().remove(key).await
    }
}
