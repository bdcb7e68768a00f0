//! Native speech recognition port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voice::Language;

/// Speech recognition errors, shared by the native and web backends
#[derive(Debug, Clone, Error)]
pub enum RecognitionError {
    #[error("Speech recognition unavailable: {0}")]
    Unavailable(String),

    #[error("Permission check failed: {0}")]
    PermissionFailed(String),

    #[error("Speech recognition permission denied")]
    PermissionDenied,

    #[error("Failed to start listening: {0}")]
    StartFailed(String),

    #[error("Failed to stop listening: {0}")]
    StopFailed(String),

    #[error("Failed to subscribe to results: {0}")]
    SubscribeFailed(String),
}

/// Microphone / recognition permission state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    /// Not decided yet; asking will show a prompt
    Prompt,
}

impl PermissionState {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Options for starting native capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognitionOptions {
    pub language: Language,
    pub partial_results: bool,
}

/// Callback receiving the candidate transcripts of a partial result,
/// best candidate first.
pub type PartialResultCallback = Arc<dyn Fn(&[String]) + Send + Sync>;

/// Handle of a partial-result subscription
pub trait PartialSubscription: Send + Sync {
    /// Stop delivering results to the callback. Idempotent.
    fn remove(&self);
}

/// Port for the in-process recognition engine
#[async_trait]
pub trait NativeRecognizer: Send + Sync {
    async fn check_permission(&self) -> Result<PermissionState, RecognitionError>;

    async fn request_permission(&self) -> Result<PermissionState, RecognitionError>;

    /// Begin capturing. Results arrive through partial-result listeners.
    async fn start(&self, options: RecognitionOptions) -> Result<(), RecognitionError>;

    /// Stop capturing. Must be safe to call when idle.
    async fn stop(&self) -> Result<(), RecognitionError>;

    async fn add_partial_listener(
        &self,
        callback: PartialResultCallback,
    ) -> Result<Box<dyn PartialSubscription>, RecognitionError>;
}

#[async_trait]
impl<T: NativeRecognizer + ?Sized> NativeRecognizer for Arc<T> {
    async fn check_permission(&self) -> Result<PermissionState, RecognitionError> {
        self.as_ref().check_permission().await
    }

    async fn request_permission(&self) -> Result<PermissionState, RecognitionError> {
        self.as_ref().request_permission().await
    }

    async fn start(&self, options: RecognitionOptions) -> Result<(), RecognitionError> {
        self.as_ref().start(options).await
    }

    async fn stop(&self) -> Result<(), RecognitionError> {
        self.as_ref().stop().await
    }

    async fn add_partial_listener(
        &self,
        callback: PartialResultCallback,
    ) -> Result<Box<dyn PartialSubscription>, RecognitionError> {
        self.as_ref().add_partial_listener(callback).await
    }
}
