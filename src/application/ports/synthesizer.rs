//! Speech synthesis port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voice::Language;

/// Speech synthesis errors
#[derive(Debug, Clone, Error)]
pub enum SynthesisError {
    #[error("Speech synthesis unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to speak: {0}")]
    SpeakFailed(String),

    #[error("Failed to stop speech: {0}")]
    StopFailed(String),
}

/// One utterance handed to the synthesizer
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub lang: Language,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl SpeechRequest {
    /// Request at normal rate, pitch and full volume
    pub fn new(text: impl Into<String>, lang: Language) -> Self {
        Self {
            text: text.into(),
            lang,
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Port for text-to-speech output
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Speak the request, completing when the utterance ends or is stopped.
    async fn speak(&self, request: &SpeechRequest) -> Result<(), SynthesisError>;

    /// Stop any utterance in progress. Must be safe to call when idle.
    async fn stop(&self) -> Result<(), SynthesisError>;
}

#[async_trait]
impl<T: SpeechSynthesizer + ?Sized> SpeechSynthesizer for Arc<T> {
    async fn speak(&self, request: &SpeechRequest) -> Result<(), SynthesisError> {
        self.as_ref().speak(request).await
    }

    async fn stop(&self) -> Result<(), SynthesisError> {
        self.as_ref().stop().await
    }
}

/// Blanket implementation for boxed synthesizer types
#[async_trait]
impl SpeechSynthesizer for Box<dyn SpeechSynthesizer> {
    async fn speak(&self, request: &SpeechRequest) -> Result<(), SynthesisError> {
        self.as_ref().speak(request).await
    }

    async fn stop(&self) -> Result<(), SynthesisError> {
        self.as_ref().stop().await
    }
}
