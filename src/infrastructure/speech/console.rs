//! Console speech synthesizer adapter

use std::io::Write;

use async_trait::async_trait;
use colored::Colorize;

use crate::application::ports::{SpeechRequest, SpeechSynthesizer, SynthesisError};

/// Prints utterances to stderr instead of playing audio
pub struct ConsoleSynthesizer;

impl ConsoleSynthesizer {
    pub fn new() -> Self {
        Self
    }

    fn render(request: &SpeechRequest) -> String {
        format!("{} [{}] {}", "🔊".cyan(), request.lang, request.text)
    }
}

impl Default for ConsoleSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for ConsoleSynthesizer {
    async fn speak(&self, request: &SpeechRequest) -> Result<(), SynthesisError> {
        writeln!(std::io::stderr(), "{}", Self::render(request))
            .map_err(|e| SynthesisError::SpeakFailed(e.to_string()))
    }

    async fn stop(&self) -> Result<(), SynthesisError> {
        Ok(())
    }
}
