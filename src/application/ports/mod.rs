//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod platform;
pub mod preferences;
pub mod recognizer;
pub mod synthesizer;
pub mod web_recognizer;

// Re-export common types
pub use config::ConfigStore;
pub use platform::{Platform, PlatformKind};
pub use preferences::{PreferenceError, PreferenceStore};
pub use recognizer::{
    NativeRecognizer, PartialResultCallback, PartialSubscription, PermissionState,
    RecognitionError, RecognitionOptions,
};
pub use synthesizer::{SpeechRequest, SpeechSynthesizer, SynthesisError};
pub use web_recognizer::{
    WebEventHandler, WebRecognition, WebRecognitionEvent, WebRecognizerConfig,
    WebRecognizerFactory,
};
