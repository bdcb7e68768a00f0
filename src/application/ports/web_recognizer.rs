//! Web-standard speech recognition port interface

use std::sync::Arc;

use super::recognizer::RecognitionError;
use crate::domain::voice::Language;

/// Settings applied to a freshly constructed recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebRecognizerConfig {
    pub lang: Language,
    pub continuous: bool,
    pub interim_results: bool,
}

/// Events raised by a web recognizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebRecognitionEvent {
    /// Best transcript of a final result
    Result(String),
    Error(String),
    End,
}

pub type WebEventHandler = Arc<dyn Fn(WebRecognitionEvent) + Send + Sync>;

/// One recognizer object. Each listening attempt constructs its own.
pub trait WebRecognition: Send + Sync {
    /// Install the handler for `result`, `error` and `end` events
    fn set_handler(&self, handler: WebEventHandler);

    fn start(&self) -> Result<(), RecognitionError>;

    /// Stop listening. Must be safe to call more than once.
    fn stop(&self);
}

/// Port constructing web recognizers
pub trait WebRecognizerFactory: Send + Sync {
    /// Construct a recognizer, or `None` when the runtime has no recognition support
    fn create(&self, config: WebRecognizerConfig) -> Option<Box<dyn WebRecognition>>;
}

impl<T: WebRecognizerFactory + ?Sized> WebRecognizerFactory for Arc<T> {
    fn create(&self, config: WebRecognizerConfig) -> Option<Box<dyn WebRecognition>> {
        self.as_ref().create(config)
    }
}
