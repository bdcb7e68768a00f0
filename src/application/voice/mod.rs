//! Voice input/output use case

mod coordinator;
mod resolver;

pub use coordinator::{ListenOptions, VoiceConfig, VoiceCoordinator, LANGUAGE_KEY};
