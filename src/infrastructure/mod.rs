//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! TOML config on disk, JSON preferences, and terminal speech I/O.

pub mod config;
pub mod platform;
pub mod preferences;
pub mod speech;

// Re-export adapters
pub use config::XdgConfigStore;
pub use platform::StaticPlatform;
pub use preferences::{JsonFilePreferences, MemoryPreferences};
pub use speech::{ConsoleSynthesizer, LineSource, TerminalRecognizer, TerminalWebRecognizerFactory};
