//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod billing;
pub mod ports;
pub mod voice;

// Re-export use cases
pub use billing::{BillBook, BILLS_KEY};
pub use voice::{ListenOptions, VoiceConfig, VoiceCoordinator, LANGUAGE_KEY};
