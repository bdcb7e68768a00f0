//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod billing;
pub mod config;
pub mod error;
pub mod timer;
pub mod voice;

// Re-export common types
pub use billing::{BillDraft, BillRecord};
pub use config::AppConfig;
pub use error::*;
pub use timer::{StopPeriod, TimerState, WorkSummary, WorkTimer};
pub use voice::{FieldKey, Language, ListenOutcome, ListenResult, ListenTimeout};
