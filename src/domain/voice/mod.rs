//! Voice domain module

mod field;
mod language;
mod outcome;
mod phrase;
mod register;
mod timeout;

pub use field::FieldKey;
pub use language::{Language, ALL_LANGUAGES};
pub use outcome::{ListenOutcome, ListenResult};
pub use phrase::Phrase;
pub use register::{ListenRegister, ListenSession, ListenToken};
pub use timeout::{ListenTimeout, DEFAULT_LISTEN_TIMEOUT_MS};
