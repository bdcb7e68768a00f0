//! Terminal speech adapters
//!
//! Typed lines stand in for recognised speech and spoken phrases are
//! printed, so the voice flow can run in any terminal.

mod console;
mod line_source;
mod terminal;
mod web;

pub use console::ConsoleSynthesizer;
pub use line_source::LineSource;
pub use terminal::TerminalRecognizer;
pub use web::TerminalWebRecognizerFactory;
