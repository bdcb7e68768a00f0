//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! logging setup and the interactive session runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod history_cmd;
pub mod logging;
pub mod presenter;
pub mod session;
pub mod signals;

// Re-export commonly used types
pub use app::{run_session, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, HistoryAction, SessionOptions};
pub use presenter::Presenter;
pub use session::{DraftEntry, Flow, Session, SessionCommand};
