//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::voice::{Language, ListenTimeout};

/// Harvester Meter - work timer with voice-assisted billing
#[derive(Parser, Debug)]
#[command(name = "harvester-meter")]
#[command(version)]
#[command(about = "Harvester work timer with voice-assisted bill capture")]
#[command(long_about = None)]
pub struct Cli {
    /// Speech language (te-IN, en-US)
    #[arg(short = 'l', long, value_name = "TAG")]
    pub language: Option<String>,

    /// How long to wait for speech (e.g., 1500ms, 7s, 1m)
    #[arg(short = 't', long, value_name = "TIME")]
    pub timeout: Option<String>,

    /// Hourly rate used when a bill is saved
    #[arg(short = 'r', long, value_name = "AMOUNT")]
    pub rate: Option<f64>,

    /// Disable spoken announcements
    #[arg(long)]
    pub no_voice: bool,

    /// Use the one-shot web recognizer instead of the native one
    #[arg(long)]
    pub web: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Show or clear saved bills
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Bill history actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    /// Print saved bills, latest first
    List,
    /// Delete all saved bills
    Clear,
}

/// Parsed options for the interactive session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub language: Language,
    /// Language came from the command line or environment and overrides
    /// the language stored by a previous session
    pub language_pinned: bool,
    pub voice_mode: bool,
    pub listen_timeout: ListenTimeout,
    pub rate_per_hour: f64,
    pub web_fallback: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "language",
    "voice_mode",
    "listen_timeout",
    "rate_per_hour",
    "web_fallback",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
