//! Main app runner for the interactive session

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::voice::{Language, ListenTimeout};
use crate::infrastructure::{JsonFilePreferences, LineSource};

use super::args::SessionOptions;
use super::presenter::Presenter;
use super::session::Session;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the configured language
pub const LANGUAGE_ENV: &str = "HARVESTER_LANGUAGE";

/// Run the interactive session on stdin until quit, EOF or Ctrl-C
pub async fn run_session(options: SessionOptions) -> ExitCode {
    let presenter = Presenter::new();

    let shutdown = ShutdownSignal::new();
    if let Err(e) = shutdown.setup() {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let preferences = Arc::new(JsonFilePreferences::new());
    let mut session = Session::new(options, LineSource::stdin(), preferences, shutdown);
    session.run().await;

    ExitCode::from(EXIT_SUCCESS)
}

/// Language tag from the environment, if set
pub fn env_language() -> Option<String> {
    env::var(LANGUAGE_ENV).ok().filter(|s| !s.trim().is_empty())
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load_or_empty().await;

    let env_config = AppConfig {
        language: env_language(),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Validate merged configuration into session options
pub fn session_options(
    config: &AppConfig,
    language_pinned: bool,
) -> Result<SessionOptions, ConfigError> {
    let invalid = |key: &str, message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    let language = match config.language.as_deref() {
        Some(tag) => tag
            .parse::<Language>()
            .map_err(|e| invalid("language", e.to_string()))?,
        None => Language::default(),
    };
    let listen_timeout = match config.listen_timeout.as_deref() {
        Some(value) => value
            .parse::<ListenTimeout>()
            .map_err(|e| invalid("listen_timeout", e.to_string()))?,
        None => ListenTimeout::default(),
    };
    let rate_per_hour = config.rate_per_hour.unwrap_or(0.0);
    if !rate_per_hour.is_finite() || rate_per_hour < 0.0 {
        return Err(invalid(
            "rate_per_hour",
            format!("must be a non-negative number, got {}", rate_per_hour),
        ));
    }

    Ok(SessionOptions {
        language,
        language_pinned,
        voice_mode: config.voice_mode_or_default(),
        listen_timeout,
        rate_per_hour,
        web_fallback: config.web_fallback_or_default(),
    })
}
