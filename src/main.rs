//! Harvester Meter CLI entry point

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use harvester_meter::application::BillBook;
use harvester_meter::cli::{
    app::{env_language, load_merged_config, run_session, session_options, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    history_cmd::handle_history_command,
    logging::init_tracing,
    presenter::Presenter,
};
use harvester_meter::domain::config::AppConfig;
use harvester_meter::infrastructure::{JsonFilePreferences, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::History { action }) => {
            let book = BillBook::new(Arc::new(JsonFilePreferences::new()));
            if let Err(e) = handle_history_command(action, &book, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        language: cli.language.clone(),
        voice_mode: if cli.no_voice { Some(false) } else { None },
        listen_timeout: cli.timeout.clone(),
        rate_per_hour: cli.rate,
        web_fallback: if cli.web { Some(true) } else { None },
    };
    let language_pinned = cli.language.is_some() || env_language().is_some();

    let config = load_merged_config(&XdgConfigStore::new(), cli_config).await;

    let options = match session_options(&config, language_pinned) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_session(options).await
}
