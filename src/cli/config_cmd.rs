//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::voice::{Language, ListenTimeout};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    presenter.output(&read_value(&config, key).unwrap_or_else(|| NOT_SET.to_string()));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(
            key,
            &read_value(&config, key).unwrap_or_else(|| NOT_SET.to_string()),
        );
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate `value` for `key` and store it in canonical form
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "language" => {
            let language: Language = value.parse().map_err(|e| invalid(format!("{}", e)))?;
            config.language = Some(language.tag().to_string());
        }
        "listen_timeout" => {
            let timeout: ListenTimeout = value.parse().map_err(|e| invalid(format!("{}", e)))?;
            config.listen_timeout = Some(timeout.to_string());
        }
        "rate_per_hour" => {
            let rate = parse_rate(value)
                .ok_or_else(|| invalid("Value must be a non-negative number".to_string()))?;
            config.rate_per_hour = Some(rate);
        }
        "voice_mode" => {
            config.voice_mode = Some(
                parse_bool(value).map_err(|_| invalid("Value must be 'true' or 'false'".into()))?,
            );
        }
        "web_fallback" => {
            config.web_fallback = Some(
                parse_bool(value).map_err(|_| invalid("Value must be 'true' or 'false'".into()))?,
            );
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }
    Ok(())
}

fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "language" => config.language.clone(),
        "voice_mode" => config.voice_mode.map(|b| b.to_string()),
        "listen_timeout" => config.listen_timeout.clone(),
        "rate_per_hour" => config.rate_per_hour.map(|r| r.to_string()),
        "web_fallback" => config.web_fallback.map(|b| b.to_string()),
        _ => None,
    }
}

fn parse_rate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && *r >= 0.0)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("on"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn language_is_stored_as_tag() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "language", "english").unwrap();
        assert_eq!(config.language, Some("en-US".to_string()));
    }

    #[test]
    fn language_invalid() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "language", "fr-FR").is_err());
        assert!(config.language.is_none());
    }

    #[test]
    fn timeout_is_normalised() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "listen_timeout", "7000ms").unwrap();
        assert_eq!(config.listen_timeout, Some("7s".to_string()));
        assert!(apply_value(&mut config, "listen_timeout", "soon").is_err());
    }

    #[test]
    fn rate_must_be_non_negative() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "rate_per_hour", "1200.5").unwrap();
        assert_eq!(config.rate_per_hour, Some(1200.5));
        assert!(apply_value(&mut config, "rate_per_hour", "-1").is_err());
        assert!(apply_value(&mut config, "rate_per_hour", "NaN").is_err());
    }

    #[test]
    fn read_value_reports_unset() {
        let config = AppConfig::empty();
        assert_eq!(read_value(&config, "voice_mode"), None);
        let config = AppConfig::defaults();
        assert_eq!(read_value(&config, "voice_mode"), Some("true".to_string()));
        assert_eq!(read_value(&config, "language"), Some("te-IN".to_string()));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = check_key("api_key").unwrap_err();
        assert!(err.to_string().contains("Valid keys"));
    }
}
