//! Domain error types

use thiserror::Error;

/// Error when parsing a listen timeout string
#[derive(Debug, Clone, Error)]
#[error("Invalid timeout format: \"{input}\". Expected format: <number>ms, <number>s, <number>m or <number>m<number>s (e.g., 1500ms, 7s, 1m)")]
pub struct TimeoutParseError {
    pub input: String,
}

/// Error when an unsupported language tag is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid language: \"{input}\". Supported languages are: te-IN, en-US")]
pub struct InvalidLanguageError {
    pub input: String,
}

/// Error when an unknown form field is named
#[derive(Debug, Clone, Error)]
#[error("Invalid field: \"{input}\". Valid fields are: farmer, address")]
pub struct InvalidFieldError {
    pub input: String,
}

/// Error when building a bill from user input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillError {
    #[error("Farmer name is required")]
    MissingFarmerName,

    #[error("Rate per hour must be a non-negative number, got {0}")]
    InvalidRate(f64),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
