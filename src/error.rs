use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(calsona::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(calsona::config))]
    Config(String),

    #[error("Google authorization error: {0}")]
    #[diagnostic(code(calsona::google_auth))]
    GoogleAuth(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(calsona::google_calendar))]
    GoogleCalendar(String),

    #[error("Summary API error: {0}")]
    #[diagnostic(code(calsona::summary_api))]
    SummaryApi(String),

    #[error("Invalid input: {0}")]
    #[diagnostic(code(calsona::invalid_input))]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    #[diagnostic(code(calsona::http))]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    #[diagnostic(code(calsona::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(calsona::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(calsona::other))]
    Other(String),
}

// Implement From for JSON serialization errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type BotResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create Google authorization errors
pub fn google_auth_error(message: &str) -> Error {
    Error::GoogleAuth(message.to_string())
}

/// Helper to create Google Calendar errors
pub fn google_calendar_error(message: &str) -> Error {
    Error::GoogleCalendar(message.to_string())
}

/// Helper to create summary API errors
pub fn summary_api_error(message: &str) -> Error {
    Error::SummaryApi(message.to_string())
}

/// Helper to create invalid input errors
pub fn invalid_input_error(message: &str) -> Error {
    Error::InvalidInput(message.to_string())
}

/// Helper to create other errors
#[allow(dead_code)]
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
