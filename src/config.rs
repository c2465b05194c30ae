use crate::error::{config_error, env_error, BotResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Default calendar to read events from
pub const DEFAULT_CALENDAR_ID: &str = "primary";

/// Default local port for the OAuth callback listener
pub const DEFAULT_CALLBACK_PORT: u16 = 8080;

/// Main configuration structure for the tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Calendar API client ID
    pub google_client_id: String,
    /// Google Calendar API client secret
    pub google_client_secret: String,
    /// Google Calendar ID to read events from
    pub google_calendar_id: String,
    /// OpenAI API key, required only for summary generation
    pub openai_api_key: Option<String>,
    /// Optional override for the summary model
    pub openai_model: Option<String>,
    /// Local port that receives the OAuth callback
    pub oauth_callback_port: u16,
}

impl Config {
    /// Load configuration from environment
    pub fn load() -> BotResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let google_client_id =
            env::var("GOOGLE_CLIENT_ID").map_err(|_| env_error("GOOGLE_CLIENT_ID"))?;
        let google_client_secret =
            env::var("GOOGLE_CLIENT_SECRET").map_err(|_| env_error("GOOGLE_CLIENT_SECRET"))?;

        // The OpenAI key is checked again when a summary is actually requested
        let openai_api_key = env::var("OPENAI_API_KEY").ok();
        let openai_model = env::var("OPENAI_MODEL").ok();

        // Optional overrides with defaults
        let google_calendar_id =
            env::var("GOOGLE_CALENDAR_ID").unwrap_or_else(|_| String::from(DEFAULT_CALENDAR_ID));

        let oauth_callback_port = match env::var("OAUTH_CALLBACK_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| config_error("Invalid OAUTH_CALLBACK_PORT format"))?,
            Err(_) => DEFAULT_CALLBACK_PORT,
        };

        Ok(Config {
            google_client_id,
            google_client_secret,
            google_calendar_id,
            openai_api_key,
            openai_model,
            oauth_callback_port,
        })
    }

    /// Redirect URI for the OAuth flow, derived from the callback port
    pub fn redirect_uri(&self) -> String {
        format!("http://localhost:{}", self.oauth_callback_port)
    }
}
