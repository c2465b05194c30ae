use crate::config::Config;
use crate::error::{google_auth_error, BotResult};
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

/// Consent endpoint for the installed-application flow
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
/// Token exchange endpoint
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// Read-only calendar scope
const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

/// Token endpoint reply; only the access token is consumed
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Run the interactive authorization flow and return a bearer token.
///
/// Opens the system browser on the Google consent page, waits for the
/// redirect on the local callback port, and exchanges the authorization code
/// for an access token. The token is short-lived and held in memory for this
/// run only; nothing is written anywhere and no refresh token is requested.
pub async fn acquire_access_token(config: &Config) -> BotResult<String> {
    let client_id = config.google_client_id.clone();
    let client_secret = config.google_client_secret.clone();
    let redirect_uri = config.redirect_uri();
    let port = config.oauth_callback_port;

    // Generate random state for security
    let state = uuid::Uuid::new_v4().to_string();

    // Construct authorization URL
    let auth_url = format!(
        "{}?\
        client_id={}&\
        redirect_uri={}&\
        response_type=code&\
        prompt=consent&\
        scope={}&\
        state={}",
        GOOGLE_AUTH_URL, client_id, redirect_uri, CALENDAR_SCOPE, state
    );

    // Open browser for authorization
    info!("Opening browser for Google Calendar authorization");
    if webbrowser::open(&auth_url).is_err() {
        warn!("Could not open a browser, visit this URL manually: {}", auth_url);
    }

    let code = wait_for_authorization_code(port, state).await?;

    // Exchange code for an access token
    let client = reqwest::Client::new();
    let response = client
        .post(GOOGLE_TOKEN_URL)
        .form(&[
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code".to_string()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        let error_text = response.text().await?;
        return Err(google_auth_error(&format!(
            "Failed to get token: {}",
            error_text
        )));
    }

    let token: TokenResponse = response.json().await?;
    info!("Authorization complete");

    Ok(token.access_token)
}

/// Serve a single request on the callback port and extract the code
async fn wait_for_authorization_code(port: u16, expected_state: String) -> BotResult<String> {
    tokio::task::spawn_blocking(move || {
        let server = tiny_http::Server::http(format!("0.0.0.0:{}", port)).map_err(|e| {
            google_auth_error(&format!(
                "Failed to start callback server on port {}: {}",
                port, e
            ))
        })?;
        info!("Waiting for authorization callback on port {}", port);

        let request = server.recv()?;
        let callback = parse_callback_url(request.url(), &expected_state);

        // Answer the browser before surfacing any failure locally
        let message = match &callback {
            Ok(_) => "Authorization successful! You can close this window.",
            Err(_) => "Authorization failed. You can close this window.",
        };
        request.respond(tiny_http::Response::from_string(message))?;

        callback
    })
    .await
    .map_err(|e| google_auth_error(&format!("Callback task failed: {}", e)))?
}

/// Extract and validate the authorization code from the callback URL
fn parse_callback_url(raw_url: &str, expected_state: &str) -> BotResult<String> {
    // tiny_http hands back a path-relative URL; give it a base so it parses
    let url = Url::parse(&format!("http://localhost{}", raw_url))
        .map_err(|e| google_auth_error(&format!("Failed to parse callback URL: {}", e)))?;

    let mut code = None;
    let mut state = None;
    let mut error = None;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(google_auth_error(&format!(
            "Authorization denied: {}",
            error
        )));
    }

    if state.as_deref() != Some(expected_state) {
        return Err(google_auth_error(
            "State mismatch in authorization callback",
        ));
    }

    code.ok_or_else(|| google_auth_error("No authorization code found in callback"))
}
