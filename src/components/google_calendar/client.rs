use crate::config::Config;
use crate::error::{google_calendar_error, BotResult};
use super::time::TimeFrame;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

/// Base URL for the Calendar v3 API
const CALENDAR_API_URL: &str = "https://www.googleapis.com/calendar/v3";
/// Page size for the events fetch
const MAX_RESULTS: &str = "2500";

/// Client for reading events from the Google Calendar API
pub struct GoogleCalendarClient {
    client: Client,
    api_url: String,
    calendar_id: String,
    access_token: String,
}

impl GoogleCalendarClient {
    /// Create a new client for the configured calendar and a bearer token
    pub fn new(config: &Config, access_token: String) -> Self {
        Self {
            client: Client::new(),
            api_url: CALENDAR_API_URL.to_string(),
            calendar_id: config.google_calendar_id.clone(),
            access_token,
        }
    }

    /// Override the API base URL (for testing)
    #[cfg(test)]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Fetch events within the time frame as loosely-typed JSON records.
    ///
    /// Events are expanded to single instances and ordered by start time, so
    /// the returned list mirrors the calendar's own chronology.
    pub async fn fetch_events(&self, time_frame: TimeFrame) -> BotResult<Vec<Value>> {
        // Build URL with query parameters
        let url_str = format!("{}/calendars/{}/events", self.api_url, self.calendar_id);
        let mut url = Url::parse(&url_str)
            .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("timeMin", &time_frame.time_min())
            .append_pair("timeMax", &time_frame.time_max())
            .append_pair("maxResults", MAX_RESULTS)
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");

        debug!("Fetching calendar events for the {}", time_frame.label());

        // Make API request
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to fetch events: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to fetch events: HTTP {} - {}",
                status, error_body
            )));
        }

        let response_data: Value = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse events response: {}", e)))?;

        // A calendar with nothing in range answers without an items field
        let events = response_data
            .get("items")
            .and_then(|i| i.as_array())
            .cloned()
            .unwrap_or_default();

        info!("Fetched {} calendar events", events.len());

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> Config {
        Config {
            google_client_id: "test-client-id".to_string(),
            google_client_secret: "test-client-secret".to_string(),
            google_calendar_id: "primary".to_string(),
            openai_api_key: None,
            openai_model: None,
            oauth_callback_port: 8080,
        }
    }

    #[tokio::test]
    async fn fetches_events_with_expected_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .and(header("Authorization", "Bearer test-token"))
            .and(query_param("maxResults", "2500"))
            .and(query_param("singleEvents", "true"))
            .and(query_param("orderBy", "startTime"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "summary": "Standup" },
                    { "summary": "Lunch with Sam" }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = GoogleCalendarClient::new(&test_config(), "test-token".to_string())
            .with_api_url(mock_server.uri());

        let events = client
            .fetch_events(TimeFrame::ThirtyDays)
            .await
            .expect("should fetch");

        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0].get("summary").and_then(|s| s.as_str()),
            Some("Standup")
        );

        // The time window bounds ride along as query parameters
        let requests = mock_server
            .received_requests()
            .await
            .expect("requests recorded");
        let keys: Vec<String> = requests[0]
            .url
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .collect();
        assert!(keys.contains(&"timeMin".to_string()));
        assert!(keys.contains(&"timeMax".to_string()));
    }

    #[tokio::test]
    async fn missing_items_yields_empty_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "calendar#events"
            })))
            .mount(&mock_server)
            .await;

        let client = GoogleCalendarClient::new(&test_config(), "test-token".to_string())
            .with_api_url(mock_server.uri());

        let events = client
            .fetch_events(TimeFrame::OneYear)
            .await
            .expect("should fetch");

        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(403).set_body_string("insufficient scope"))
            .mount(&mock_server)
            .await;

        let client = GoogleCalendarClient::new(&test_config(), "test-token".to_string())
            .with_api_url(mock_server.uri());

        let result = client.fetch_events(TimeFrame::AllTime).await;

        assert!(matches!(
            result,
            Err(Error::GoogleCalendar(message)) if message.contains("403")
        ));
    }
}
