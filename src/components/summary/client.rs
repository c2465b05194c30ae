use crate::error::{summary_api_error, BotResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::models::{SummaryRequestPayload, SummaryResponse};
use super::prompt;

/// Base URL for the chat-completions API
const OPENAI_API_URL: &str = "https://api.openai.com/v1";
/// Default model for summary generation
const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Upper bound on the generated narrative
const DEFAULT_MAX_TOKENS: u32 = 800;
/// Some creative range while keeping the narrative coherent
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Shown when the model answers without usable content
pub const EMPTY_SUMMARY_FALLBACK: &str = "Unable to generate summary at this time.";

/// Chat-completions request body
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

/// One chat message
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat-completions reply; only the first choice is consumed
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the summary generation endpoint
pub struct SummaryClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl SummaryClient {
    /// Create a new client with the default model
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: OPENAI_API_URL.to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a new client with a custom model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (for testing)
    #[cfg(test)]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Turn a normalized payload into a narrative summary.
    ///
    /// A reply without usable content yields the fallback text rather than
    /// an error; a failed request is an error for the caller to soften.
    pub async fn generate_summary(
        &self,
        payload: &SummaryRequestPayload,
    ) -> BotResult<SummaryResponse> {
        let user_prompt = prompt::build_user_prompt(payload)?;

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt::SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        };

        debug!(
            "Requesting summary for {} events over the {}",
            payload.preprocessed_data.len(),
            payload.time_frame
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| summary_api_error(&format!("Failed to request summary: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(summary_api_error(&format!(
                "Failed to generate summary: HTTP {} - {}",
                status, error_body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| summary_api_error(&format!("Failed to parse summary response: {}", e)))?;

        let summary = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| {
                warn!("Summary response contained no content");
                EMPTY_SUMMARY_FALLBACK.to_string()
            });

        info!("Summary generated");

        Ok(SummaryResponse { summary })
    }
}
