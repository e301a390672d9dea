//! AI assistant proxy client.
//!
//! Strictly request/response against the configured chat completion proxy:
//! no retry, no streaming. Any failure - missing API key, network error,
//! auth, quota, malformed body - degrades to a fixed fallback message so
//! the user always gets an answer. The API key is read from the
//! environment at call time, which is also when its absence surfaces.

use crate::libs::config::AssistantConfig;
use crate::libs::error::UpstreamError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

const SERVICE: &str = "assistant";

/// Environment variable holding the assistant API key.
pub const API_KEY_ENV: &str = "ERGOMATE_ASSISTANT_API_KEY";

/// Returned whenever the proxy cannot produce a real answer.
pub const FALLBACK_RESPONSE: &str = "Sorry, I cannot respond right now. Please try again later. In the meantime, don't forget \
the 20-20-20 rule: every 20 minutes, look at a point 6 meters away for 20 seconds! 👀";

/// Labels attached to assistant messages for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Suggestion,
    Reminder,
    General,
}

impl MessageType {
    pub fn label(&self) -> &'static str {
        match self {
            MessageType::Suggestion => "Suggestion",
            MessageType::Reminder => "Reminder",
            MessageType::General => "General",
        }
    }
}

#[derive(Debug, Serialize)]
struct AssistantRequest<'a> {
    message: &'a str,
    user_id: &'a str,
    context: &'a str,
}

#[derive(Debug, Deserialize)]
struct AssistantResponse {
    response: String,
}

/// Client for the assistant proxy endpoint.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    client: Client,
    api_url: String,
    user_id: String,
}

impl AssistantClient {
    pub fn new(config: &AssistantConfig, user_id: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            user_id: user_id.to_string(),
        }
    }

    /// Sends a message and returns the assistant's answer, or the fixed
    /// fallback on any failure. Never errors.
    pub async fn ask(&self, message: &str) -> String {
        match self.try_ask(message).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("assistant request failed: {}", e);
                FALLBACK_RESPONSE.to_string()
            }
        }
    }

    async fn try_ask(&self, message: &str) -> Result<String, UpstreamError> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| UpstreamError::MissingApiKey)?;

        let request = AssistantRequest {
            message,
            user_id: &self.user_id,
            context: "health_assistant",
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|source| UpstreamError::Request { service: SERVICE, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { service: SERVICE, status });
        }

        let body: AssistantResponse = response.json().await.map_err(|e| UpstreamError::Payload {
            service: SERVICE,
            message: e.to_string(),
        })?;

        Ok(body.response)
    }
}
