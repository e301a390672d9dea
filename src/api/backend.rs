//! Hosted CRUD backend client.
//!
//! The backend persists activity history, feedback, chat exchanges and the
//! cross-user leaderboard. Writes from the engine are strictly
//! fire-and-forget: a failure is logged and swallowed, and never blocks or
//! rolls back an in-memory state transition. The only synchronous reads
//! happen at session start (seed data) and in the leaderboard view.

use crate::libs::config::{BackendConfig, Config};
use crate::libs::error::{UpstreamError, ValidationError};
use crate::libs::stats::ActivityKind;
use crate::msg_debug;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const SERVICE: &str = "backend";

/// A persisted activity row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRow {
    pub user_id: String,
    pub activity_type: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

/// Feedback categories accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Bug,
    Feature,
    General,
    Praise,
}

impl FeedbackCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackCategory::Bug => "Bug report",
            FeedbackCategory::Feature => "Feature request",
            FeedbackCategory::General => "General",
            FeedbackCategory::Praise => "Praise",
        }
    }

    pub fn all() -> &'static [FeedbackCategory] {
        &[
            FeedbackCategory::Bug,
            FeedbackCategory::Feature,
            FeedbackCategory::General,
            FeedbackCategory::Praise,
        ]
    }
}

/// A validated feedback submission.
#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub rating: u8,
    pub category: FeedbackCategory,
    pub message: String,
}

impl Feedback {
    /// Validates the submission; nothing is sent when validation fails.
    pub fn new(rating: u8, category: FeedbackCategory, message: &str) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange(rating));
        }
        if message.trim().is_empty() {
            return Err(ValidationError::EmptyFeedback);
        }
        Ok(Self {
            rating,
            category,
            message: message.trim().to_string(),
        })
    }
}

/// One leaderboard row: a user and their earned points.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub points: u32,
}

/// Client for the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    api_url: String,
    auth_token: String,
    user_id: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
            user_id: config.user_id.clone(),
        }
    }

    /// Builds a client when the backend module is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.backend.as_ref().map(Self::new)
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Forwards a completed activity, fire-and-forget. Failures are logged
    /// and swallowed.
    pub async fn record_activity(&self, kind: ActivityKind, score: Option<f64>, duration: Option<i64>) {
        let row = ActivityRow {
            user_id: self.user_id.clone(),
            activity_type: kind.as_str().to_string(),
            created_at: Utc::now(),
            score,
            duration,
        };

        if let Err(e) = self.post("user_activities", &row).await {
            tracing::warn!("activity sync failed: {}", e);
        }
    }

    /// Forwards a chat exchange, fire-and-forget.
    pub async fn record_chat(&self, message: &str, response: &str) {
        let row = serde_json::json!({
            "user_id": self.user_id,
            "message": message,
            "response": response,
            "message_type": "general",
            "created_at": Utc::now(),
        });

        if let Err(e) = self.post("ai_chat_history", &row).await {
            tracing::warn!("chat history sync failed: {}", e);
        }
    }

    /// Submits feedback. Unlike the engine's writes the caller gets to see
    /// the failure, but it is still just reported, never fatal.
    pub async fn submit_feedback(&self, feedback: &Feedback) -> Result<(), UpstreamError> {
        let row = serde_json::json!({
            "user_id": self.user_id,
            "rating": feedback.rating,
            "category": feedback.category,
            "message": feedback.message,
            "created_at": Utc::now(),
        });

        self.post("user_feedback", &row).await
    }

    /// Fetches the leaderboard rankings.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, UpstreamError> {
        let url = format!("{}/leaderboard", self.api_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.auth_token)
            .send()
            .await
            .map_err(|source| UpstreamError::Request { service: SERVICE, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { service: SERVICE, status });
        }

        response.json().await.map_err(|e| UpstreamError::Payload {
            service: SERVICE,
            message: e.to_string(),
        })
    }

    async fn post<T: Serialize + ?Sized>(&self, table: &str, body: &T) -> Result<(), UpstreamError> {
        let url = format!("{}/{}", self.api_url, table);
        msg_debug!(format!("POST {}", url));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.auth_token)
            .json(body)
            .send()
            .await
            .map_err(|source| UpstreamError::Request { service: SERVICE, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { service: SERVICE, status });
        }

        Ok(())
    }
}
