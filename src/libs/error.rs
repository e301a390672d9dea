//! Core error taxonomy.
//!
//! Two error classes cross module boundaries: [`ValidationError`] for bad
//! user input (surfaced synchronously, nothing mutated) and
//! [`UpstreamError`] for remote collaborator failures (always caught at the
//! api boundary, never propagated into the timer core). Periodic tick
//! functions are infallible by design - invariant violations clamp instead
//! of raising, so a bad value can never cancel future scheduling.

use thiserror::Error;

/// Validation failures for user-supplied input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("reminder title must not be empty")]
    EmptyTitle,
    #[error("reminder message must not be empty")]
    EmptyMessage,
    #[error("countdown duration must be greater than zero")]
    ZeroDuration,
    #[error("feedback message must not be empty")]
    EmptyFeedback,
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// Failure of a remote collaborator (assistant proxy or hosted backend).
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("assistant API key is not configured")]
    MissingApiKey,

    #[error("{service} is not configured")]
    NotConfigured { service: &'static str },

    #[error("request to {service} failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned status {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("unexpected response from {service}: {message}")]
    Payload { service: &'static str, message: String },
}
