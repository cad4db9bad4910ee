// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::error;

use crate::challenge::parser::ParseError;
use crate::services::openai::GatewayError;

use super::validation::ValidationResult;

/// Everything that can go wrong while producing one AI artifact.
#[derive(Debug, thiserror::Error)]
pub enum ChallengeError {
    #[error("input validation failed")]
    Validation(ValidationResult),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The sole externally visible failure shape. Built once per failure, always
/// fully populated.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub message: String,
    pub error: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

/// Pure total mapping from the error taxonomy to an HTTP status and envelope.
pub fn classify(err: &ChallengeError) -> (StatusCode, ErrorEnvelope) {
    match err {
        ChallengeError::Validation(result) => (
            StatusCode::BAD_REQUEST,
            ErrorEnvelope {
                message: "Input validation failed".to_string(),
                error: "One or more resume fields are missing or too long".to_string(),
                status: "BAD_REQUEST".to_string(),
                retryable: None,
                suggestion: "Correct the listed fields and resubmit".to_string(),
                error_code: None,
                errors: Some(result.field_map()),
            },
        ),

        ChallengeError::Gateway(GatewayError::Timeout) => (
            StatusCode::REQUEST_TIMEOUT,
            envelope(
                "The AI service took too long to respond",
                "The connection to the model provider timed out",
                "REQUEST_TIMEOUT",
                true,
                "Check your network and try again shortly",
                Some("SOCKET_TIMEOUT"),
            ),
        ),

        ChallengeError::Gateway(GatewayError::Http { status, message }) => match *status {
            401 => (
                StatusCode::UNAUTHORIZED,
                envelope(
                    "AI service authentication failed",
                    "The API key is invalid or expired",
                    "UNAUTHORIZED",
                    false,
                    "Verify the configured API key and try again",
                    Some("INVALID_API_KEY"),
                ),
            ),
            429 => (
                StatusCode::TOO_MANY_REQUESTS,
                envelope(
                    "AI service request limit exceeded",
                    "Too many requests were sent to the model provider",
                    "TOO_MANY_REQUESTS",
                    true,
                    "Wait a moment and try again",
                    Some("RATE_LIMIT_EXCEEDED"),
                ),
            ),
            s if s >= 500 => (
                StatusCode::SERVICE_UNAVAILABLE,
                envelope(
                    "The AI service is temporarily unavailable",
                    "The model provider reported a server error",
                    "SERVICE_UNAVAILABLE",
                    true,
                    "Try again shortly",
                    Some("OPENAI_SERVER_ERROR"),
                ),
            ),
            _ => (
                StatusCode::BAD_REQUEST,
                envelope(
                    "The AI service rejected the request",
                    message,
                    "BAD_REQUEST",
                    false,
                    "Check the request contents and try again",
                    Some("OPENAI_REQUEST_ERROR"),
                ),
            ),
        },

        ChallengeError::Gateway(GatewayError::Unknown(message)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            envelope(
                "AI service processing failed",
                message,
                "SERVICE_UNAVAILABLE",
                true,
                "Try again shortly",
                None,
            ),
        ),

        ChallengeError::Parse(ParseError::Malformed(detail)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            envelope(
                "The AI response could not be processed",
                detail,
                "UNPROCESSABLE_ENTITY",
                true,
                "Try again shortly",
                None,
            ),
        ),

        ChallengeError::Parse(parse) => (
            StatusCode::SERVICE_UNAVAILABLE,
            envelope(
                "The AI service returned an incomplete response",
                &parse.to_string(),
                "SERVICE_UNAVAILABLE",
                true,
                "Try again shortly",
                None,
            ),
        ),
    }
}

fn envelope(
    message: &str,
    error: &str,
    status: &str,
    retryable: bool,
    suggestion: &str,
    error_code: Option<&str>,
) -> ErrorEnvelope {
    ErrorEnvelope {
        message: message.to_string(),
        error: error.to_string(),
        status: status.to_string(),
        retryable: Some(retryable),
        suggestion: suggestion.to_string(),
        error_code: error_code.map(str::to_string),
        errors: None,
    }
}

impl IntoResponse for ChallengeError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = classify(&self);
        error!(status = %status, error = %self, "Challenge request failed");
        (status, Json(body)).into_response()
    }
}
