//! Error handling for the Smart Farming Assistant
//!
//! Upstream provider failures are propagated to the caller as structured
//! error responses; nothing in the composition chain retries or recovers
//! (the chat client's fallback string is handled inside the client itself).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // External service errors
    #[error("Weather API returned {status}: {body}")]
    WeatherApi {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Chat API returned {status}: {body}")]
    ChatApi {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::WeatherApi { status, body } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "WEATHER_API_ERROR".to_string(),
                    message: format!("Weather provider returned {}: {}", status, body),
                },
            ),
            AppError::ChatApi { status, body } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "CHAT_API_ERROR".to_string(),
                    message: format!("Chat provider returned {}: {}", status, body),
                },
            ),
            AppError::Upstream(err) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "UPSTREAM_REQUEST_FAILED".to_string(),
                    message: format!("Upstream request failed: {}", err),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
