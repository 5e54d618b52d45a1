//! Unified error types for the marketplace
//!
//! This module defines error types for each layer:
//! - `ConfigError`: failures loading the static JSON configuration
//! - `AnalyticsError`: failures delivering an analytics event
//! - `AppError`: HTTP-facing errors returned by handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Config document load errors.
///
/// Callers do not branch on the variant; every load failure ends up as an
/// empty data set. The variants exist for the logs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Embedded data error: {0}")]
    Embedded(String),
}

/// Analytics sink errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Collector rejected event: {status} - {message}")]
    Rejected { status: u16, message: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
