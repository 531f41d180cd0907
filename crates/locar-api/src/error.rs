//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps [`LookupError`] kinds to HTTP status codes and a single JSON
//! envelope. Provider failure chains are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use locar_lookup::{LookupError, LookupErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (`INVALID_SHAPE`, `NOT_FOUND`,
    /// `PROVIDER_UNAVAILABLE`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Identifier has the wrong digit count (422).
    #[error("{0}")]
    InvalidShape(String),

    /// The authoritative provider has no record (404).
    #[error("{0}")]
    NotFound(String),

    /// No provider could answer (503).
    #[error("{0}")]
    ProviderUnavailable(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidShape(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_SHAPE"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::ProviderUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "PROVIDER_UNAVAILABLE")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        match err.kind() {
            LookupErrorKind::InvalidShape => Self::InvalidShape(err.to_string()),
            LookupErrorKind::NotFound => Self::NotFound(err.to_string()),
            LookupErrorKind::ProviderUnavailable => {
                let causes: Vec<String> = err.failures().iter().map(|f| f.to_string()).collect();
                tracing::warn!(error = %err, ?causes, "lookup providers unavailable");
                Self::ProviderUnavailable(err.to_string())
            }
        }
    }
}
