//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps core errors to HTTP status codes and JSON error response bodies
//! with a machine-readable code and a human-readable message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use canopy_core::EncodingError;

/// Structured JSON error response body.
///
/// All error responses use this format for consistency across the API
/// surface.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "ENCODING_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// No record stored under the presented identifier (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The submitted record could not be canonicalized (500). The
    /// canonicalizer's message is returned to the caller — an encoding
    /// failure is an explanatory outcome, never silently dropped.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Internal server error (500). Message is logged but not returned
    /// to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Encoding(_) => (StatusCode::INTERNAL_SERVER_ERROR, "ENCODING_ERROR"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Internal details never reach the client; encoding failures do,
        // since the message tells the caller what was wrong with the record.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::Encoding(_) => tracing::warn!(error = %self, "record rejected by canonicalizer"),
            Self::NotFound(_) => {}
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}
