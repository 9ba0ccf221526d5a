//! # Record Routes
//!
//! The content-addressing surface of the service:
//!
//! - `POST /v1/records` — submit a record, receive its content identifier.
//! - `GET  /v1/records/{identifier}` — retrieve a record by identifier.
//!
//! Handlers hold no business logic beyond translation: the store decides
//! identity and presence, the handlers map its contract onto HTTP.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

/// Build the records router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/records", post(store_record))
        .route("/v1/records/{identifier}", get(retrieve_record))
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Request to store a structured record.
#[derive(Debug, Deserialize, Serialize)]
pub struct StoreRecordRequest {
    /// The record to store: any JSON structure (mappings, sequences,
    /// strings, numbers, booleans, null).
    pub record: Value,
}

/// Response carrying the content identifier of a stored record.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreRecordResponse {
    /// Lowercase hex SHA-256 digest of the record's canonical form.
    pub identifier: String,
}

/// Response carrying a retrieved record alongside its identifier.
#[derive(Debug, Serialize, Deserialize)]
pub struct RetrieveRecordResponse {
    /// The identifier the record was requested by, echoed back.
    pub identifier: String,
    /// The stored record, structurally equal to what was submitted.
    pub record: Value,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /v1/records — store a record and return its content identifier.
///
/// Identical records (up to mapping key order) yield the same identifier;
/// resubmission is idempotent. Canonicalization failures surface as a
/// 500-class response with the canonicalizer's message.
async fn store_record(
    State(state): State<AppState>,
    Json(req): Json<StoreRecordRequest>,
) -> Result<(StatusCode, Json<StoreRecordResponse>), AppError> {
    let digest = state.store.add(req.record)?;
    let identifier = digest.to_hex();
    tracing::debug!(%identifier, "record stored");
    Ok((StatusCode::CREATED, Json(StoreRecordResponse { identifier })))
}

/// GET /v1/records/{identifier} — retrieve a record by content identifier.
///
/// A miss is a 404, whatever the shape of the identifier: the store treats
/// malformed digests the same as well-formed absent ones.
async fn retrieve_record(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<RetrieveRecordResponse>, AppError> {
    match state.store.get(&identifier) {
        Some(record) => Ok(Json(RetrieveRecordResponse { identifier, record })),
        None => Err(AppError::NotFound(format!(
            "no record stored under identifier {identifier}"
        ))),
    }
}
