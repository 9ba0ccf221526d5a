//! # canopy-api — Axum API Service for the Canopy Record Vault
//!
//! Thin boundary layer over [`canopy_store::ContentStore`]. The store
//! defines the semantics; this crate only routes, validates request
//! framing, and maps the store's contract onto HTTP.
//!
//! ## API Surface
//!
//! | Route                          | Module              | Behavior                    |
//! |--------------------------------|---------------------|-----------------------------|
//! | `POST /v1/records`             | [`routes::records`] | Store, return identifier    |
//! | `GET /v1/records/{identifier}` | [`routes::records`] | Retrieve or 404             |
//! | `GET /health/liveness`         | here                | Process up                  |
//! | `GET /health/readiness`        | here                | Store lock acquirable       |
//!
//! ## Middleware Stack (Tower)
//!
//! ```text
//! TraceLayer → CorsLayer → Handler
//! ```
//!
//! Cross-origin access is restricted to the single configured origin; all
//! methods and headers are permitted for it.

pub mod error;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes are mounted outside the CORS layer — they are for
/// orchestration, not browsers.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origin);

    let api = Router::new()
        .merge(routes::records::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .with_state(state);

    Router::new().merge(health).merge(api)
}

/// Build the single-origin CORS layer.
///
/// All methods and headers are allowed for the configured origin; every
/// other origin gets no CORS headers at all. An unparseable origin leaves
/// cross-origin access fully disabled rather than open.
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            tracing::warn!(
                %allowed_origin,
                "configured CORS origin is not a valid header value; cross-origin access disabled"
            );
            cors
        }
    }
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the store is accessible.
///
/// Both store operations are bounded and in-memory, so the only thing that
/// can wedge is the store lock itself.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let _ = state.store.len();
    (StatusCode::OK, "ready")
}
