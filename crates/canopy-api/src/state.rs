//! # Application State and Configuration
//!
//! Shared state for the Axum application: the content store handle and the
//! environment-driven service configuration.

use std::sync::Arc;

use canopy_store::ContentStore;

/// Default port the service binds when `CANOPY_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Default allowed CORS origin when `CANOPY_ALLOWED_ORIGIN` is unset.
/// Matches the local development frontend.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Service configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to bind.
    pub port: u16,
    /// The single origin permitted by the CORS policy.
    pub allowed_origin: String,
}

impl AppConfig {
    /// Load configuration from `CANOPY_PORT` and `CANOPY_ALLOWED_ORIGIN`,
    /// falling back to defaults for absent or unparseable values.
    pub fn from_env() -> Self {
        let port = std::env::var("CANOPY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let allowed_origin = std::env::var("CANOPY_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());
        Self {
            port,
            allowed_origin,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

/// Shared application state passed to all route handlers.
///
/// The store is constructed once at process start and shared by handle;
/// tests build independent `AppState`s with their own stores.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The process-wide content-addressed record store.
    pub store: Arc<ContentStore>,
    /// Service configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create application state with default configuration and an empty store.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create application state with the given configuration and an empty store.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            store: Arc::new(ContentStore::new()),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
