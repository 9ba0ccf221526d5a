//! # canopy-api Entry Point
//!
//! Initializes tracing, loads configuration from the environment,
//! constructs the store, and serves the application.

use canopy_api::{app, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(
        %addr,
        allowed_origin = %config.allowed_origin,
        "starting canopy-api"
    );

    let state = AppState::with_config(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
