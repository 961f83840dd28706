mod ai;
mod anonymize;
mod audit;
mod company;
mod config;
mod errors;
mod feedback;
mod interview;
mod llm_client;
mod matching;
mod pipeline;
mod routes;
mod state;
mod validation;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentSuite API v{}", env!("CARGO_PKG_VERSION"));

    if config.api_key.is_some() {
        info!("Gemini client configured (model: {})", llm_client::MODEL);
    }

    let state = AppState::new(config.clone());

    let cors = build_cors_layer(&config)?;
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive CORS when CORS_ORIGIN is "*", otherwise pinned to the single
/// configured origin.
fn build_cors_layer(config: &Config) -> Result<CorsLayer> {
    if config.cors_origin == "*" {
        return Ok(CorsLayer::permissive());
    }
    let origin: HeaderValue = config.cors_origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}
