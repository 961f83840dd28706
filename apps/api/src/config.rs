use anyhow::{Context, Result};
use tracing::warn;

/// Application configuration loaded from environment variables.
/// Only `API_KEY` gates functionality; everything else has a sane default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API credential. `None` means the server boots but every
    /// AI-backed endpoint answers 503 until the key is provided.
    pub api_key: Option<String>,
    pub port: u16,
    pub cors_origin: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_key = std::env::var("API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        if api_key.is_none() {
            warn!("API_KEY is not set. AI endpoints will return 503 until configured.");
        }

        Ok(Config {
            api_key,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            cors_origin: std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
