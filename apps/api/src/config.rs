use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a sensible default, so the service starts with no
/// environment at all; an absent GEMINI_API_KEY just selects the
/// rule-based chat responder.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the hosted Gemini endpoint. `None` (or blank) means
    /// chat falls back to deterministic rule-based replies.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    /// Directory where session documents are persisted as JSON files.
    pub data_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
