mod catalog;
mod chat;
mod config;
mod dashboard;
mod errors;
mod llm_client;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::responder::{ChatResponder, GeminiResponder, RuleBasedResponder};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every variable is optional, see config.rs)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Select the chat backend: Gemini when a key is configured, rule-based otherwise
    let responder: Arc<dyn ChatResponder> = match &config.gemini_api_key {
        Some(key) => {
            info!("Chat backend: Gemini (model: {})", llm_client::MODEL);
            Arc::new(GeminiResponder::new(LlmClient::new(key.clone())))
        }
        None => {
            info!("No Gemini API key found, using rule-based responses");
            Arc::new(RuleBasedResponder)
        }
    };

    // Load persisted sessions
    let sessions = SessionStore::open(&config.data_dir).await?;
    info!("Session store ready ({} sessions loaded)", sessions.len().await);

    // Build app state
    let state = AppState {
        responder,
        sessions,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
