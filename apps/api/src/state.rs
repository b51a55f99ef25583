use std::sync::Arc;

use crate::chat::responder::ChatResponder;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable chat backend. Gemini-backed when GEMINI_API_KEY is set,
    /// rule-based otherwise. Selected once at startup.
    pub responder: Arc<dyn ChatResponder>,
    pub sessions: SessionStore,
}
