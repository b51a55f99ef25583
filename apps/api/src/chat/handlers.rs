//! The stateless chat endpoint.
//!
//! Wire contract kept for legacy clients: any malformed body or an empty
//! message list answers 500 `{"error":"Failed to process chat request"}`
//! rather than a 4xx.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::Content;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<IncomingMessage>,
}

#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub role: String,
    pub content: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Ok(Json(request)) = payload else {
        return Err(AppError::ChatRequest);
    };
    let Some(latest) = request.messages.last() else {
        return Err(AppError::ChatRequest);
    };
    let latest_user_text = latest.content.clone();

    let (system, contents) = build_llm_input(&request.messages);
    let reply = state
        .responder
        .respond(system.as_deref(), &contents, &latest_user_text)
        .await;

    Ok(Json(ChatResponse {
        role: "assistant".to_string(),
        content: reply,
    }))
}

/// Maps wire messages onto the Gemini input shape: system turns join into one
/// system instruction, user/assistant turns become user/model contents, and
/// anything else is dropped.
fn build_llm_input(messages: &[IncomingMessage]) -> (Option<String>, Vec<Content>) {
    let mut system_parts = Vec::new();
    let mut contents = Vec::new();
    for message in messages {
        match message.role.as_str() {
            "system" => system_parts.push(message.content.clone()),
            "user" => contents.push(Content::user(&message.content)),
            "assistant" => contents.push(Content::model(&message.content)),
            _ => {}
        }
    }
    let system = (!system_parts.is_empty()).then(|| system_parts.join("\n\n"));
    (system, contents)
}
