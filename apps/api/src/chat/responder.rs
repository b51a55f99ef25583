//! Chat responders — pluggable backends behind the chat endpoints.
//!
//! Default: `RuleBasedResponder` (pure-Rust, deterministic, fully testable).
//! With a GEMINI_API_KEY: `GeminiResponder`, which degrades to the rule-based
//! replies on any API failure so chat never errors out.
//!
//! `AppState` holds an `Arc<dyn ChatResponder>`, selected at startup.

use async_trait::async_trait;
use tracing::warn;

use crate::catalog::records::career_by_id;
use crate::chat::replies;
use crate::llm_client::{Content, LlmClient};

// ────────────────────────────────────────────────────────────────────────────
// Trigger tables
// ────────────────────────────────────────────────────────────────────────────

/// Career triggers: a career id paired with the lowercase substrings that
/// select it. Checked before the general intents, so a message like
/// "design help" gets the UX Designer blurb rather than the help menu.
/// Within the table, earlier rows shadow later ones.
const CAREER_TRIGGERS: &[(&str, &[&str])] = &[
    (
        "software_engineer",
        &["software engineer", "programming", "coding", "developer", "computer", "tech"],
    ),
    (
        "data_scientist",
        &["data scientist", "data science", "analytics", "machine learning"],
    ),
    (
        "ux_designer",
        &["ux", "user experience", "ui designer", "design"],
    ),
    (
        "healthcare_administrator",
        &["healthcare", "hospital", "medical administration"],
    ),
    (
        "marketing_manager",
        &["marketing", "advertising", "brand"],
    ),
];

/// General intents, checked in order after the career pass.
const INTENT_TRIGGERS: &[(&[&str], &str)] = &[
    (&["help", "what can you do"], replies::HELP),
    (&["interest", "like", "enjoy"], replies::INTERESTS),
    (&["skill", "good at", "strength"], replies::SKILLS),
    (&["education", "degree", "college", "university"], replies::EDUCATION),
];

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The chat responder trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn ChatResponder>`.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    /// Produces an assistant reply for a conversation.
    ///
    /// `contents` is the full ordered turn list ending with the latest user
    /// message; `latest_user_text` repeats that message for backends that
    /// only look at the last turn. Never fails: backends degrade to the
    /// rule-based replies instead of surfacing errors.
    async fn respond(
        &self,
        system: Option<&str>,
        contents: &[Content],
        latest_user_text: &str,
    ) -> String;

    /// Backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedResponder — deterministic default
// ────────────────────────────────────────────────────────────────────────────

/// Matches ordered substring triggers against the latest user message and
/// answers from the static catalog. No LLM call, no I/O.
pub struct RuleBasedResponder;

impl RuleBasedResponder {
    /// The deterministic reply for a single user message: first matching
    /// career trigger wins, then the first matching intent, then the
    /// clarifying default.
    pub fn reply_to(message: &str) -> String {
        let message = message.to_lowercase();

        for (career_id, triggers) in CAREER_TRIGGERS {
            if triggers.iter().any(|trigger| message.contains(trigger)) {
                if let Some(career) = career_by_id(career_id) {
                    return replies::career_overview(career);
                }
            }
        }

        for (triggers, reply) in INTENT_TRIGGERS {
            if triggers.iter().any(|trigger| message.contains(trigger)) {
                return (*reply).to_string();
            }
        }

        replies::DEFAULT.to_string()
    }
}

#[async_trait]
impl ChatResponder for RuleBasedResponder {
    async fn respond(
        &self,
        _system: Option<&str>,
        _contents: &[Content],
        latest_user_text: &str,
    ) -> String {
        Self::reply_to(latest_user_text)
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiResponder — LLM-backed with rule-based fallback
// ────────────────────────────────────────────────────────────────────────────

/// Gemini-backed responder. Any client error (network, auth, quota, empty
/// output) falls back to the rule-based reply for the latest message.
pub struct GeminiResponder {
    client: LlmClient,
}

impl GeminiResponder {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatResponder for GeminiResponder {
    async fn respond(
        &self,
        system: Option<&str>,
        contents: &[Content],
        latest_user_text: &str,
    ) -> String {
        match self.client.generate(system, contents).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Gemini call failed, serving rule-based reply: {e}");
                RuleBasedResponder::reply_to(latest_user_text)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
