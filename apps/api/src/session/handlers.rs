//! Session lifecycle endpoints: create/fetch/delete, messaging, profile
//! updates, recommendations, and transcript reset.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::handlers::LimitParams;
use crate::catalog::records::Career;
use crate::catalog::search::{recommend_careers, DEFAULT_RECOMMENDATION_LIMIT};
use crate::errors::AppError;
use crate::llm_client::Content;
use crate::session::models::{Message, MessageRole, ProfileUpdate, Session, UserProfile};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// POST /api/v1/sessions
/// The body is optional; `{"name": "..."}` pre-fills the profile and
/// personalizes the seeded greeting.
pub async fn handle_create_session(
    State(state): State<AppState>,
    payload: Option<Json<CreateSessionRequest>>,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let session = state.sessions.create(request.name).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// POST /api/v1/sessions/:id/messages
/// Appends the user message, obtains a reply from the configured responder
/// over the stored history, appends and returns the assistant message.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<Message>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    let user_message = Message::new(MessageRole::User, request.content);
    let (system, mut contents) = llm_input_from_session(&session);
    contents.push(Content::user(&user_message.content));

    let reply = state
        .responder
        .respond(system.as_deref(), &contents, &user_message.content)
        .await;
    let assistant_message = Message::new(MessageRole::Assistant, reply);

    let assistant_reply = assistant_message.clone();
    let updated = state
        .sessions
        .update(id, move |session| {
            session.messages.push(user_message);
            session.messages.push(assistant_message);
        })
        .await?;
    if updated.is_none() {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    Ok(Json(assistant_reply))
}

/// PUT /api/v1/sessions/:id/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>, AppError> {
    if let Some(file_name) = &update.resume_file_name {
        // Resume uploads are acknowledged by name only; the file itself is
        // never transferred or persisted.
        info!("Resume file '{file_name}' noted for session {id}; contents are not stored");
    }
    let updated = state
        .sessions
        .update(id, move |session| update.apply(&mut session.profile))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(updated.profile))
}

/// GET /api/v1/sessions/:id/recommendations?limit=...
pub async fn handle_session_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<&'static Career>>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(recommend_careers(
        &session.profile.interests,
        &session.profile.skills,
        params.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT),
    )))
}

/// POST /api/v1/sessions/:id/reset
/// Clears the transcript back to the initial greeting; the profile survives.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    state
        .sessions
        .update(id, |session| session.reset_messages())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// Builds the responder input from a stored session: the profile context (when
/// complete) and any system turns become the system instruction; user and
/// assistant turns become user/model contents.
fn llm_input_from_session(session: &Session) -> (Option<String>, Vec<Content>) {
    let mut system_parts = Vec::new();
    if session.profile.profile_complete {
        system_parts.push(session.profile.context_message());
    }
    let mut contents = Vec::new();
    for message in &session.messages {
        match message.role {
            MessageRole::System => system_parts.push(message.content.clone()),
            MessageRole::User => contents.push(Content::user(&message.content)),
            MessageRole::Assistant => contents.push(Content::model(&message.content)),
        }
    }
    let system = (!system_parts.is_empty()).then(|| system_parts.join("\n\n"));
    (system, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::chat::responder::RuleBasedResponder;
    use crate::routes::build_router;
    use crate::session::models::EducationBackground;
    use crate::session::store::SessionStore;

    async fn test_router() -> (axum::Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let sessions = SessionStore::open(dir.path()).await.unwrap();
        let state = AppState {
            responder: Arc::new(RuleBasedResponder),
            sessions,
        };
        (build_router(state), dir)
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_session(router: &axum::Router, body: Option<serde_json::Value>) -> serde_json::Value {
        let request = match body {
            Some(body) => json_request("POST", "/api/v1/sessions", body),
            None => Request::builder()
                .method("POST")
                .uri("/api/v1/sessions")
                .body(Body::empty())
                .unwrap(),
        };
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    #[tokio::test]
    async fn creating_a_session_seeds_the_greeting() {
        let (router, _dir) = test_router().await;

        let anonymous = create_session(&router, None).await;
        assert_eq!(anonymous["messages"].as_array().unwrap().len(), 1);
        assert_eq!(anonymous["messages"][0]["role"], "assistant");
        assert!(anonymous["messages"][0]["content"]
            .as_str()
            .unwrap()
            .starts_with("Hi there!"));

        let named =
            create_session(&router, Some(serde_json::json!({ "name": "Maya" }))).await;
        assert!(named["messages"][0]["content"]
            .as_str()
            .unwrap()
            .starts_with("Hi Maya!"));
        assert_eq!(named["profile"]["name"], "Maya");
    }

    #[tokio::test]
    async fn sending_a_message_stores_both_turns() {
        let (router, _dir) = test_router().await;
        let session = create_session(&router, None).await;
        let id = session["id"].as_str().unwrap();

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/messages"),
                serde_json::json!({ "content": "I like computers and technology" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let reply = body_json(response).await;
        assert_eq!(reply["role"], "assistant");
        assert!(reply["content"]
            .as_str()
            .unwrap()
            .contains("Software Engineer"));

        let fetched = router
            .clone()
            .oneshot(get_request(&format!("/api/v1/sessions/{id}")))
            .await
            .unwrap();
        let snapshot = body_json(fetched).await;
        let messages = snapshot["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3, "greeting + user + assistant");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[2]["role"], "assistant");
    }

    #[tokio::test]
    async fn blank_messages_are_rejected() {
        let (router, _dir) = test_router().await;
        let session = create_session(&router, None).await;
        let id = session["id"].as_str().unwrap();

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/messages"),
                serde_json::json!({ "content": "   " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "content cannot be empty");
    }

    #[tokio::test]
    async fn messaging_an_unknown_session_is_a_404() {
        let (router, _dir) = test_router().await;
        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/sessions/{}/messages", Uuid::new_v4()),
                serde_json::json!({ "content": "hello" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn profile_updates_rederive_completeness() {
        let (router, _dir) = test_router().await;
        let session = create_session(&router, None).await;
        let id = session["id"].as_str().unwrap();
        assert_eq!(session["profile"]["profile_complete"], false);

        let response = router
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/sessions/{id}/profile"),
                serde_json::json!({
                    "name": "Maya",
                    "email": "maya@example.com",
                    "interests": ["technology", "design"],
                    "skills": ["empathy"],
                    "education": { "level": "Bachelor's" }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let profile = body_json(response).await;
        assert_eq!(profile["profile_complete"], true);
        assert_eq!(profile["education"]["level"], "Bachelor's");
        assert_eq!(profile["education"]["field"], "");
    }

    #[tokio::test]
    async fn session_recommendations_use_the_stored_profile() {
        let (router, _dir) = test_router().await;
        let session = create_session(&router, None).await;
        let id = session["id"].as_str().unwrap();

        router
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/sessions/{id}/profile"),
                serde_json::json!({
                    "interests": ["technology", "design"],
                    "skills": ["empathy"]
                }),
            ))
            .await
            .unwrap();

        let response = router
            .clone()
            .oneshot(get_request(&format!(
                "/api/v1/sessions/{id}/recommendations?limit=2"
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["id"], "ux_designer");
        assert_eq!(json[1]["id"], "software_engineer");
    }

    #[tokio::test]
    async fn reset_clears_the_transcript_and_keeps_the_profile() {
        let (router, _dir) = test_router().await;
        let session =
            create_session(&router, Some(serde_json::json!({ "name": "Alex" }))).await;
        let id = session["id"].as_str().unwrap();

        router
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/messages"),
                serde_json::json!({ "content": "help" }),
            ))
            .await
            .unwrap();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/v1/sessions/{id}/reset"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert!(json["messages"][0]["content"]
            .as_str()
            .unwrap()
            .starts_with("Hi Alex!"));
        assert_eq!(json["profile"]["name"], "Alex");
    }

    #[tokio::test]
    async fn deleting_a_session_frees_its_id() {
        let (router, _dir) = test_router().await;
        let session = create_session(&router, None).await;
        let id = session["id"].as_str().unwrap();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/sessions/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let fetched = router
            .clone()
            .oneshot(get_request(&format!("/api/v1/sessions/{id}")))
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn llm_input_includes_profile_context_only_when_complete() {
        let mut session = Session::new(Some("Maya".to_string()));
        session.messages.push(Message::new(MessageRole::User, "hello"));
        let (system, contents) = llm_input_from_session(&session);
        assert!(system.is_none());
        assert_eq!(contents.len(), 2, "greeting + user turn");

        session.profile.email = "maya@example.com".to_string();
        session.profile.interests = vec!["technology".to_string()];
        session.profile.skills = vec!["writing".to_string()];
        session.profile.education = EducationBackground {
            level: "Bachelor's".to_string(),
            ..Default::default()
        };
        session.profile.refresh_completeness();

        let (system, _) = llm_input_from_session(&session);
        assert!(system.unwrap().starts_with("[User Profile Context: Name: Maya"));
    }

    #[test]
    fn llm_input_folds_system_turns_into_the_instruction() {
        let mut session = Session::new(None);
        session
            .messages
            .push(Message::new(MessageRole::System, "Answer briefly."));
        session.messages.push(Message::new(MessageRole::User, "hi"));

        let (system, contents) = llm_input_from_session(&session);
        assert_eq!(system.as_deref(), Some("Answer briefly."));
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role, "model");
        assert_eq!(contents[1].role, "user");
    }
}
