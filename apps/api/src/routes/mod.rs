pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{catalog, chat, dashboard, session};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat API
        .route("/api/v1/chat", post(chat::handlers::handle_chat))
        // Catalog API
        .route("/api/v1/careers", get(catalog::handlers::handle_list_careers))
        .route(
            "/api/v1/careers/search",
            get(catalog::handlers::handle_search_careers),
        )
        .route(
            "/api/v1/careers/:id",
            get(catalog::handlers::handle_get_career),
        )
        .route(
            "/api/v1/careers/:id/related",
            get(catalog::handlers::handle_related_careers),
        )
        .route(
            "/api/v1/careers/:id/education",
            get(catalog::handlers::handle_career_education),
        )
        .route(
            "/api/v1/education/search",
            get(catalog::handlers::handle_search_education),
        )
        .route(
            "/api/v1/education/:id",
            get(catalog::handlers::handle_get_education),
        )
        .route(
            "/api/v1/scholarships",
            get(catalog::handlers::handle_list_scholarships),
        )
        .route(
            "/api/v1/scholarships/search",
            get(catalog::handlers::handle_search_scholarships),
        )
        .route(
            "/api/v1/scholarships/:id",
            get(catalog::handlers::handle_get_scholarship),
        )
        .route(
            "/api/v1/recommendations",
            post(catalog::handlers::handle_recommendations),
        )
        // Session API
        .route(
            "/api/v1/sessions",
            post(session::handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            get(session::handlers::handle_get_session)
                .delete(session::handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/messages",
            post(session::handlers::handle_send_message),
        )
        .route(
            "/api/v1/sessions/:id/profile",
            put(session::handlers::handle_update_profile),
        )
        .route(
            "/api/v1/sessions/:id/recommendations",
            get(session::handlers::handle_session_recommendations),
        )
        .route(
            "/api/v1/sessions/:id/reset",
            post(session::handlers::handle_reset_session),
        )
        // Dashboard API
        .route("/api/v1/dashboard", get(dashboard::dashboard_handler))
        .with_state(state)
}
