//! HTTP handlers for the catalog: listings, lookups, search, and
//! recommendations.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use crate::catalog::records::{
    career_by_id, education_by_id, scholarship_by_id, Career, EducationProgram, Scholarship,
    CAREERS, SCHOLARSHIPS,
};
use crate::catalog::search::{self, DEFAULT_RECOMMENDATION_LIMIT, DEFAULT_SEARCH_LIMIT};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ScholarshipParams {
    pub field: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub limit: Option<usize>,
}

/// GET /api/v1/careers
pub async fn handle_list_careers() -> Json<&'static [Career]> {
    Json(&CAREERS[..])
}

/// GET /api/v1/careers/search?q=...&limit=...
pub async fn handle_search_careers(
    Query(params): Query<SearchParams>,
) -> Json<Vec<&'static Career>> {
    Json(search::search_careers(
        &params.q,
        params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
    ))
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    Path(id): Path<String>,
) -> Result<Json<&'static Career>, AppError> {
    career_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career '{id}' not found")))
}

/// GET /api/v1/careers/:id/related?limit=...
pub async fn handle_related_careers(
    Path(id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<&'static Career>>, AppError> {
    if career_by_id(&id).is_none() {
        return Err(AppError::NotFound(format!("Career '{id}' not found")));
    }
    Ok(Json(search::related_careers(
        &id,
        params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
    )))
}

/// GET /api/v1/careers/:id/education
pub async fn handle_career_education(
    Path(id): Path<String>,
) -> Result<Json<Vec<&'static EducationProgram>>, AppError> {
    if career_by_id(&id).is_none() {
        return Err(AppError::NotFound(format!("Career '{id}' not found")));
    }
    Ok(Json(search::education_for_career(&id)))
}

/// GET /api/v1/education/search?q=...&limit=...
pub async fn handle_search_education(
    Query(params): Query<SearchParams>,
) -> Json<Vec<&'static EducationProgram>> {
    Json(search::search_education(
        &params.q,
        params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
    ))
}

/// GET /api/v1/education/:id
pub async fn handle_get_education(
    Path(id): Path<String>,
) -> Result<Json<&'static EducationProgram>, AppError> {
    education_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Education program '{id}' not found")))
}

/// GET /api/v1/scholarships?field=...
/// Without `field`, returns the whole table; with it, filters by field of
/// study.
pub async fn handle_list_scholarships(
    Query(params): Query<ScholarshipParams>,
) -> Json<Vec<&'static Scholarship>> {
    let scholarships = match &params.field {
        Some(field) => search::scholarships_for_field(field),
        None => SCHOLARSHIPS.iter().collect(),
    };
    Json(scholarships)
}

/// GET /api/v1/scholarships/search?q=...&limit=...
pub async fn handle_search_scholarships(
    Query(params): Query<SearchParams>,
) -> Json<Vec<&'static Scholarship>> {
    Json(search::search_scholarships(
        &params.q,
        params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
    ))
}

/// GET /api/v1/scholarships/:id
pub async fn handle_get_scholarship(
    Path(id): Path<String>,
) -> Result<Json<&'static Scholarship>, AppError> {
    scholarship_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Scholarship '{id}' not found")))
}

/// POST /api/v1/recommendations
/// Stateless recommendations from explicit interests and skills; the
/// session variant derives these from the stored profile instead.
pub async fn handle_recommendations(
    Json(request): Json<RecommendRequest>,
) -> Json<Vec<&'static Career>> {
    Json(search::recommend_careers(
        &request.interests,
        &request.skills,
        request.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::chat::responder::RuleBasedResponder;
    use crate::routes::build_router;
    use crate::session::store::SessionStore;
    use crate::state::AppState;

    async fn test_router() -> (axum::Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let sessions = SessionStore::open(dir.path()).await.unwrap();
        let state = AppState {
            responder: Arc::new(RuleBasedResponder),
            sessions,
        };
        (build_router(state), dir)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn search_endpoint_ranks_and_limits() {
        let (router, _dir) = test_router().await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/careers/search?q=machine%20learning%20data&limit=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"], "data_scientist");
    }

    #[tokio::test]
    async fn career_list_returns_the_full_catalog() {
        let (router, _dir) = test_router().await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/careers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 5);
        assert_eq!(json[0]["id"], "software_engineer");
        assert_eq!(json[0]["entry_paths"][0], "Internships during college");
    }

    #[tokio::test]
    async fn unknown_career_is_a_404_with_error_body() {
        let (router, _dir) = test_router().await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/careers/astronaut")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Career 'astronaut' not found");
    }

    #[tokio::test]
    async fn career_education_lists_matching_programs() {
        let (router, _dir) = test_router().await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/careers/software_engineer/education")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|program| program["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["cs_bachelors", "coding_bootcamp"]);
    }

    #[tokio::test]
    async fn related_careers_endpoint_excludes_the_seed() {
        let (router, _dir) = test_router().await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/careers/software_engineer/related?limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let related = json.as_array().unwrap();
        assert!(related.len() <= 2);
        assert!(related.iter().all(|c| c["id"] != "software_engineer"));
    }

    #[tokio::test]
    async fn scholarships_list_filters_by_field() {
        let (router, _dir) = test_router().await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/scholarships?field=physics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"], "women_in_stem");
    }

    #[tokio::test]
    async fn recommendations_accept_interests_and_skills() {
        let (router, _dir) = test_router().await;
        let body = serde_json::json!({
            "interests": ["technology", "design"],
            "skills": ["empathy"],
            "limit": 2
        });
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/recommendations")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["id"], "ux_designer");
        assert_eq!(json[1]["id"], "software_engineer");
    }
}
