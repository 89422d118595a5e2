pub mod cookies;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browser pages
        .route("/", get(pages::handle_index))
        .route("/rpm", post(pages::handle_submit))
        .route("/reset", post(pages::handle_reset))
        .route("/theme", post(pages::handle_toggle_theme))
        // JSON API
        .route("/api/v1/rpm/vocabulary", get(handlers::handle_vocabulary))
        .route("/api/v1/rpm/generate", post(handlers::handle_generate))
        .route("/api/v1/rpm/render", post(handlers::handle_render))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::test_helpers::{test_router, FakeGenerator};

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app = test_router(Arc::new(FakeGenerator::succeeding()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "rpm");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = test_router(Arc::new(FakeGenerator::succeeding()));
        let response = app
            .oneshot(Request::builder().uri("/api/v1/resumes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
