//! Service identity and health endpoints.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Service identity.
/// GET /
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Form-16 Extractor API".to_string(),
    })
}

/// Health check endpoint.
/// GET /home
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::routes::{create_router, test_support::json_body};
    use crate::AppState;

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = create_router(AppState::default());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, json_body(response).await)
    }

    #[tokio::test]
    async fn test_home() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Form-16 Extractor API"}));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/home").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "OK", "version": "1.0.0"}));
    }
}
