// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use url::Url;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    environment::{auth0::Auth0Endpoints, Auth0Settings, BuildVariant, Environment},
    state::AppState,
};

pub mod environment;
pub mod health;

pub fn router(state: AppState) -> Router {
    let cors = cors_for(&state.environment);

    let v1_routes = Router::new()
        .route("/environment", get(environment::get_environment))
        .route("/environment/auth0", get(environment::get_auth0_endpoints))
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .with_state(state);

    Router::new()
        .nest("/v1", v1_routes)
        .merge(health_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Allow cross-origin reads from the app that Auth0 redirects back to.
fn cors_for(env: &Environment) -> CorsLayer {
    let origin = Url::parse(&env.auth0.callback_url)
        .ok()
        .map(|url| url.origin().ascii_serialization())
        .and_then(|origin| HeaderValue::from_str(&origin).ok());

    match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET]),
        None => {
            tracing::warn!(
                callback_url = %env.auth0.callback_url,
                "No usable origin in callback URL; cross-origin requests disabled"
            );
            CorsLayer::new()
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        environment::get_environment,
        environment::get_auth0_endpoints,
        health::health,
        health::liveness
    ),
    components(
        schemas(
            Environment,
            Auth0Settings,
            Auth0Endpoints,
            BuildVariant,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Environment", description = "Front-end environment configuration"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::default());
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn serves_environment_with_wire_names() {
        let (status, body) = get_json(router(AppState::default()), "/v1/environment").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "production": false,
                "apiServerUrl": "http://127.0.0.1:5000",
                "auth0": {
                    "url": "dev-71rarl-5.us",
                    "audience": "coffee_shop_api",
                    "clientId": "NDZwuEJoygpbJJwk3KEO5F9OBAJbpwzT",
                    "callbackURL": "http://127.0.0.1:8100"
                }
            })
        );
    }

    #[tokio::test]
    async fn serves_auth0_endpoints() {
        let (status, body) = get_json(router(AppState::default()), "/v1/environment/auth0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["issuer"], "https://dev-71rarl-5.us.auth0.com/");
        assert_eq!(body["algorithm"], "RS256");
    }

    #[tokio::test]
    async fn health_routes_respond() {
        let (status, body) = get_json(router(AppState::default()), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = get_json(router(AppState::default()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["variant"], "development");
    }

    #[tokio::test]
    async fn openapi_document_lists_environment_path() {
        let (status, body) = get_json(router(AppState::default()), "/api-doc/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/v1/environment"].is_object());
    }

    #[tokio::test]
    async fn cors_allows_callback_origin() {
        let response = router(AppState::default())
            .oneshot(
                Request::get("/v1/environment")
                    .header(header::ORIGIN, "http://127.0.0.1:8100")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://127.0.0.1:8100"
        );
    }

    #[tokio::test]
    async fn cors_ignores_other_origins() {
        let response = router(AppState::default())
            .oneshot(
                Request::get("/v1/environment")
                    .header(header::ORIGIN, "https://evil.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
