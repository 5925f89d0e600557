use crate::error::Result;
use crate::server::app_state::AppState;
use crate::server::{generate, ping};
use axum::http::StatusCode;
use rl_core::server::default_config::{
    DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT, DEFAULT_SERVER_BACKEND_PROTOCOL,
};
use rl_core::server::routes::print_all_backend_api_paths;
use rl_gemini::client::GeminiClient;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info};

/// Ceiling on a single relay exchange, matching the hosting platform's
/// 30-second execution limit the original endpoint ran under.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Builds the application router over shared state.
///
/// # Behavior
/// - Nests `/generate` and `/ping` under `/api`.
/// - Adds tracing for incoming requests and failures.
/// - Bounds the pre-stream phase of every request with [`REQUEST_TIMEOUT`].
pub fn router(app_state: Arc<AppState>) -> axum::Router {
    let routes_api = axum::Router::new()
        .merge(generate::route::routes())
        .merge(ping::route::routes())
        .with_state(app_state);

    axum::Router::new()
        .nest("/api", routes_api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .fallback(fallback)
}

/// Starts the HTTP server using Axum and the shared Gemini client.
///
/// # Arguments
/// * `gemini` - The provider client shared across routes.
///
/// # Returns
/// * `Result<()>` - Returns `Ok` if the server starts successfully, or an
///   `Error` if binding or serving fails.
#[tokio::main]
pub async fn http_server_backend(gemini: GeminiClient) -> Result<()> {
    let host = env::var("SERVER_BACKEND_HOST").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_HOST));
    let port = env::var("SERVER_BACKEND_PORT").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PORT));
    let protocol = env::var("SERVER_BACKEND_PROTOCOL")
        .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PROTOCOL));

    // Initialize shared application state
    let app_state = Arc::new(AppState::new(gemini));
    let router = router(app_state);

    print_all_backend_api_paths();

    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!("Starting HTTP server on {protocol}://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(err.into());
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use rl_gemini::client::{DEFAULT_MODEL, GeminiClient};
    use tower::ServiceExt;

    fn test_router() -> axum::Router {
        // Dummy credentials; these tests never reach the provider.
        let gemini = GeminiClient::new("test-key", DEFAULT_MODEL, "http://localhost:9");
        router(Arc::new(AppState::new(gemini)))
    }

    async fn body_string(body: Body) -> String {
        let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn ping_returns_pong() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response.into_body()).await.contains("pong"));
    }

    #[tokio::test]
    async fn missing_messages_field_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
        let body = body_string(response.into_body()).await;
        assert!(body.contains("error"));
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unreachable_provider_maps_to_bad_gateway() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"messages":[{"role":"user","content":"Hello"}]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_string(response.into_body()).await;
        assert!(body.contains("error"));
    }
}
