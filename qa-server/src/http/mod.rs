//! HTTP layer
//!
//! Axum router with:
//! - `/api/v1` question and answer routes
//! - `/health`
//! - Request logging via tower-http tracing
//! - JSON error responses, including for unrouted paths

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

pub use error::ApiError;
pub use server::{run_server, ServerConfig, ServerError};

/// Base path for versioned routes
pub const API_PREFIX: &str = "/api/v1";

/// Build the application router with all routes and middleware.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .nest(API_PREFIX, routes::api_router())
        .merge(routes::health::router())
        .fallback(unrouted)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

async fn unrouted() -> ApiError {
    ApiError::Unrouted
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::in_memory(), Duration::from_secs(5))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let (status, body) = send(&app(), "GET", "/api/v1/questions/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Array(vec![]));
    }

    #[tokio::test]
    async fn list_omits_answers() {
        let app = app();
        send(&app, "POST", "/api/v1/questions/", Some(r#"{"text":"Q?"}"#)).await;

        let (_, body) = send(&app, "GET", "/api/v1/questions/", None).await;
        assert_eq!(body[0]["text"], "Q?");
        assert!(body[0].get("answers").is_none());
    }

    #[tokio::test]
    async fn create_question_empty_text_is_400() {
        let (status, body) = send(&app(), "POST", "/api/v1/questions/", Some(r#"{"text":""}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let (status, body) = send(&app(), "POST", "/api/v1/questions/", Some("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "decode_error");
    }

    #[tokio::test]
    async fn body_without_content_type_still_decodes() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/questions/")
            .body(Body::from(r#"{"text":"plain"}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn non_numeric_id_is_unrouted() {
        let (status, _) = send(&app(), "GET", "/api/v1/questions/abc", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app(), "DELETE", "/api/v1/answers/-1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn oversized_id_is_400() {
        let (status, body) = send(&app(), "GET", "/api/v1/answers/99999999999999999999", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_id");
    }

    #[tokio::test]
    async fn unknown_path_is_json_404() {
        let (status, body) = send(&app(), "GET", "/api/v2/questions/", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn answer_for_missing_question_is_404() {
        let (status, body) = send(
            &app(),
            "POST",
            "/api/v1/questions/77/answers/",
            Some(r#"{"user_id":"u1","text":"A1"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "question_not_found");
    }

    #[tokio::test]
    async fn answer_missing_user_id_is_400() {
        let app = app();
        let (_, q) = send(&app, "POST", "/api/v1/questions/", Some(r#"{"text":"Q"}"#)).await;
        let uri = format!("/api/v1/questions/{}/answers/", q["id"]);

        let (status, body) = send(&app, "POST", &uri, Some(r#"{"text":"A"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn get_and_delete_answer() {
        let app = app();
        let (_, q) = send(&app, "POST", "/api/v1/questions/", Some(r#"{"text":"Q"}"#)).await;
        let uri = format!("/api/v1/questions/{}/answers/", q["id"]);
        let (status, a) = send(&app, "POST", &uri, Some(r#"{"user_id":"u1","text":"A"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);

        let answer_uri = format!("/api/v1/answers/{}", a["id"]);
        let (status, fetched) = send(&app, "GET", &answer_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["question"]["id"], q["id"]);
        assert_eq!(fetched["user_id"], "u1");

        let (status, body) = send(&app, "DELETE", &answer_uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, "GET", &answer_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "DELETE", &answer_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn whitespace_only_question_is_accepted() {
        let (status, body) = send(&app(), "POST", "/api/v1/questions/", Some(r#"{"text":"   "}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["text"], "   ");
    }

    #[tokio::test]
    async fn long_user_id_is_accepted() {
        let app = app();
        let (_, q) = send(&app, "POST", "/api/v1/questions/", Some(r#"{"text":"Q"}"#)).await;
        let uri = format!("/api/v1/questions/{}/answers/", q["id"]);
        let user_id = "u".repeat(256);
        let payload = serde_json::json!({ "user_id": user_id, "text": "A" }).to_string();

        let (status, body) = send(&app, "POST", &uri, Some(payload.as_str())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user_id"].as_str(), Some(user_id.as_str()));
    }

    #[tokio::test]
    async fn unsupported_method_with_non_numeric_id_is_unrouted() {
        let app = app();
        for (method, uri) in [
            ("POST", "/api/v1/questions/abc"),
            ("PUT", "/api/v1/answers/xyz"),
            ("GET", "/api/v1/questions/abc/answers/"),
        ] {
            let (status, body) = send(&app, method, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
            assert_eq!(body["error"], "not_found");
        }
    }

    #[tokio::test]
    async fn unsupported_method_with_numeric_id_is_405() {
        let app = app();
        for (method, uri) in [
            ("POST", "/api/v1/questions/1"),
            ("PUT", "/api/v1/answers/1"),
            ("GET", "/api/v1/questions/1/answers/"),
        ] {
            let (status, _) = send(&app, method, uri, None).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        }
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_and_delete_logged_once() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = app();
        let (_, q) = send(&app, "POST", "/api/v1/questions/", Some(r#"{"text":"Q"}"#)).await;
        send(&app, "DELETE", &format!("/api/v1/questions/{}", q["id"]), None).await;

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.matches("question created").count(), 1, "{logs}");
        assert_eq!(logs.matches("question deleted").count(), 1, "{logs}");
    }

    #[tokio::test]
    async fn delete_missing_question_is_404() {
        let (status, _) = send(&app(), "DELETE", "/api/v1/questions/12", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
