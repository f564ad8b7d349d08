//! End-to-end HTTP flow over the in-memory store

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use qa_server::{router, AppState};

fn app() -> Router {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("qa_server=debug")
        .with_test_writer()
        .try_init();
    router(AppState::in_memory(), Duration::from_secs(5))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
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
async fn question_answer_lifecycle() {
    let app = app();

    let (status, question) = call(
        &app,
        "POST",
        "/api/v1/questions/",
        Some(json!({ "text": "Q1?" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(question["id"].as_i64().unwrap() > 0);
    assert_eq!(question["text"], "Q1?");
    assert!(question["created_at"].is_string());
    let id = question["id"].as_i64().unwrap();

    let question_uri = format!("/api/v1/questions/{id}");
    let (status, fetched) = call(&app, "GET", &question_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["text"], "Q1?");
    assert_eq!(fetched["answers"], json!([]));

    let (status, answer) = call(
        &app,
        "POST",
        &format!("/api/v1/questions/{id}/answers/"),
        Some(json!({ "user_id": "u1", "text": "A1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(answer["question_id"].as_i64(), Some(id));
    assert_eq!(answer["user_id"], "u1");

    let (status, fetched) = call(&app, "GET", &question_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let answers = fetched["answers"].as_array().unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0]["text"], "A1");

    let (status, body) = call(&app, "DELETE", &question_uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = call(&app, "GET", &question_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Answers went with the question
    let (status, _) = call(&app, "GET", &format!("/api/v1/answers/{}", answer["id"]), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn questions_listed_newest_first() {
    let app = app();
    for text in ["one", "two", "three"] {
        call(&app, "POST", "/api/v1/questions/", Some(json!({ "text": text }))).await;
    }

    let (status, list) = call(&app, "GET", "/api/v1/questions/", None).await;
    assert_eq!(status, StatusCode::OK);
    let texts: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["three", "two", "one"]);
}

#[tokio::test]
async fn answers_keep_creation_order() {
    let app = app();
    let (_, question) = call(&app, "POST", "/api/v1/questions/", Some(json!({ "text": "Q" }))).await;
    let id = question["id"].as_i64().unwrap();

    for n in 1..=4 {
        let (status, _) = call(
            &app,
            "POST",
            &format!("/api/v1/questions/{id}/answers/"),
            Some(json!({ "user_id": format!("u{n}"), "text": format!("A{n}") })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, fetched) = call(&app, "GET", &format!("/api/v1/questions/{id}"), None).await;
    let texts: Vec<&str> = fetched["answers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["A1", "A2", "A3", "A4"]);
}

#[tokio::test]
async fn oversized_question_text_rejected() {
    let text = "x".repeat(1001);
    let (status, body) = call(&app(), "POST", "/api/v1/questions/", Some(json!({ "text": text }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}
