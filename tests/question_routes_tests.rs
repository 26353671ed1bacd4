use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;
use trivia_api::db::{NewQuestion, TriviaStorage};

async fn spawn_test_app(tag: &str) -> (Router, TriviaStorage, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "trivia-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = trivia_api::db::spawn(&database_url)
        .await
        .expect("failed to open test database");
    let state = trivia_api::router::TriviaState::new(storage.clone());
    let app = trivia_api::router::trivia_router(state);
    (app, storage, temp_path)
}

async fn seed_question(storage: &TriviaStorage, text: &str, category: i64) -> i64 {
    storage
        .insert_question(&NewQuestion {
            question: text.to_string(),
            answer: "42".to_string(),
            category,
            difficulty: 2,
        })
        .await
        .expect("failed to seed question")
        .id
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

#[tokio::test]
async fn get_questions_returns_page_and_totals() {
    let (app, storage, temp_path) = spawn_test_app("questions-page").await;
    let category = storage.insert_category("Science").await.expect("seed category");
    for i in 0..12 {
        seed_question(&storage, &format!("What is fact number {i}?"), category).await;
    }

    let resp = app
        .clone()
        .oneshot(get_request("/questions"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["questions"].as_array().expect("questions array").len(), 10);
    assert_eq!(body["totalQuestions"], json!(12));
    assert!(body["currentCategory"].is_null());
    assert_eq!(body["categories"][category.to_string()], json!("Science"));

    let resp = app
        .oneshot(get_request("/questions?page=2"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["questions"].as_array().expect("questions array").len(), 2);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn get_questions_on_empty_store_is_404() {
    let (app, _storage, temp_path) = spawn_test_app("questions-empty").await;

    let resp = app
        .oneshot(get_request("/questions"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(404));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn post_question_rejects_missing_or_empty_fields() {
    let (app, storage, temp_path) = spawn_test_app("post-invalid").await;
    let category = storage.insert_category("History").await.expect("seed category");

    let incomplete = json!({ "question": "Who?", "category": category, "difficulty": 1 });
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/questions", incomplete))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(400));

    let blank = json!({
        "question": "   ",
        "answer": "x",
        "category": category,
        "difficulty": 1
    });
    let resp = app
        .oneshot(json_request("POST", "/questions", blank))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let remaining = storage.list_questions().await.expect("list questions");
    assert!(remaining.is_empty(), "invalid posts must not create rows");

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn post_question_rejects_unknown_category() {
    let (app, storage, temp_path) = spawn_test_app("post-orphan").await;

    let orphan = json!({
        "question": "Where does this belong?",
        "answer": "nowhere",
        "category": 9999,
        "difficulty": 3
    });
    let resp = app
        .oneshot(json_request("POST", "/questions", orphan))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(storage.list_questions().await.expect("list questions").is_empty());

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn post_question_persists_and_bumps_total() {
    let (app, storage, temp_path) = spawn_test_app("post-valid").await;
    let category = storage.insert_category("Geography").await.expect("seed category");
    seed_question(&storage, "What is the capital of France?", category).await;

    let payload = json!({
        "question": "What is the longest river?",
        "answer": "The Nile",
        "category": category,
        "difficulty": 4
    });
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/questions", payload))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["question"]["id"].as_i64().expect("generated id") > 0);
    assert_eq!(body["question"]["answer"], json!("The Nile"));

    let resp = app
        .oneshot(get_request("/questions"))
        .await
        .expect("request failed");
    let body = body_json(resp).await;
    assert_eq!(body["totalQuestions"], json!(2));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn delete_question_removes_row_and_missing_id_is_404() {
    let (app, storage, temp_path) = spawn_test_app("delete").await;
    let category = storage.insert_category("Sports").await.expect("seed category");
    let id = seed_question(&storage, "What year was the first World Cup?", category).await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/questions/{id}"))
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("question deleted"));
    assert!(storage.list_questions().await.expect("list questions").is_empty());

    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/questions/{id}"))
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(404));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn search_matches_substring_case_insensitively() {
    let (app, storage, temp_path) = spawn_test_app("search").await;
    let category = storage.insert_category("Art").await.expect("seed category");
    seed_question(&storage, "What movie earned Tom Hanks his Oscar?", category).await;
    seed_question(&storage, "Who painted the Mona Lisa?", category).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/questions/search",
            json!({ "search_term": "what" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["total_questions"], json!(1));
    let questions = body["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 1);
    assert!(
        questions[0]["question"]
            .as_str()
            .expect("question text")
            .contains("Tom Hanks")
    );

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/questions/search",
            json!({ "search_term": "zzzqqqxxx123" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .oneshot(json_request("POST", "/questions/search", json!({})))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(false));

    let _ = fs::remove_file(&temp_path);
}
