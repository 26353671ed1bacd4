use axum::{
    Router,
    middleware,
    routing::{delete, get, post},
};

use crate::db::TriviaStorage;
use crate::error::TriviaError;
use crate::handlers::{categories, questions, quizzes};
use crate::middleware::cors::cors_headers;

/// Per-process handler context: the storage handle travels with every
/// request through axum's `State` extractor.
#[derive(Clone)]
pub struct TriviaState {
    pub storage: TriviaStorage,
}

impl TriviaState {
    pub fn new(storage: TriviaStorage) -> Self {
        Self { storage }
    }
}

pub fn trivia_router(state: TriviaState) -> Router {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(categories::list_category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{question_id}", delete(questions::delete_question))
        .route("/questions/search", post(questions::search_questions))
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(unknown_route)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(cors_headers))
        .with_state(state)
}

// Keep framework-level failures on the JSON error envelope.
async fn unknown_route() -> TriviaError {
    TriviaError::NotFound("resource not found".to_string())
}

async fn method_not_allowed() -> TriviaError {
    TriviaError::MethodNotAllowed
}
