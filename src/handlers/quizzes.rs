use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::handlers::ApiJson;
use crate::{TriviaError, router::TriviaState};

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizBody {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

/// POST /quizzes -> one random question from the requested category whose id
/// is not in `previous_questions`. Category id 0 plays across all
/// categories. An exhausted category is a normal terminal state: success
/// with `question: null`.
pub async fn play_quiz(
    State(state): State<TriviaState>,
    ApiJson(body): ApiJson<QuizBody>,
) -> Result<Json<Value>, TriviaError> {
    let (Some(previous_questions), Some(quiz_category)) =
        (body.previous_questions, body.quiz_category)
    else {
        return Err(TriviaError::Validation(
            "previous_questions and quiz_category are required".to_string(),
        ));
    };

    let category = match quiz_category.id {
        0 => None,
        id => Some(id),
    };

    let question = state
        .storage
        .select_random_question(category, &previous_questions)
        .await?;

    Ok(Json(json!({ "success": true, "question": question })))
}
