use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::CONFIG;
use crate::db::NewQuestion;
use crate::handlers::{ApiJson, ApiPath, ApiQuery, category_map};
use crate::pagination::paginate;
use crate::{TriviaError, router::TriviaState};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
}

impl PageQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionBody {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub search_term: Option<String>,
}

/// GET /questions?page=N -> one page of all questions plus totals and the
/// category map. The page over an empty table is 404, not an empty success.
pub async fn list_questions(
    State(state): State<TriviaState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Value>, TriviaError> {
    let questions = state.storage.list_questions().await?;
    if questions.is_empty() {
        return Err(TriviaError::NotFound("no questions available".to_string()));
    }

    let categories = state.storage.list_categories().await?;
    let page = paginate(&questions, query.page(), CONFIG.questions_per_page);

    // Field casing is uneven across endpoints; this is the contract the
    // frontend consumes.
    Ok(Json(json!({
        "success": true,
        "questions": page,
        "totalQuestions": questions.len(),
        "categories": category_map(categories),
        "currentCategory": Value::Null,
    })))
}

/// POST /questions -> create a question. All four fields are required and
/// the category must exist.
pub async fn create_question(
    State(state): State<TriviaState>,
    ApiJson(body): ApiJson<CreateQuestionBody>,
) -> Result<Json<Value>, TriviaError> {
    let question = body.question.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let answer = body.answer.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let (Some(question), Some(answer), Some(category), Some(difficulty)) =
        (question, answer, body.category, body.difficulty)
    else {
        return Err(TriviaError::Validation(
            "question, answer, category and difficulty are all required".to_string(),
        ));
    };

    if !state.storage.category_exists(category).await? {
        return Err(TriviaError::Validation(format!(
            "category {category} does not exist"
        )));
    }

    let created = state
        .storage
        .insert_question(&NewQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
        .await?;

    Ok(Json(json!({ "success": true, "question": created })))
}

/// DELETE /questions/{question_id}
pub async fn delete_question(
    State(state): State<TriviaState>,
    ApiPath(question_id): ApiPath<i64>,
) -> Result<Json<Value>, TriviaError> {
    state.storage.delete_question(question_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "question deleted",
    })))
}

/// POST /questions/search -> questions whose text contains the term,
/// case-insensitive. A missing term or zero matches is 404.
pub async fn search_questions(
    State(state): State<TriviaState>,
    ApiJson(body): ApiJson<SearchBody>,
) -> Result<Json<Value>, TriviaError> {
    let Some(term) = body.search_term.as_deref().map(str::trim).filter(|s| !s.is_empty())
    else {
        return Err(TriviaError::NotFound("search_term is required".to_string()));
    };

    let matches = state.storage.search_questions(term).await?;
    if matches.is_empty() {
        return Err(TriviaError::NotFound(format!(
            "no questions matching {term:?}"
        )));
    }

    Ok(Json(json!({
        "success": true,
        "questions": matches,
        "total_questions": matches.len(),
    })))
}
