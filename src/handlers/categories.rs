use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::config::CONFIG;
use crate::handlers::questions::PageQuery;
use crate::handlers::{ApiPath, ApiQuery, category_map};
use crate::pagination::paginate;
use crate::{TriviaError, router::TriviaState};

/// GET /categories -> all categories as an `{id: type}` object.
pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<Value>, TriviaError> {
    let categories = state.storage.list_categories().await?;
    if categories.is_empty() {
        return Err(TriviaError::NotFound("no categories available".to_string()));
    }
    Ok(Json(json!({
        "success": true,
        "categories": category_map(categories),
    })))
}

/// GET /categories/{category_id}/questions?page=N -> paginated questions of
/// one category. Unknown categories and empty categories are both 404.
pub async fn list_category_questions(
    State(state): State<TriviaState>,
    ApiPath(category_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Value>, TriviaError> {
    if !state.storage.category_exists(category_id).await? {
        return Err(TriviaError::NotFound(format!(
            "category {category_id} does not exist"
        )));
    }

    let questions = state.storage.list_questions_by_category(category_id).await?;
    if questions.is_empty() {
        return Err(TriviaError::NotFound(format!(
            "no questions in category {category_id}"
        )));
    }

    let page = paginate(&questions, query.page(), CONFIG.questions_per_page);
    Ok(Json(json!({
        "success": true,
        "questions": page,
        "total_questions": questions.len(),
        "current_category": category_id,
    })))
}
