use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A trivia question as persisted. Serializing this struct is exactly the
/// "formatted" projection the API returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A question category. Read-only through the HTTP surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Category {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Insert payload for a question; the id is generated by the store.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}
