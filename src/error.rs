use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl TriviaError {
    pub fn status(&self) -> StatusCode {
        match self {
            TriviaError::Validation(_) => StatusCode::BAD_REQUEST,
            TriviaError::NotFound(_) => StatusCode::NOT_FOUND,
            TriviaError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            TriviaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Malformed or non-JSON request bodies surface through the same envelope
/// as handler-level validation failures.
impl From<JsonRejection> for TriviaError {
    fn from(rejection: JsonRejection) -> Self {
        TriviaError::Validation(rejection.body_text())
    }
}

/// Unparseable query strings (e.g. a non-numeric `page`) likewise.
impl From<QueryRejection> for TriviaError {
    fn from(rejection: QueryRejection) -> Self {
        TriviaError::Validation(rejection.body_text())
    }
}

/// Unparseable path parameters (e.g. a non-numeric question id) likewise.
impl From<PathRejection> for TriviaError {
    fn from(rejection: PathRejection) -> Self {
        TriviaError::Validation(rejection.body_text())
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            TriviaError::Database(e) => {
                error!(error = %e, "storage failure");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body.
#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}
