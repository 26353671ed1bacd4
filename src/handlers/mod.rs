//! Route handlers, one module per resource.

pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::db::Category;
use crate::error::TriviaError;
use axum::extract::{FromRequest, FromRequestParts};
use std::collections::BTreeMap;

/// JSON body extractor whose rejection is the standard error envelope
/// instead of axum's plain-text 400/415.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(TriviaError))]
pub struct ApiJson<T>(pub T);

/// Query-string extractor on the standard error envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(TriviaError))]
pub struct ApiQuery<T>(pub T);

/// Path-parameter extractor on the standard error envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(TriviaError))]
pub struct ApiPath<T>(pub T);

/// `{id: type}` object used by the category listing and the questions page.
/// Integer keys serialize as JSON strings, matching the wire contract.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
