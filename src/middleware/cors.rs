//! Cross-origin access-control headers, attached to every response
//! (including error envelopes and router fallbacks).

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

pub async fn cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,Authorization,true"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,PATCH,POST,DELETE,OPTIONS"),
    );
    response
}
