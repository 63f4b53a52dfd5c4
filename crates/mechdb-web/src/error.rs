//! Web-facing error type.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Errors a request handler can surface to the client.
///
/// Unknown sections, subsections, and entry indices are terminal for the
/// request and map to a 404 page.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Html(format!(
                    "<!DOCTYPE html><html><body><h1>404 Not Found</h1><p>{msg}</p></body></html>"
                )),
            )
                .into_response(),
        }
    }
}
