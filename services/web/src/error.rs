//! Custom error types for the web service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the web service
///
/// Handlers log the underlying cause before constructing one of these, so
/// the variants carry no detail: only the fixed user-facing message leaves
/// the process.
#[derive(Error, Debug)]
pub enum WebError {
    /// The JSON user listing could not be produced
    #[error("Failed to retrieve users")]
    UserList,

    /// The HTML page could not fetch its user data
    #[error("Failed to load user data for web page.")]
    PageData,

    /// The HTML template could not be read or parsed
    #[error("Could not load application template.")]
    Template,

    /// The HTML template failed to render
    #[error("Failed to render page.")]
    Render,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::UserList => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to retrieve users" })),
            )
                .into_response(),
            WebError::PageData | WebError::Template | WebError::Render => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}

/// Type alias for handler results
pub type WebResult<T> = Result<T, WebError>;
