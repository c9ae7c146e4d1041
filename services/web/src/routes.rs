//! Web service routes

use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tera::{Context, Tera};

use crate::{error::WebError, state::AppState};

/// Create the router for the web service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_root))
        .route("/users", get(get_users))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint
///
/// Always answers 200 while the process is up; database liveness was
/// established once at startup and is not re-probed here.
pub async fn health_check() -> impl IntoResponse {
    "Service is healthy and connected to DB."
}

/// Render the user listing page
pub async fn get_root(State(state): State<AppState>) -> Result<impl IntoResponse, WebError> {
    // The template is loaded from disk on every request so edits show up
    // without a restart.
    let mut tera = Tera::default();
    tera.add_template_file(&state.template_path, Some("index"))
        .map_err(|e| {
            tracing::error!(
                "Failed to load template {}: {}",
                state.template_path.display(),
                e
            );
            WebError::Template
        })?;

    let users = state.user_repository.get_all().await.map_err(|e| {
        tracing::error!("Failed to fetch users for template: {:#}", e);
        WebError::PageData
    })?;

    let mut context = Context::new();
    context.insert("users", &users);

    let html = tera.render("index", &context).map_err(|e| {
        tracing::error!("Failed to render template: {}", e);
        WebError::Render
    })?;

    Ok(Html(html))
}

/// Get all users as JSON
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, WebError> {
    let users = state.user_repository.get_all().await.map_err(|e| {
        tracing::error!("Failed to get users: {:#}", e);
        WebError::UserList
    })?;

    Ok(Json(users))
}
