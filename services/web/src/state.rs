//! Application state shared across handlers

use std::path::PathBuf;

use crate::repositories::UserRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: UserRepository,
    /// Template file rendered by the root page handler. Loaded per request,
    /// so it can be edited without a restart and a broken file surfaces as a
    /// request-time error rather than a crash.
    pub template_path: PathBuf,
}
