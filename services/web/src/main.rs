use anyhow::Result;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod models;
mod repositories;
mod routes;
mod state;

use common::database::{DatabaseConfig, connect};

use crate::{repositories::UserRepository, state::AppState};

const LISTEN_ADDR: &str = "0.0.0.0:8080";
const TEMPLATE_PATH: &str = "templates/index.html";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting web service");

    // Establish database connectivity before accepting any request. This
    // blocks through the retry loop and aborts the process on exhaustion.
    let db_config = DatabaseConfig::from_env()?;
    let pool = connect(&db_config).await?;

    info!("Web service initialized successfully");

    let user_repository = UserRepository::new(pool);

    let app_state = AppState {
        user_repository,
        template_path: PathBuf::from(TEMPLATE_PATH),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    info!("Server listening on http://{LISTEN_ADDR}");

    axum::serve(listener, app).await?;

    Ok(())
}
