//! Web interface for Redial.
//!
//! Serves the home page with the call request form, the credits page, and
//! the call submission endpoint.

mod config;
mod error;
mod routes;
mod state;
mod validate;

use std::sync::Arc;

use database::Database;
use moderation::Moderator;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting web server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Build the moderation client. A missing credential is allowed at
    // startup; affected requests are refused individually.
    let moderator = Moderator::from_env()?;
    if moderator.config().api_key.is_none() {
        warn!("ANTHROPIC_API_KEY is not set; call requests will be refused");
    }

    // Build application state
    let state = AppState::new(db, Arc::new(moderator), config.account_email.clone());

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Web server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
