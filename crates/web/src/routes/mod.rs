//! Route handlers for the web interface.

pub mod calls;
pub mod credits;
pub mod home;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(home::home_page))
        .route("/credits", get(credits::credits_page))
        // Call submission
        .route("/calls", post(calls::submit_call))
}
