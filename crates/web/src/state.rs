//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use moderation::ModerationCheck;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Moderation seam; trait object so tests can substitute a stub.
    pub moderator: Arc<dyn ModerationCheck>,
    /// Account whose minutes balance the credits page shows.
    pub account_email: String,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, moderator: Arc<dyn ModerationCheck>, account_email: String) -> Self {
        Self {
            db,
            moderator,
            account_email,
        }
    }
}
