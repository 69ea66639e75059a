//! Credits page route.

use askama::Template;
use axum::extract::State;
use tracing::warn;

use crate::state::AppState;

/// Credits page template showing the minutes balance and purchase options.
#[derive(Template)]
#[template(path = "credits.html")]
pub struct CreditsTemplate {
    /// Remaining call minutes for the configured account.
    pub minutes: i64,
}

/// Render the credits page.
///
/// The balance is a non-critical display, so a failed lookup renders as a
/// zero balance instead of an error page.
pub async fn credits_page(State(state): State<AppState>) -> CreditsTemplate {
    let minutes =
        match database::user::get_user_minutes(state.db.pool(), &state.account_email).await {
            Ok(minutes) => minutes,
            Err(err) => {
                warn!(
                    email = %state.account_email,
                    error = %err,
                    "Could not load minutes balance, assuming zero"
                );
                0
            }
        };

    CreditsTemplate { minutes }
}
