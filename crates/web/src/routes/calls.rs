//! Call submission route.

use askama::Template;
use axum::extract::State;
use axum::Form;
use tracing::{error, info, warn};

use moderation::Verdict;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::validate::{validate_call_form, CallForm};

/// Confirmation page template rendered after a request is accepted.
#[derive(Template)]
#[template(path = "call_submitted.html")]
pub struct CallSubmittedTemplate {
    /// Destination phone number, echoed back to the user.
    pub phone_number: String,
    /// The requested objective.
    pub objective: String,
}

/// Handle a call request submission.
///
/// The sequence short-circuits: a validation failure stops with 400, a
/// moderation rejection or failure stops with 403, and only an approved
/// request reaches the confirmation page. Exactly one response is written
/// on every path.
pub async fn submit_call(
    State(state): State<AppState>,
    Form(form): Form<CallForm>,
) -> Result<CallSubmittedTemplate> {
    validate_call_form(&form)?;

    let description = format!(
        "user wants to contact: {}, user wants to accomplish: {}, user provided outside context: {}.",
        form.recipient_context, form.objective, form.other_context
    );

    match state.moderator.check_request(&description).await {
        Ok(Verdict::Approved) => {
            info!(phone = %form.recipient_phone_number, "Call request approved");
        }
        Ok(Verdict::Rejected(reason)) => {
            warn!(reason = %reason, "Call request rejected by moderation");
            return Err(AppError::Forbidden);
        }
        Err(err) => {
            error!(error = %err, "Moderation check did not complete");
            return Err(AppError::Forbidden);
        }
    }

    // TODO: persist the call via database::call::create_call and start
    // dialing once the telephony integration lands.

    Ok(CallSubmittedTemplate {
        phone_number: form.recipient_phone_number,
        objective: form.objective,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use moderation::{
        async_trait, ModerationCheck, ModerationConfig, ModerationError, Moderator,
    };

    /// Stub moderation seam with a canned outcome.
    enum StubModeration {
        Approve,
        Reject(&'static str),
        Fail,
    }

    #[async_trait]
    impl ModerationCheck for StubModeration {
        async fn check_request(
            &self,
            _description: &str,
        ) -> std::result::Result<Verdict, ModerationError> {
            match self {
                StubModeration::Approve => Ok(Verdict::Approved),
                StubModeration::Reject(reason) => Ok(Verdict::Rejected(reason.to_string())),
                StubModeration::Fail => {
                    Err(ModerationError::Upstream("API error (500): boom".to_string()))
                }
            }
        }
    }

    async fn test_state(moderator: Arc<dyn ModerationCheck>) -> AppState {
        let db = database::Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        AppState::new(db, moderator, "test@test.com".to_string())
    }

    fn pizza_form() -> CallForm {
        CallForm {
            recipient_phone_number: "5551234567".to_string(),
            recipient_context: "Tony's Pizza".to_string(),
            objective: "Order a pizza".to_string(),
            other_context: String::new(),
        }
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_approved_request_renders_confirmation() {
        let state = test_state(Arc::new(StubModeration::Approve)).await;

        let response = submit_call(State(state), Form(pizza_form()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("5551234567"));
        assert!(body.contains("Order a pizza"));
    }

    #[tokio::test]
    async fn test_short_phone_number_is_bad_request() {
        let state = test_state(Arc::new(StubModeration::Approve)).await;
        let mut form = pizza_form();
        form.recipient_phone_number = "555123".to_string();

        let response = submit_call(State(state), Form(form)).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_string(response).await;
        assert!(body.contains("phone number"));
    }

    #[tokio::test]
    async fn test_non_numeric_phone_number_is_bad_request() {
        let state = test_state(Arc::new(StubModeration::Approve)).await;
        let mut form = pizza_form();
        form.recipient_phone_number = "12345678a0".to_string();

        let response = submit_call(State(state), Form(form)).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_objective_is_bad_request() {
        let state = test_state(Arc::new(StubModeration::Approve)).await;
        let mut form = pizza_form();
        form.objective = String::new();

        let response = submit_call(State(state), Form(form)).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_string(response).await;
        assert!(body.contains("objective"));
    }

    #[tokio::test]
    async fn test_rejected_request_is_forbidden_json() {
        let state =
            test_state(Arc::new(StubModeration::Reject("sounds like harassment"))).await;

        let response = submit_call(State(state), Form(pizza_form()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "forbidden");
        assert_eq!(json["message"], "Request violates Terms of Service");
        // The reason stays server-side.
        assert!(!body.contains("harassment"));
    }

    #[tokio::test]
    async fn test_moderation_failure_is_forbidden() {
        let state = test_state(Arc::new(StubModeration::Fail)).await;

        let response = submit_call(State(state), Form(pizza_form()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_missing_credential_is_forbidden_not_a_crash() {
        // A real moderator with no API key configured: the configuration
        // error must become the forbidden response, not a panic.
        let moderator = Moderator::new(ModerationConfig::default()).unwrap();
        let state = test_state(Arc::new(moderator)).await;

        let response = submit_call(State(state), Form(pizza_form()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "forbidden");
    }
}
