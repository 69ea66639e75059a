//! Error types for the web interface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted call form failed validation.
    #[error("invalid call request: {0}")]
    Validation(#[from] ValidationError),

    /// Moderation refused the request, or could not be completed.
    #[error("request violates Terms of Service")]
    Forbidden,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                tracing::info!("Rejected call form: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    format!("invalid call request: {}", err),
                )
                    .into_response()
            }
            AppError::Forbidden => {
                let body = serde_json::json!({
                    "error": "forbidden",
                    "message": "Request violates Terms of Service"
                });

                (StatusCode::FORBIDDEN, Json(body)).into_response()
            }
        }
    }
}

/// Result type for request handlers.
pub type Result<T> = std::result::Result<T, AppError>;
