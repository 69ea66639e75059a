//! Moderation error types.

use thiserror::Error;

/// Errors that can occur while moderating a request.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// Configuration problem, typically a missing API credential.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never reached the provider.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with an error or an unusable body.
    #[error("upstream error: {0}")]
    Upstream(String),
}
