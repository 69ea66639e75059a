//! Anthropic Messages API request and response types.

use serde::{Deserialize, Serialize};

/// A chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role: "user" or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the Messages endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    /// Model name.
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Conversation messages.
    pub messages: Vec<Message>,
}

/// Response body for the Messages endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    /// Generated content blocks.
    pub content: Vec<ContentBlock>,
}

/// One block of generated content. Only "text" blocks carry text.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    /// Block type, e.g. "text".
    #[serde(rename = "type")]
    pub block_type: String,
    /// Text payload for "text" blocks.
    #[serde(default)]
    pub text: String,
}

/// Error response from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable error message.
    pub message: String,
}
