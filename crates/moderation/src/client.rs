//! Moderator implementation backed by the Anthropic Messages API.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::api_types::{ApiError, Message, MessagesRequest, MessagesResponse};
use crate::check::{ModerationCheck, Verdict, MODERATION_INSTRUCTIONS};
use crate::config::ModerationConfig;
use crate::error::ModerationError;

/// API version header value required by the Messages endpoint.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// A moderation client that asks Anthropic whether a request is acceptable.
///
/// One outbound network call per invocation; no retry, no client-side
/// timeout, no caching. Callers that cannot tolerate a hung upstream must
/// impose their own deadline.
pub struct Moderator {
    client: Client,
    config: ModerationConfig,
}

impl Moderator {
    /// Create a new moderator with the given configuration.
    ///
    /// A missing API key is accepted here; it surfaces as
    /// [`ModerationError::Configuration`] on first use.
    pub fn new(config: ModerationConfig) -> Result<Self, ModerationError> {
        let client = Client::builder().build().map_err(|e| {
            ModerationError::Configuration(format!("failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, config })
    }

    /// Create a moderator from environment variables.
    ///
    /// See [`ModerationConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, ModerationError> {
        Self::new(ModerationConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &ModerationConfig {
        &self.config
    }

    /// Send a prompt to the provider and return the generated text.
    ///
    /// The reply's text content blocks are concatenated into one string.
    pub async fn generate(&self, prompt: &str) -> Result<String, ModerationError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            ModerationError::Configuration("ANTHROPIC_API_KEY is not set".to_string())
        })?;

        let url = format!("{}/v1/messages", self.config.api_url);
        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![Message::user(prompt)],
        };

        debug!(model = %request.model, "Sending moderation request to Anthropic");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ModerationError::Network(format!("failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as a structured API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(ModerationError::Upstream(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(ModerationError::Upstream(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let reply: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ModerationError::Upstream(format!("failed to parse response: {}", e)))?;

        let mut text = String::new();
        for block in &reply.content {
            if block.block_type != "text" {
                warn!(block_type = %block.block_type, "Ignoring non-text content block");
                continue;
            }
            text.push_str(&block.text);
        }

        Ok(text)
    }
}

#[async_trait]
impl ModerationCheck for Moderator {
    async fn check_request(&self, description: &str) -> Result<Verdict, ModerationError> {
        let prompt = format!("{}{}", MODERATION_INSTRUCTIONS, description);
        let reply = self.generate(&prompt).await?;

        let verdict = Verdict::from_reply(reply);
        if let Verdict::Rejected(ref reason) = verdict {
            debug!(reason = %reason, "Moderation rejected request");
        }

        Ok(verdict)
    }
}
