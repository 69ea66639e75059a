//! Configuration for the moderation client.

use std::env;

/// Default Anthropic API base URL.
const DEFAULT_API_URL: &str = "https://api.anthropic.com";

/// Default model used for moderation verdicts.
const DEFAULT_MODEL: &str = "claude-3-7-sonnet-latest";

/// Default maximum tokens for a verdict reply.
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Configuration for the moderation client.
#[derive(Debug, Clone)]
pub struct ModerationConfig {
    /// API base URL.
    pub api_url: String,

    /// API key for authentication. `None` means no credential is
    /// configured; moderation calls will fail with a configuration error
    /// rather than the process refusing to start.
    pub api_key: Option<String>,

    /// Model name to ask for a verdict.
    pub model: String,

    /// Maximum tokens for the reply.
    pub max_tokens: u32,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ModerationConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ANTHROPIC_API_KEY` - API key (absence is carried, not fatal)
    /// - `ANTHROPIC_API_URL` - API base URL (default: https://api.anthropic.com)
    /// - `MODERATION_MODEL` - Model name (default: claude-3-7-sonnet-latest)
    /// - `MODERATION_MAX_TOKENS` - Max tokens (default: 1024)
    pub fn from_env() -> Self {
        let api_key = env::var("ANTHROPIC_API_KEY").ok().filter(|k| !k.is_empty());

        let api_url = env::var("ANTHROPIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("MODERATION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_tokens = env::var("MODERATION_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        Self {
            api_url,
            api_key,
            model,
            max_tokens,
        }
    }

    /// Create a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Set the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the maximum reply tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModerationConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_builders() {
        let config = ModerationConfig::new("test-key")
            .with_api_url("http://localhost:8123")
            .with_model("claude-test")
            .with_max_tokens(16);
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.api_url, "http://localhost:8123");
        assert_eq!(config.model, "claude-test");
        assert_eq!(config.max_tokens, 16);
    }
}
