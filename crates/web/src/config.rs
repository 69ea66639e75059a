//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Email of the account whose minutes balance the credits page shows.
    pub account_email: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `REDIAL_ADDR` | Server bind address | `127.0.0.1:8081` |
    /// | `DATABASE_URL` | SQLite database URL | `sqlite:redial.db?mode=rwc` |
    /// | `REDIAL_ACCOUNT_EMAIL` | Account shown on the credits page | `test@test.com` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("REDIAL_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8081".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:redial.db?mode=rwc".to_string());

        let account_email =
            env::var("REDIAL_ACCOUNT_EMAIL").unwrap_or_else(|_| "test@test.com".to_string());

        Ok(Self {
            addr,
            database_url,
            account_email,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid REDIAL_ADDR format")]
    InvalidAddr,
}
