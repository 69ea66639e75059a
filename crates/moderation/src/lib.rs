//! Anthropic-backed request moderation.
//!
//! Before a requested phone call is acted on, its description is sent to the
//! Anthropic Messages API with a fixed instruction prefix. The provider
//! replies either with the bare token `true` (approve) or with the reason
//! the request should not be carried out (reject). The reply is matched
//! byte-for-byte; see [`Verdict::from_reply`].
//!
//! # Example
//!
//! ```rust,no_run
//! use moderation::{ModerationCheck, Moderator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let moderator = Moderator::from_env()?;
//!     let verdict = moderator
//!         .check_request("user wants to order a pizza from Tony's")
//!         .await?;
//!     println!("approved: {}", verdict.is_approved());
//!     Ok(())
//! }
//! ```

mod api_types;
mod check;
mod client;
mod config;
mod error;

pub use check::{ModerationCheck, Verdict, MODERATION_INSTRUCTIONS};
pub use client::Moderator;
pub use config::ModerationConfig;
pub use error::ModerationError;

// Re-export for implementors of the trait
pub use async_trait::async_trait;
