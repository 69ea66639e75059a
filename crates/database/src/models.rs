//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An account holder with a prepaid minutes balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Email address. Unique, compared byte-for-byte (case-sensitive).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
    /// Remaining call minutes. New accounts start at 0.
    pub minutes: i64,
}

/// A requested outbound call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Call {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Destination phone number as the user typed it.
    pub phone_number: String,
    /// Who is being called, if the user said.
    pub recipient_context: Option<String>,
    /// What the call should accomplish.
    pub objective: String,
    /// Extra context for the call, if any.
    pub background_context: Option<String>,
    /// Call lifecycle state. Starts as "pending"; later states arrive with
    /// the dialing integration.
    pub status: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Fields supplied by the caller when recording a new call request.
///
/// The remaining [`Call`] columns (id, status, created_at) are assigned by
/// the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCall {
    /// Owning user.
    pub user_id: i64,
    /// Destination phone number.
    pub phone_number: String,
    /// Who is being called, if known.
    pub recipient_context: Option<String>,
    /// What the call should accomplish.
    pub objective: String,
    /// Extra context, if any.
    pub background_context: Option<String>,
}
