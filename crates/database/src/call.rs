//! Call record operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Call, NewCall};

/// Record a requested call. The row starts in the "pending" status.
///
/// The owning user must exist; foreign keys are enforced on every
/// connection.
pub async fn create_call(pool: &SqlitePool, new_call: &NewCall) -> Result<Call> {
    let call = sqlx::query_as::<_, Call>(
        r#"
        INSERT INTO calls (user_id, phone_number, recipient_context, objective, background_context)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, user_id, phone_number, recipient_context, objective,
                  background_context, status, created_at
        "#,
    )
    .bind(new_call.user_id)
    .bind(&new_call.phone_number)
    .bind(&new_call.recipient_context)
    .bind(&new_call.objective)
    .bind(&new_call.background_context)
    .fetch_one(pool)
    .await?;

    Ok(call)
}

/// Get a call by ID.
pub async fn get_call(pool: &SqlitePool, id: i64) -> Result<Call> {
    sqlx::query_as::<_, Call>(
        r#"
        SELECT id, user_id, phone_number, recipient_context, objective,
               background_context, status, created_at
        FROM calls
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Call",
        key: id.to_string(),
    })
}
