//! User CRUD operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::User;

/// Create a new user with a zero minutes balance.
///
/// Fails with [`DatabaseError::AlreadyExists`] if the email is taken.
pub async fn create_user(pool: &SqlitePool, email: &str, name: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name)
        VALUES (?, ?)
        RETURNING id, email, name, created_at, updated_at, minutes
        "#,
    )
    .bind(email)
    .bind(name)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "User",
                    key: email.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })
}

/// Get a user by ID.
pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, created_at, updated_at, minutes
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        key: id.to_string(),
    })
}

/// Get a user by email. The match is byte-exact, so "Bob@example.com" and
/// "bob@example.com" are different accounts.
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, created_at, updated_at, minutes
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        key: email.to_string(),
    })
}

/// Get the remaining minutes balance for the account with this email.
pub async fn get_user_minutes(pool: &SqlitePool, email: &str) -> Result<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT minutes
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        key: email.to_string(),
    })
}

/// Rename a user, refreshing their update timestamp.
pub async fn update_user(pool: &SqlitePool, id: i64, name: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        RETURNING id, email, name, created_at, updated_at, minutes
        "#,
    )
    .bind(name)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        key: id.to_string(),
    })
}

/// Delete a user by ID. Deleting an absent ID is not an error.
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// List all users, newest first.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, created_at, updated_at, minutes
        FROM users
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}
