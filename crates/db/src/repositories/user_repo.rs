//! Repository for the `users` table.

use notekeeper_core::entity::EntityKind;
use notekeeper_core::types::DbId;
use sqlx::PgPool;

use crate::error::{describe_dependents, StoreError, StoreResult};
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::repositories::lock_for_update;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                username = COALESCE($2, username),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user that owns no notes or categories.
    ///
    /// Returns `false` if the user does not exist and
    /// [`StoreError::StillReferenced`] if anything still points at it.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let mut tx = pool.begin().await?;

        if !lock_for_update(&mut tx, EntityKind::User, id).await? {
            return Ok(false);
        }

        let (notes, categories): (i64, i64) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM notes WHERE user_id = $1),
                (SELECT COUNT(*) FROM categories WHERE user_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if notes > 0 || categories > 0 {
            return Err(StoreError::StillReferenced {
                entity: EntityKind::User,
                id,
                dependents: describe_dependents(&[
                    (notes, "note", "notes"),
                    (categories, "category", "categories"),
                ]),
            });
        }

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
