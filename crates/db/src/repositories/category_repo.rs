//! Repository for the `categories` table.

use notekeeper_core::entity::EntityKind;
use notekeeper_core::types::DbId;
use sqlx::PgPool;

use crate::error::{describe_dependents, StoreError, StoreResult};
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::repositories::{exists, lock_for_update, lock_reference};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, user_id";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category owned by `input.user_id`.
    ///
    /// Fails with [`StoreError::MissingReference`] if the user does not exist.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> StoreResult<Category> {
        let mut tx = pool.begin().await?;
        lock_reference(&mut tx, EntityKind::User, input.user_id).await?;

        let query = format!(
            "INSERT INTO categories (name, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.user_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(category)
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a category with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        exists(pool, EntityKind::Category, id).await
    }

    /// List all categories in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Rename a category and (re)assign its owner.
    ///
    /// Returns `None` if the category does not exist. The category check
    /// happens before the owner check.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> StoreResult<Option<Category>> {
        let mut tx = pool.begin().await?;

        if !lock_for_update(&mut tx, EntityKind::Category, id).await? {
            return Ok(None);
        }
        lock_reference(&mut tx, EntityKind::User, input.user_id).await?;

        let query = format!(
            "UPDATE categories SET name = $2, user_id = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.user_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(category))
    }

    /// Delete a category that holds no notes.
    ///
    /// Returns `false` if the category does not exist and
    /// [`StoreError::StillReferenced`] if notes still point at it.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let mut tx = pool.begin().await?;

        if !lock_for_update(&mut tx, EntityKind::Category, id).await? {
            return Ok(false);
        }

        let notes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE category_id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        if notes > 0 {
            return Err(StoreError::StillReferenced {
                entity: EntityKind::Category,
                id,
                dependents: describe_dependents(&[(notes, "note", "notes")]),
            });
        }

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
