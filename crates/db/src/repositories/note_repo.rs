//! Repository for the `notes` table.

use notekeeper_core::entity::EntityKind;
use notekeeper_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::repositories::{lock_for_update, lock_reference};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, body, created_at, modified_at, user_id, category_id";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note after locking its user and category.
    ///
    /// The user is checked first, so a payload with two bad references
    /// reports the missing user.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> StoreResult<Note> {
        let mut tx = pool.begin().await?;
        lock_reference(&mut tx, EntityKind::User, input.user_id).await?;
        lock_reference(&mut tx, EntityKind::Category, input.category_id).await?;

        let query = format!(
            "INSERT INTO notes (title, body, created_at, user_id, category_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(input.created_at)
            .bind(input.user_id)
            .bind(input.category_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(note)
    }

    /// Find a note by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all notes in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY id");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// List the notes filed under a category.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE category_id = $1 ORDER BY id");
        sqlx::query_as::<_, Note>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Update a note. Only non-`None` fields in `input` are applied and
    /// `modified_at` is always set.
    ///
    /// Returns `None` if the note does not exist. A new `category_id` is
    /// locked before the update.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateNote) -> StoreResult<Option<Note>> {
        let mut tx = pool.begin().await?;

        if !lock_for_update(&mut tx, EntityKind::Note, id).await? {
            return Ok(None);
        }
        if let Some(category_id) = input.category_id {
            lock_reference(&mut tx, EntityKind::Category, category_id).await?;
        }

        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                body = COALESCE($3, body),
                category_id = COALESCE($4, category_id),
                modified_at = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(input.category_id)
            .bind(input.modified_at)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(note))
    }

    /// Delete a note by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
