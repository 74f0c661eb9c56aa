//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Writes that link to another
//! row run in a transaction that locks the referenced row first.

pub mod category_repo;
pub mod note_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
pub use user_repo::UserRepo;

use notekeeper_core::entity::EntityKind;
use notekeeper_core::types::DbId;
use sqlx::{Postgres, Transaction};

use crate::error::{StoreError, StoreResult};

/// Table backing each entity kind.
pub(crate) fn table_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::User => "users",
        EntityKind::Category => "categories",
        EntityKind::Note => "notes",
    }
}

/// Take a `FOR SHARE` lock on a referenced row, failing if it is absent.
///
/// The lock blocks a concurrent delete of the parent until the transaction
/// that links to it commits.
pub(crate) async fn lock_reference(
    tx: &mut Transaction<'_, Postgres>,
    kind: EntityKind,
    id: DbId,
) -> StoreResult<()> {
    let query = format!("SELECT id FROM {} WHERE id = $1 FOR SHARE", table_name(kind));
    let found: Option<DbId> = sqlx::query_scalar(&query)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    match found {
        Some(_) => Ok(()),
        None => Err(StoreError::MissingReference { entity: kind, id }),
    }
}

/// Take a `FOR UPDATE` lock on a row about to be modified or deleted.
///
/// Returns `false` if the row does not exist.
pub(crate) async fn lock_for_update(
    tx: &mut Transaction<'_, Postgres>,
    kind: EntityKind,
    id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT id FROM {} WHERE id = $1 FOR UPDATE", table_name(kind));
    let found: Option<DbId> = sqlx::query_scalar(&query)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(found.is_some())
}

/// Check whether a row with the given id exists.
pub(crate) async fn exists(
    pool: &sqlx::PgPool,
    kind: EntityKind,
    id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", table_name(kind));
    sqlx::query_scalar(&query).bind(id).fetch_one(pool).await
}
