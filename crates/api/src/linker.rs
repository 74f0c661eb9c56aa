//! Cross-reference linker.
//!
//! Every operation that stores a foreign id (note -> user, note -> category,
//! category -> user) goes through here. The store checks the reference and
//! writes in one atomic step; this module decides how a missing reference is
//! reported and applies single-field updates.
//!
//! A missing reference on create (or on a category's owner) is
//! [`CoreError::ReferenceNotFound`]. A missing category while re-filing an
//! existing note is [`CoreError::InvalidReference`].

use chrono::Utc;
use notekeeper_core::category::CategoryInput;
use notekeeper_core::entity::EntityKind;
use notekeeper_core::error::CoreError;
use notekeeper_core::note::{NewNote, NoteField};
use notekeeper_core::types::DbId;
use notekeeper_core::user::{RegisterUser, UserField};
use notekeeper_db::models::category::{Category, CreateCategory, UpdateCategory};
use notekeeper_db::models::note::{CreateNote, Note, UpdateNote};
use notekeeper_db::models::user::{CreateUser, UpdateUser, User};
use notekeeper_db::{EntityStore, StoreError};

use crate::error::{AppError, AppResult};
use crate::password::hash_password;

fn not_found(entity: EntityKind, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Hash on the blocking pool, Argon2 is CPU-bound.
async fn hash_off_thread(password: String) -> AppResult<String> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {e}")))??;
    Ok(hash)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub async fn list_users(store: &dyn EntityStore) -> AppResult<Vec<User>> {
    Ok(store.list_users().await?)
}

pub async fn get_user(store: &dyn EntityStore, id: DbId) -> AppResult<User> {
    store
        .find_user(id)
        .await?
        .ok_or_else(|| not_found(EntityKind::User, id))
}

/// Hash the password and persist a new user.
pub async fn register_user(store: &dyn EntityStore, input: RegisterUser) -> AppResult<User> {
    let password_hash = hash_off_thread(input.password).await?;
    let user = store
        .insert_user(&CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
        })
        .await?;
    tracing::info!(user_id = user.id, "User registered");
    Ok(user)
}

/// Validate and apply one field. Passwords are hashed only once the user is
/// known to exist.
pub async fn update_user_field(
    store: &dyn EntityStore,
    id: DbId,
    field: UserField,
) -> AppResult<User> {
    field.validate()?;
    let name = field.name();

    let update = match field {
        UserField::Username(username) => UpdateUser {
            username: Some(username),
            ..Default::default()
        },
        UserField::Email(email) => UpdateUser {
            email: Some(email),
            ..Default::default()
        },
        UserField::Password(password) => {
            get_user(store, id).await?;
            UpdateUser {
                password_hash: Some(hash_off_thread(password).await?),
                ..Default::default()
            }
        }
    };

    let user = store
        .update_user(id, &update)
        .await?
        .ok_or_else(|| not_found(EntityKind::User, id))?;
    tracing::info!(user_id = id, field = name, "User updated");
    Ok(user)
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub async fn list_categories(store: &dyn EntityStore) -> AppResult<Vec<Category>> {
    Ok(store.list_categories().await?)
}

pub async fn get_category(store: &dyn EntityStore, id: DbId) -> AppResult<Category> {
    store
        .find_category(id)
        .await?
        .ok_or_else(|| not_found(EntityKind::Category, id))
}

/// Persist a category owned by `input.user_id`.
pub async fn create_category(store: &dyn EntityStore, input: CategoryInput) -> AppResult<Category> {
    let category = store
        .insert_category(&CreateCategory {
            name: input.name,
            user_id: input.user_id,
        })
        .await?;
    tracing::info!(category_id = category.id, user_id = category.user_id, "Category created");
    Ok(category)
}

/// Rename a category and set its owner. The category must exist before the
/// owner is looked at.
pub async fn update_category(
    store: &dyn EntityStore,
    id: DbId,
    input: CategoryInput,
) -> AppResult<Category> {
    let category = store
        .update_category(
            id,
            &UpdateCategory {
                name: input.name,
                user_id: input.user_id,
            },
        )
        .await?
        .ok_or_else(|| not_found(EntityKind::Category, id))?;
    tracing::info!(category_id = id, "Category updated");
    Ok(category)
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

/// All notes, or the notes of one existing category.
pub async fn list_notes(store: &dyn EntityStore, category_id: Option<DbId>) -> AppResult<Vec<Note>> {
    if let Some(category_id) = category_id {
        if !store.category_exists(category_id).await? {
            return Err(not_found(EntityKind::Category, category_id));
        }
    }
    Ok(store.list_notes(category_id).await?)
}

pub async fn get_note(store: &dyn EntityStore, id: DbId) -> AppResult<Note> {
    store
        .find_note(id)
        .await?
        .ok_or_else(|| not_found(EntityKind::Note, id))
}

/// Persist a note linked to an existing user and category.
///
/// `createdAt` is stamped here; `modifiedAt` stays empty until the first update.
pub async fn create_note(store: &dyn EntityStore, input: NewNote) -> AppResult<Note> {
    let note = store
        .insert_note(&CreateNote {
            title: input.title,
            body: input.body,
            user_id: input.user_id,
            category_id: input.category_id,
            created_at: Utc::now(),
        })
        .await?;
    tracing::info!(note_id = note.id, category_id = note.category_id, "Note created");
    Ok(note)
}

/// Validate and apply one note field, stamping `modifiedAt`.
pub async fn update_note_field(
    store: &dyn EntityStore,
    id: DbId,
    field: NoteField,
) -> AppResult<Note> {
    field.validate()?;
    let label = field.label();

    let mut update = UpdateNote::touch(Utc::now());
    match field {
        NoteField::Title(title) => update.title = Some(title),
        NoteField::Body(body) => update.body = Some(body),
        NoteField::Category(category_id) => update.category_id = Some(category_id),
    }

    let note = match store.update_note(id, &update).await {
        Ok(Some(note)) => note,
        Ok(None) => return Err(not_found(EntityKind::Note, id)),
        Err(StoreError::MissingReference { entity, id }) => {
            return Err(AppError::Core(CoreError::InvalidReference { entity, id }))
        }
        Err(err) => return Err(err.into()),
    };
    tracing::info!(note_id = id, field = label, "Note updated");
    Ok(note)
}

// ---------------------------------------------------------------------------
// Deletes
// ---------------------------------------------------------------------------

/// Remove one record. Rows that are still referenced are refused with a
/// conflict and left in place.
pub async fn delete_entity(store: &dyn EntityStore, kind: EntityKind, id: DbId) -> AppResult<()> {
    let deleted = match kind {
        EntityKind::User => store.delete_user(id).await?,
        EntityKind::Category => store.delete_category(id).await?,
        EntityKind::Note => store.delete_note(id).await?,
    };
    if !deleted {
        return Err(not_found(kind, id));
    }
    tracing::info!(entity = %kind, id, "{kind} with ID {id} deleted successfully");
    Ok(())
}
