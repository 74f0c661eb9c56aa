//! Note entity model and DTOs.

use notekeeper_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A note row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub title: String,
    pub body: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    /// `None` until the note is first updated.
    #[schema(value_type = Option<String>, format = DateTime)]
    pub modified_at: Option<Timestamp>,
    #[schema(value_type = i64)]
    pub user_id: DbId,
    #[schema(value_type = i64)]
    pub category_id: DbId,
}

/// DTO for creating a new note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub title: String,
    pub body: String,
    pub user_id: DbId,
    pub category_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for updating a note. `None` fields are left untouched;
/// `modified_at` is always written.
#[derive(Debug, Clone)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category_id: Option<DbId>,
    pub modified_at: Timestamp,
}

impl UpdateNote {
    /// An update that only stamps `modified_at`.
    pub fn touch(modified_at: Timestamp) -> Self {
        Self {
            title: None,
            body: None,
            category_id: None,
            modified_at,
        }
    }
}
