//! Note payload rules and single-field updates.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{not_blank, validate_payload};

/// Request body for `POST /note`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    #[validate(
        custom(function = "not_blank", message = "Title cannot be empty"),
        length(max = 50, message = "Title cannot be longer than 50 characters")
    )]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "Body cannot be empty"))]
    pub body: String,

    #[schema(value_type = i64)]
    pub user_id: DbId,
    #[schema(value_type = i64)]
    pub category_id: DbId,
}

/// Request body for `PUT /note/{id}/notetitle`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NoteTitleUpdate {
    #[validate(
        custom(function = "not_blank", message = "Title cannot be empty"),
        length(max = 50, message = "Title cannot be longer than 50 characters")
    )]
    pub title: String,
}

/// Request body for `PUT /note/{id}/notebody`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NoteBodyUpdate {
    #[validate(custom(function = "not_blank", message = "Body cannot be empty"))]
    pub body: String,
}

/// Request body for `PUT /note/{id}/category`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteCategoryUpdate {
    #[schema(value_type = i64)]
    pub category_id: DbId,
}

/// A single mutable note field together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteField {
    Title(String),
    Body(String),
    Category(DbId),
}

impl NoteField {
    /// Human-readable label used in success messages.
    pub fn label(&self) -> &'static str {
        match self {
            NoteField::Title(_) => "Note Title",
            NoteField::Body(_) => "Note Body",
            NoteField::Category(_) => "Note category",
        }
    }

    /// Check text fields against the same rules as [`NewNote`].
    ///
    /// Category ids carry no shape rule; their existence is checked by the store.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            NoteField::Title(title) => validate_payload(&NoteTitleUpdate {
                title: title.clone(),
            }),
            NoteField::Body(body) => validate_payload(&NoteBodyUpdate { body: body.clone() }),
            NoteField::Category(_) => Ok(()),
        }
    }
}

impl From<NoteTitleUpdate> for NoteField {
    fn from(update: NoteTitleUpdate) -> Self {
        NoteField::Title(update.title)
    }
}

impl From<NoteBodyUpdate> for NoteField {
    fn from(update: NoteBodyUpdate) -> Self {
        NoteField::Body(update.body)
    }
}

impl From<NoteCategoryUpdate> for NoteField {
    fn from(update: NoteCategoryUpdate) -> Self {
        NoteField::Category(update.category_id)
    }
}
