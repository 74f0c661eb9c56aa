//! Category entity model and DTOs.

use notekeeper_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A category row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub name: String,
    #[schema(value_type = i64)]
    pub user_id: DbId,
}

/// DTO for creating a new category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub user_id: DbId,
}

/// DTO for updating a category. `PUT` replaces both fields.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub name: String,
    pub user_id: DbId,
}
