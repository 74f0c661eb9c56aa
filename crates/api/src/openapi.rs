//! OpenAPI document for the HTTP surface, served at `/api-docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::handlers::{category, note, user};
use crate::routes::health;
use crate::state::AppState;

/// Generated OpenAPI description of every route.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notekeeper API",
        description = "Users, categories and notes with checked cross-references"
    ),
    paths(
        health::health_check,
        user::list,
        user::get_by_id,
        user::register,
        user::update_username,
        user::update_email,
        user::update_password,
        user::delete,
        category::list,
        category::get_by_id,
        category::create,
        category::update,
        category::delete,
        note::list,
        note::get_by_id,
        note::create,
        note::update_title,
        note::update_body,
        note::update_category,
        note::delete,
    ),
    tags(
        (name = "Users", description = "User registration and single-field updates"),
        (name = "Categories", description = "Categories owned by a user"),
        (name = "Notes", description = "Notes filed under a category"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Mount the OpenAPI document at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
