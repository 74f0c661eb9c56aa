//! Route definitions for the `/note` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::note;
use crate::state::AppState;

/// Routes mounted at `/note`.
///
/// ```text
/// GET    /                  -> list (optional ?categoryId=)
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// DELETE /{id}              -> delete
/// PUT    /{id}/notetitle    -> update_title
/// PUT    /{id}/notebody     -> update_body
/// PUT    /{id}/category     -> update_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(note::list).post(note::create))
        .route("/{id}", get(note::get_by_id).delete(note::delete))
        .route("/{id}/notetitle", put(note::update_title))
        .route("/{id}/notebody", put(note::update_body))
        .route("/{id}/category", put(note::update_category))
}
