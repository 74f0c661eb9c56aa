//! Route definitions for the `/user` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET    /                  -> list
/// POST   /register          -> register
/// GET    /{id}              -> get_by_id
/// DELETE /{id}              -> delete
/// PUT    /{id}/username     -> update_username
/// PUT    /{id}/email        -> update_email
/// PUT    /{id}/password     -> update_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list))
        .route("/register", post(user::register))
        .route("/{id}", get(user::get_by_id).delete(user::delete))
        .route("/{id}/username", put(user::update_username))
        .route("/{id}/email", put(user::update_email))
        .route("/{id}/password", put(user::update_password))
}
