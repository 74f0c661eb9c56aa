pub mod category;
pub mod health;
pub mod note;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user                                list
/// /user/register                       register (POST)
/// /user/{id}                           get, delete
/// /user/{id}/username                  replace username (PUT, text body)
/// /user/{id}/email                     replace email (PUT, text body)
/// /user/{id}/password                  replace password (PUT, text body)
///
/// /category                            list, create
/// /category/{id}                       get, update, delete
///
/// /note                                list (?categoryId=), create
/// /note/{id}                           get, delete
/// /note/{id}/notetitle                 replace title (PUT)
/// /note/{id}/notebody                  replace body (PUT)
/// /note/{id}/category                  re-file under another category (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/user", user::router())
        .nest("/category", category::router())
        .nest("/note", note::router())
}
