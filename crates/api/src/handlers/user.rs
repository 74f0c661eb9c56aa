//! Handlers for the `/user` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use notekeeper_core::entity::EntityKind;
use notekeeper_core::types::DbId;
use notekeeper_core::user::{RegisterUser, UserField};
use notekeeper_db::models::user::UserResponse;

use crate::error::AppResult;
use crate::extract::{AppPath, TextBody, ValidatedJson};
use crate::linker;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /user
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    operation_id = "list_users",
    summary = "Get all users",
    description = "Retrieves all users in the system",
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<UserResponse>>),
    )
)]
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users: Vec<UserResponse> = linker::list_users(state.store.as_ref())
        .await?
        .iter()
        .map(UserResponse::from)
        .collect();
    Ok(Json(ApiResponse::ok("Users retrieved successfully", users)))
}

/// GET /user/{id}
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    operation_id = "get_user",
    summary = "Get user by ID",
    description = "Retrieves a user by their ID",
    params(
        ("id" = i64, Path, description = "User id"),
    ),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found"),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = linker::get_user(state.store.as_ref(), id).await?;
    Ok(Json(ApiResponse::ok(
        format!("User with ID {id} found successfully"),
        UserResponse::from(&user),
    )))
}

/// POST /user/register
#[utoipa::path(
    post,
    path = "/user/register",
    tag = "Users",
    operation_id = "register_user",
    summary = "Register a new user",
    description = "Registers a new user in the system",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserResponse>),
        (status = 400, description = "Malformed input or failed field rules"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterUser>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let user = linker::register_user(state.store.as_ref(), input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            format!("User registered successfully with ID {}", user.id),
            UserResponse::from(&user),
        )),
    ))
}

/// PUT /user/{id}/username
#[utoipa::path(
    put,
    path = "/user/{id}/username",
    tag = "Users",
    operation_id = "update_username",
    summary = "Update username",
    description = "Updates the username of an existing user",
    params(
        ("id" = i64, Path, description = "User id"),
    ),
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 200, description = "Username updated", body = ApiResponse<UserResponse>),
        (status = 400, description = "Malformed input or failed field rules"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn update_username(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    TextBody(username): TextBody,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    update_field(&state, id, UserField::Username(username), "Username").await
}

/// PUT /user/{id}/email
#[utoipa::path(
    put,
    path = "/user/{id}/email",
    tag = "Users",
    operation_id = "update_email",
    summary = "Update email",
    description = "Updates the email address of an existing user",
    params(
        ("id" = i64, Path, description = "User id"),
    ),
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 200, description = "Email updated", body = ApiResponse<UserResponse>),
        (status = 400, description = "Malformed input or failed field rules"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn update_email(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    TextBody(email): TextBody,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    update_field(&state, id, UserField::Email(email), "Email").await
}

/// PUT /user/{id}/password
#[utoipa::path(
    put,
    path = "/user/{id}/password",
    tag = "Users",
    operation_id = "update_password",
    summary = "Update password",
    description = "Updates the password of an existing user",
    params(
        ("id" = i64, Path, description = "User id"),
    ),
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 200, description = "Password updated", body = ApiResponse<UserResponse>),
        (status = 400, description = "Malformed input or failed field rules"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn update_password(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    TextBody(password): TextBody,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    update_field(&state, id, UserField::Password(password), "Password").await
}

async fn update_field(
    state: &AppState,
    id: DbId,
    field: UserField,
    label: &str,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = linker::update_user_field(state.store.as_ref(), id, field).await?;
    Ok(Json(ApiResponse::ok(
        format!("{label} updated successfully for user with ID {id}"),
        UserResponse::from(&user),
    )))
}

/// DELETE /user/{id}
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    operation_id = "delete_user",
    summary = "Delete a user",
    description = "Deletes a user by their ID",
    params(
        ("id" = i64, Path, description = "User id"),
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User still owns categories or notes"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    linker::delete_entity(state.store.as_ref(), EntityKind::User, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
