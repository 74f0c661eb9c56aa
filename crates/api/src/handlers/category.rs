//! Handlers for the `/category` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use notekeeper_core::category::CategoryInput;
use notekeeper_core::entity::EntityKind;
use notekeeper_core::types::DbId;
use notekeeper_db::models::category::Category;

use crate::error::AppResult;
use crate::extract::{AppPath, ValidatedJson};
use crate::linker;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /category
#[utoipa::path(
    get,
    path = "/category",
    tag = "Categories",
    operation_id = "list_categories",
    summary = "Get all categories",
    description = "Retrieves all categories",
    responses(
        (status = 200, description = "All categories", body = ApiResponse<Vec<Category>>),
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = linker::list_categories(state.store.as_ref()).await?;
    Ok(Json(ApiResponse::ok("Retrieved all categories", categories)))
}

/// GET /category/{id}
#[utoipa::path(
    get,
    path = "/category/{id}",
    tag = "Categories",
    operation_id = "get_category",
    summary = "Get category by ID",
    description = "Retrieves a category by its ID",
    params(
        ("id" = i64, Path, description = "Category id"),
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<Category>),
        (status = 404, description = "Category not found"),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = linker::get_category(state.store.as_ref(), id).await?;
    Ok(Json(ApiResponse::ok(
        format!("Category with ID {id} found successfully"),
        category,
    )))
}

/// POST /category
#[utoipa::path(
    post,
    path = "/category",
    tag = "Categories",
    operation_id = "create_category",
    summary = "Create a category",
    description = "Creates a category owned by an existing user",
    request_body = CategoryInput,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Malformed input or failed field rules"),
        (status = 404, description = "Owning user not found"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CategoryInput>,
) -> AppResult<(StatusCode, Json<ApiResponse<Category>>)> {
    let category = linker::create_category(state.store.as_ref(), input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Category created successfully", category)),
    ))
}

/// PUT /category/{id}
#[utoipa::path(
    put,
    path = "/category/{id}",
    tag = "Categories",
    operation_id = "update_category",
    summary = "Update a category",
    description = "Replaces the name and owner of a category",
    params(
        ("id" = i64, Path, description = "Category id"),
    ),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 400, description = "Malformed input or failed field rules"),
        (status = 404, description = "Category or owning user not found"),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    ValidatedJson(input): ValidatedJson<CategoryInput>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = linker::update_category(state.store.as_ref(), id, input).await?;
    Ok(Json(ApiResponse::ok(
        format!("Category updated successfully for category with ID {id}"),
        category,
    )))
}

/// DELETE /category/{id}
#[utoipa::path(
    delete,
    path = "/category/{id}",
    tag = "Categories",
    operation_id = "delete_category",
    summary = "Delete a category",
    description = "Deletes a category by its ID",
    params(
        ("id" = i64, Path, description = "Category id"),
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category still holds notes"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    linker::delete_entity(state.store.as_ref(), EntityKind::Category, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
