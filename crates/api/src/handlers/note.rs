//! Handlers for the `/note` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use notekeeper_core::entity::EntityKind;
use notekeeper_core::note::{
    NewNote, NoteBodyUpdate, NoteCategoryUpdate, NoteField, NoteTitleUpdate,
};
use notekeeper_core::types::DbId;
use notekeeper_db::models::note::Note;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery, ValidatedJson};
use crate::linker;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /note`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListParams {
    pub category_id: Option<DbId>,
}

/// GET /note
#[utoipa::path(
    get,
    path = "/note",
    tag = "Notes",
    operation_id = "list_notes",
    summary = "Get notes",
    description = "Retrieves all notes, or the notes filed under one category",
    params(
        ("categoryId" = Option<i64>, Query, description = "Only notes in this category"),
    ),
    responses(
        (status = 200, description = "Notes", body = ApiResponse<Vec<Note>>),
        (status = 400, description = "Malformed input or failed field rules"),
        (status = 404, description = "Category not found"),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NoteListParams>,
) -> AppResult<Json<ApiResponse<Vec<Note>>>> {
    let notes = linker::list_notes(state.store.as_ref(), params.category_id).await?;
    let message = match params.category_id {
        Some(category_id) => {
            format!("Successfully retrieved notes for category with ID {category_id}")
        }
        None => "Successfully retrieved all notes".to_string(),
    };
    Ok(Json(ApiResponse::ok(message, notes)))
}

/// GET /note/{id}
#[utoipa::path(
    get,
    path = "/note/{id}",
    tag = "Notes",
    operation_id = "get_note",
    summary = "Get note by ID",
    description = "Retrieves a note by its ID",
    params(
        ("id" = i64, Path, description = "Note id"),
    ),
    responses(
        (status = 200, description = "Note found", body = ApiResponse<Note>),
        (status = 404, description = "Note not found"),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Note>>> {
    let note = linker::get_note(state.store.as_ref(), id).await?;
    Ok(Json(ApiResponse::ok(
        format!("Note with ID {id} found successfully"),
        note,
    )))
}

/// POST /note
#[utoipa::path(
    post,
    path = "/note",
    tag = "Notes",
    operation_id = "create_note",
    summary = "Create a note",
    description = "Creates a note for an existing user and category",
    request_body = NewNote,
    responses(
        (status = 201, description = "Note created", body = ApiResponse<Note>),
        (status = 400, description = "Malformed input or failed field rules"),
        (status = 404, description = "User or category not found"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewNote>,
) -> AppResult<(StatusCode, Json<ApiResponse<Note>>)> {
    let note = linker::create_note(state.store.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok("Note created", note))))
}

/// PUT /note/{id}/notetitle
#[utoipa::path(
    put,
    path = "/note/{id}/notetitle",
    tag = "Notes",
    operation_id = "update_note_title",
    summary = "Update note title",
    description = "Replaces the title of a note",
    params(
        ("id" = i64, Path, description = "Note id"),
    ),
    request_body = NoteTitleUpdate,
    responses(
        (status = 200, description = "Title updated", body = ApiResponse<Note>),
        (status = 400, description = "Malformed input or failed field rules"),
        (status = 404, description = "Note not found"),
    )
)]
pub async fn update_title(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<NoteTitleUpdate>,
) -> AppResult<Json<ApiResponse<Note>>> {
    update_field(&state, id, input.into()).await
}

/// PUT /note/{id}/notebody
#[utoipa::path(
    put,
    path = "/note/{id}/notebody",
    tag = "Notes",
    operation_id = "update_note_body",
    summary = "Update note body",
    description = "Replaces the body of a note",
    params(
        ("id" = i64, Path, description = "Note id"),
    ),
    request_body = NoteBodyUpdate,
    responses(
        (status = 200, description = "Body updated", body = ApiResponse<Note>),
        (status = 400, description = "Malformed input or failed field rules"),
        (status = 404, description = "Note not found"),
    )
)]
pub async fn update_body(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<NoteBodyUpdate>,
) -> AppResult<Json<ApiResponse<Note>>> {
    update_field(&state, id, input.into()).await
}

/// PUT /note/{id}/category
#[utoipa::path(
    put,
    path = "/note/{id}/category",
    tag = "Notes",
    operation_id = "update_note_category",
    summary = "Move note to another category",
    description = "Re-files a note under another existing category",
    params(
        ("id" = i64, Path, description = "Note id"),
    ),
    request_body = NoteCategoryUpdate,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Note>),
        (status = 400, description = "Unknown category id"),
        (status = 404, description = "Note not found"),
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<NoteCategoryUpdate>,
) -> AppResult<Json<ApiResponse<Note>>> {
    update_field(&state, id, input.into()).await
}

/// Field rules run inside the linker, so these bodies are only parsed here.
async fn update_field(
    state: &AppState,
    id: DbId,
    field: NoteField,
) -> AppResult<Json<ApiResponse<Note>>> {
    let label = field.label();
    let note = linker::update_note_field(state.store.as_ref(), id, field).await?;
    Ok(Json(ApiResponse::ok(
        format!("{label} updated successfully for note with ID {id}"),
        note,
    )))
}

/// DELETE /note/{id}
#[utoipa::path(
    delete,
    path = "/note/{id}",
    tag = "Notes",
    operation_id = "delete_note",
    summary = "Delete a note",
    description = "Deletes a note by its ID",
    params(
        ("id" = i64, Path, description = "Note id"),
    ),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "Note not found"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    linker::delete_entity(state.store.as_ref(), EntityKind::Note, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
