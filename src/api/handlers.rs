// src/api/handlers.rs
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use tokio::task;
use tracing::instrument;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{
    CreateEntryRequest, EntryDto, EntryListResponse, EntryResponse, SuccessResponse, TagsResponse,
    UpdateEntryRequest,
};
use crate::api::ApiContext;
use crate::application::services::entry_service::EntryChanges;

/// Services are synchronous (blocking Diesel / blocking reqwest), so every
/// handler runs its call on the blocking thread pool.
async fn blocking<T, F>(op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> ApiResult<T> + Send + 'static,
{
    task::spawn_blocking(op)
        .await
        .map_err(|e| ApiError::Internal(format!("blocking task failed: {}", e)))?
}

/// POST /tag-extraction
///
/// The payload is validated by hand so that a missing, empty, or non-string
/// `text` consistently yields 400 rather than a framework rejection.
#[instrument(skip_all)]
pub async fn extract_tags(
    State(ctx): State<ApiContext>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<TagsResponse>> {
    let text = payload
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("text must be a non-empty string".to_string()))?;

    let tagging = ctx.tagging.clone();
    let tags = blocking(move || tagging.extract_tags(&text).map_err(ApiError::from)).await?;

    Ok(Json(TagsResponse { tags }))
}

/// GET /entries
#[instrument(skip_all)]
pub async fn list_entries(State(ctx): State<ApiContext>) -> ApiResult<Json<EntryListResponse>> {
    let entries = ctx.entries.clone();
    let list = blocking(move || entries.list_active().map_err(ApiError::from)).await?;

    Ok(Json(EntryListResponse {
        entries: list.into_iter().map(EntryDto::from).collect(),
    }))
}

/// POST /entries
#[instrument(skip_all)]
pub async fn create_entry(
    State(ctx): State<ApiContext>,
    Json(payload): Json<CreateEntryRequest>,
) -> ApiResult<Json<EntryResponse>> {
    let entries = ctx.entries.clone();
    let entry = blocking(move || {
        entries
            .add_entry(&payload.text, payload.tags)
            .map_err(ApiError::from)
    })
    .await?;

    Ok(Json(EntryResponse {
        entry: EntryDto::from(entry),
    }))
}

/// PUT /entries/{id}
#[instrument(skip_all, fields(id))]
pub async fn update_entry(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEntryRequest>,
) -> ApiResult<Json<EntryResponse>> {
    let entries = ctx.entries.clone();
    let entry = blocking(move || {
        let changes = EntryChanges {
            text: payload.text,
            tags: payload.tags,
            is_expanded: payload.is_expanded,
        };
        entries.update_entry(id, changes).map_err(ApiError::from)
    })
    .await?;

    Ok(Json(EntryResponse {
        entry: EntryDto::from(entry),
    }))
}

/// DELETE /entries/{id}: soft delete, the entry moves to the trash.
#[instrument(skip_all, fields(id))]
pub async fn delete_entry(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
) -> ApiResult<Json<EntryResponse>> {
    let entries = ctx.entries.clone();
    let entry = blocking(move || entries.move_to_trash(id).map_err(ApiError::from)).await?;

    Ok(Json(EntryResponse {
        entry: EntryDto::from(entry),
    }))
}

/// GET /trash
#[instrument(skip_all)]
pub async fn list_trash(State(ctx): State<ApiContext>) -> ApiResult<Json<EntryListResponse>> {
    let entries = ctx.entries.clone();
    let list = blocking(move || entries.list_trashed().map_err(ApiError::from)).await?;

    Ok(Json(EntryListResponse {
        entries: list.into_iter().map(EntryDto::from).collect(),
    }))
}

/// PUT /trash/{id}: restore to the active list.
#[instrument(skip_all, fields(id))]
pub async fn restore_entry(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
) -> ApiResult<Json<EntryResponse>> {
    let entries = ctx.entries.clone();
    let entry = blocking(move || entries.restore(id).map_err(ApiError::from)).await?;

    Ok(Json(EntryResponse {
        entry: EntryDto::from(entry),
    }))
}

/// DELETE /trash/{id}: permanent, irreversible delete.
#[instrument(skip_all, fields(id))]
pub async fn purge_entry(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
) -> ApiResult<Json<SuccessResponse>> {
    let entries = ctx.entries.clone();
    let deleted = blocking(move || entries.delete_permanently(id).map_err(ApiError::from)).await?;

    if !deleted {
        return Err(ApiError::NotFound(id));
    }

    Ok(Json(SuccessResponse { success: true }))
}
