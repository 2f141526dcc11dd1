//! Batch handlers
//!
//! Thin HTTP layer: unwrap the request envelope, run the request through
//! the validator, then hand the accepted form to the store. Acceptance
//! maps to 200, rejection to 400.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::extract::AppJson;
use crate::state::AppState;

use super::{
    request::{AddUsersRequest, CourseBatchRequest, RequestEnvelope, SearchBatchRequest},
    response::{AddUsersResponse, BatchResponse, SearchBatchResponse},
};

/// POST /v1/course/batch/create
///
/// Create a new course batch.
pub async fn create_batch(
    State(state): State<AppState>,
    AppJson(envelope): AppJson<RequestEnvelope<CourseBatchRequest>>,
) -> AppResult<Json<BatchResponse>> {
    let payload = envelope.request;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let new_batch = state.validator().validate_create(&payload)?;
    let batch = state.store().create(new_batch).await?;

    tracing::info!(batch_id = %batch.id, course_id = %batch.course_id, "batch created");
    Ok(Json(batch.into()))
}

/// PATCH /v1/course/batch/update
///
/// Update an existing course batch, identified by `id` in the payload.
pub async fn update_batch(
    State(state): State<AppState>,
    AppJson(envelope): AppJson<RequestEnvelope<CourseBatchRequest>>,
) -> AppResult<Json<BatchResponse>> {
    let payload = envelope.request;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let batch_id = payload
        .id
        .clone()
        .ok_or_else(|| AppError::Validation("id is required".to_string()))?;

    let update = state.validator().validate_update(&payload)?;
    let batch = state.store().update(&batch_id, update).await?;

    tracing::info!(batch_id = %batch.id, "batch updated");
    Ok(Json(batch.into()))
}

/// GET /v1/course/batch/read/{batch_id}
///
/// Read a batch by id.
pub async fn read_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> AppResult<Json<BatchResponse>> {
    let batch = state
        .store()
        .get(&batch_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Batch not found: {batch_id}")))?;

    Ok(Json(batch.into()))
}

/// POST /v1/course/batch/search
///
/// Search batches. Filter interpretation is delegated to the store;
/// unmatched filters yield an empty result, not an error.
pub async fn search_batches(
    State(state): State<AppState>,
    AppJson(envelope): AppJson<RequestEnvelope<SearchBatchRequest>>,
) -> AppResult<Json<SearchBatchResponse>> {
    let filters = envelope.request.filters.unwrap_or(serde_json::Value::Null);
    let batches = state.store().search(&filters).await?;

    Ok(Json(SearchBatchResponse {
        count: batches.len(),
        batches: batches.into_iter().map(BatchResponse::from).collect(),
    }))
}

/// POST /v1/course/batch/users/add/{batch_id}
///
/// Enroll users into a batch. The path parameter identifies the batch;
/// a `batchId` in the body is ignored.
pub async fn add_users_to_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
    AppJson(envelope): AppJson<RequestEnvelope<AddUsersRequest>>,
) -> AppResult<Json<AddUsersResponse>> {
    let user_ids = state.validator().validate_add_users(&envelope.request)?;
    let added = state.store().add_users(&batch_id, &user_ids).await?;

    let batch = state
        .store()
        .get(&batch_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Batch not found: {batch_id}")))?;

    tracing::info!(batch_id = %batch_id, added, "users added to batch");
    Ok(Json(AddUsersResponse {
        batch_id,
        added,
        enrolled_users: batch.enrolled_users,
    }))
}
