//! Saved-result snapshot endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
};
use serde::Deserialize;

use super::error::{ApiError, validate_uuid};
use crate::check::AvailabilityResult;
use crate::store::SnapshotStore;

/// State for snapshot endpoints.
#[derive(Clone)]
pub struct SnapshotsState {
    pub store: SnapshotStore,
}

pub fn router(state: SnapshotsState) -> Router {
    Router::new()
        .route(
            "/",
            get(list_snapshots)
                .post(save_snapshot)
                .delete(clear_snapshots),
        )
        .route("/{uuid}", put(rename_snapshot))
        .route("/{uuid}", delete(delete_snapshot))
        .with_state(state)
}

#[derive(Deserialize)]
struct SaveSnapshotRequest {
    usernames: Vec<String>,
    results: Vec<AvailabilityResult>,
    name: Option<String>,
}

#[derive(Deserialize)]
struct RenameSnapshotRequest {
    name: String,
}

async fn list_snapshots(State(state): State<SnapshotsState>) -> impl IntoResponse {
    Json(state.store.list())
}

async fn save_snapshot(
    State(state): State<SnapshotsState>,
    Json(payload): Json<SaveSnapshotRequest>,
) -> impl IntoResponse {
    let snapshot = state
        .store
        .save(payload.usernames, payload.results, payload.name);
    (StatusCode::CREATED, Json(snapshot))
}

async fn rename_snapshot(
    State(state): State<SnapshotsState>,
    Path(uuid): Path<String>,
    Json(payload): Json<RenameSnapshotRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_uuid(&uuid)?;

    if payload.name.trim().is_empty() {
        return Err(ApiError::bad_request("Snapshot name cannot be empty"));
    }

    if !state.store.rename(&uuid, payload.name.trim()) {
        return Err(ApiError::not_found("Snapshot not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_snapshot(
    State(state): State<SnapshotsState>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    validate_uuid(&uuid)?;

    if !state.store.delete(&uuid) {
        return Err(ApiError::not_found("Snapshot not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn clear_snapshots(State(state): State<SnapshotsState>) -> impl IntoResponse {
    state.store.clear();
    StatusCode::NO_CONTENT
}
