//! Search history endpoints.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use serde::Deserialize;

use crate::check::AvailabilityResult;
use crate::store::HistoryStore;

/// State for history endpoints.
#[derive(Clone)]
pub struct HistoryState {
    pub store: HistoryStore,
}

pub fn router(state: HistoryState) -> Router {
    Router::new()
        .route(
            "/",
            get(list_history).post(add_history).delete(clear_history),
        )
        .with_state(state)
}

#[derive(Deserialize)]
struct AddHistoryRequest {
    usernames: Vec<String>,
    results: Vec<AvailabilityResult>,
}

async fn list_history(State(state): State<HistoryState>) -> impl IntoResponse {
    Json(state.store.list())
}

async fn add_history(
    State(state): State<HistoryState>,
    Json(payload): Json<AddHistoryRequest>,
) -> impl IntoResponse {
    let entry = state.store.add(payload.usernames, payload.results);
    (StatusCode::CREATED, Json(entry))
}

async fn clear_history(State(state): State<HistoryState>) -> impl IntoResponse {
    state.store.clear();
    StatusCode::NO_CONTENT
}
