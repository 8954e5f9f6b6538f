mod check;
mod config;
mod error;
mod export;
mod history;
mod parse;
mod snapshots;

use axum::Router;

use crate::store::{HistoryStore, SnapshotStore};

/// Create the API router.
pub fn create_api_router(
    simulate_latency: bool,
    history: HistoryStore,
    snapshots: SnapshotStore,
) -> Router {
    let check_state = check::CheckState { simulate_latency };

    let history_state = history::HistoryState { store: history };

    let snapshots_state = snapshots::SnapshotsState { store: snapshots };

    let config_state = config::ConfigState { simulate_latency };

    Router::new()
        .merge(check::router(check_state))
        .nest("/history", history::router(history_state))
        .nest("/snapshots", snapshots::router(snapshots_state))
        .nest("/export", export::router())
        .nest("/parse", parse::router())
        .nest("/config", config::router(config_state))
}
