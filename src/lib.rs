pub mod api;
pub mod availability;
pub mod check;
pub mod cli;
pub mod export;
pub mod input;
pub mod store;

use api::create_api_router;
use axum::Router;
use store::{HistoryStore, SnapshotStore};
use tokio::net::TcpListener;

pub struct ServerConfig {
    /// Insert a randomized 50-200 ms delay before each availability check
    pub simulate_latency: bool,
}

/// Create the application router with the given configuration.
pub fn create_app(config: &ServerConfig) -> Router {
    let history = HistoryStore::default();
    let snapshots = SnapshotStore::default();

    Router::new().nest(
        "/api",
        create_api_router(config.simulate_latency, history, snapshots),
    )
}

/// Run the server on the given listener. This function blocks until the server exits.
pub async fn run_server(config: ServerConfig, listener: TcpListener) -> Result<(), std::io::Error> {
    let app = create_app(&config);
    axum::serve(listener, app).await
}
