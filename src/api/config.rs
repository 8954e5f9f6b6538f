//! Public configuration endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::availability::{Platform, Tld};

/// Version embedded at compile time from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct ConfigState {
    pub simulate_latency: bool,
}

#[derive(Serialize)]
struct ConfigResponse {
    version: &'static str,
    platforms: Vec<&'static str>,
    tlds: Vec<&'static str>,
    simulate_latency: bool,
}

pub fn router(state: ConfigState) -> Router {
    Router::new().route("/", get(get_config)).with_state(state)
}

async fn get_config(State(state): State<ConfigState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        version: VERSION,
        platforms: Platform::ALL.iter().map(|p| p.as_str()).collect(),
        tlds: Tld::ALL.iter().map(|t| t.as_str()).collect(),
        simulate_latency: state.simulate_latency,
    })
}
