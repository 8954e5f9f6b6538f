//! Availability check endpoint.
//!
//! Business-level failures (bad shape, empty or oversized batch) come back as
//! HTTP 200 with an `error` string in the envelope; only an unparseable body
//! is a 400.

use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::check::{self, CheckResponse};

/// State for the check endpoint.
#[derive(Clone)]
pub struct CheckState {
    pub simulate_latency: bool,
}

pub fn router(state: CheckState) -> Router {
    Router::new()
        .route("/check-availability", post(check_availability))
        .with_state(state)
}

async fn check_availability(
    State(state): State<CheckState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let started = Instant::now();

    let Ok(Json(body)) = body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(CheckResponse::failure("Invalid request body", 0.0)),
        )
            .into_response();
    };

    // Fake network latency, applied before validation like a real upstream
    // round-trip would be. The delay is a plain sleep so the connection layer
    // can still cancel it.
    if state.simulate_latency {
        let delay = rand::rng().random_range(50..200);
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let envelope = match check::validate_usernames(&body) {
        Ok(usernames) => {
            let results = check::check_batch(&usernames);
            debug!(
                requested = usernames.len(),
                unique = results.len(),
                "Checked availability batch"
            );
            CheckResponse {
                results,
                error: None,
                response_time: elapsed_ms(started),
            }
        }
        Err(message) => CheckResponse::failure(message, elapsed_ms(started)),
    };

    Json(envelope).into_response()
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
