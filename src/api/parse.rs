//! Free-text batch parsing endpoint: turn a pasted blob into a clean
//! username list plus validation feedback.

use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};

use crate::input;

pub fn router() -> Router {
    Router::new().route("/", post(parse_input))
}

#[derive(Deserialize)]
struct ParseRequest {
    input: String,
}

#[derive(Serialize)]
struct ParseResponse {
    usernames: Vec<String>,
    valid: bool,
    errors: Vec<String>,
}

async fn parse_input(Json(payload): Json<ParseRequest>) -> Json<ParseResponse> {
    let usernames = input::parse_usernames(&payload.input);
    let validation = input::validate_usernames(&usernames);
    Json(ParseResponse {
        usernames,
        valid: validation.valid,
        errors: validation.errors,
    })
}
