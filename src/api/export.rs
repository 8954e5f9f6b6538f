//! Result export endpoints: render already-computed results as a CSV or JSON
//! download.

use axum::{
    Json, Router,
    extract::Path,
    http::header,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;

use super::error::{ApiError, ResultExt};
use crate::check::AvailabilityResult;
use crate::export;

pub fn router() -> Router {
    Router::new().route("/{format}", post(export_results))
}

#[derive(Deserialize)]
struct ExportRequest {
    results: Vec<AvailabilityResult>,
    /// Used for the download filename; falls back to "results" when omitted.
    #[serde(default)]
    usernames: Vec<String>,
}

async fn export_results(
    Path(format): Path<String>,
    Json(payload): Json<ExportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (content_type, body) = match format.as_str() {
        "csv" => (
            "text/csv",
            export::to_csv(&payload.results).export_err("Failed to render CSV")?,
        ),
        "json" => (
            "application/json",
            export::to_json(&payload.results).export_err("Failed to render JSON")?,
        ),
        _ => return Err(ApiError::bad_request("Unsupported export format")),
    };

    let filename = export::export_filename(&format, &payload.usernames);
    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}
