//! Batch availability check pipeline: validate the request shape, normalize
//! the batch, run the oracle per target, and assemble the timed response
//! envelope.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::availability::{self, Platform, Tld};

/// Hard cap on batch size, counted before deduplication.
pub const MAX_BATCH_SIZE: usize = 100;

/// Availability verdicts for one unique name across every fixed target.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AvailabilityResult {
    pub username: String,
    pub platforms: BTreeMap<Platform, bool>,
    pub domains: BTreeMap<Tld, bool>,
    #[serde(rename = "checkedAt")]
    pub checked_at: String,
}

/// Response envelope for the check endpoint. Business-level failures carry an
/// `error` string with empty results; the envelope itself is always returned.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckResponse {
    pub results: Vec<AvailabilityResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "responseTime")]
    pub response_time: f64,
}

impl CheckResponse {
    pub fn failure(message: impl Into<String>, response_time: f64) -> Self {
        Self {
            results: Vec::new(),
            error: Some(message.into()),
            response_time,
        }
    }
}

/// Validate the raw request body and extract the username batch.
///
/// Checks run in order and short-circuit on the first failure; the returned
/// message goes verbatim into the response envelope.
pub fn validate_usernames(body: &Value) -> Result<Vec<String>, &'static str> {
    let Some(usernames) = body.get("usernames").and_then(Value::as_array) else {
        return Err("Invalid request: usernames must be an array");
    };
    if usernames.is_empty() {
        return Err("At least one username is required");
    }
    if usernames.len() > MAX_BATCH_SIZE {
        return Err("Maximum 100 usernames per request");
    }
    usernames
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or("Invalid request: usernames must be strings")
        })
        .collect()
}

/// Run the oracle over a validated batch. Results come back in first
/// occurrence order of the deduplicated set.
pub fn check_batch(usernames: &[String]) -> Vec<AvailabilityResult> {
    availability::normalize_batch(usernames)
        .into_iter()
        .map(|username| check_one(&username))
        .collect()
}

fn check_one(username: &str) -> AvailabilityResult {
    let platforms = Platform::ALL
        .iter()
        .map(|&platform| (platform, availability::platform_available(username, platform)))
        .collect();
    let domains = Tld::ALL
        .iter()
        .map(|&tld| (tld, availability::domain_available(username, tld)))
        .collect();
    AvailabilityResult {
        username: username.to_string(),
        platforms,
        domains,
        checked_at: now_rfc3339(),
    }
}

/// Current UTC time as an ISO-8601 string with millisecond precision.
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
