//! CSV/JSON export of availability results.

use chrono::Utc;

use crate::check::AvailabilityResult;

/// One flattened export row: a single (name, target) verdict.
pub struct ExportRow {
    pub username: String,
    /// Platform name for social rows, `name.tld` for domain rows.
    pub target: String,
    pub available: bool,
    pub kind: &'static str,
}

/// Flatten results into one row per (name, platform) and (name, TLD) pair,
/// platforms first, preserving result order.
pub fn flatten_results(results: &[AvailabilityResult]) -> Vec<ExportRow> {
    let mut rows = Vec::new();
    for result in results {
        for (platform, &available) in &result.platforms {
            rows.push(ExportRow {
                username: result.username.clone(),
                target: platform.as_str().to_string(),
                available,
                kind: "social",
            });
        }
        for (tld, &available) in &result.domains {
            rows.push(ExportRow {
                username: result.username.clone(),
                target: format!("{}{}", result.username, tld.as_str()),
                available,
                kind: "domain",
            });
        }
    }
    rows
}

pub fn to_csv(results: &[AvailabilityResult]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Username", "Platform/Domain", "Available", "Type"])?;
    for row in flatten_results(results) {
        writer.write_record([
            row.username.as_str(),
            row.target.as_str(),
            if row.available { "Yes" } else { "No" },
            row.kind,
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn to_json(results: &[AvailabilityResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Download filename: the checked usernames joined with dashes (or "results"
/// when none are known), the current date, and the format extension.
pub fn export_filename(extension: &str, usernames: &[String]) -> String {
    let date = Utc::now().format("%Y-%m-%d");
    let stem = if usernames.is_empty() {
        "results".to_string()
    } else {
        usernames.join("-")
    };
    format!("{stem}-{date}.{extension}")
}
