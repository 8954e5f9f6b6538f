//! Free-text batch parsing: split a pasted blob of usernames on commas and
//! newlines, then validate each candidate before it reaches the checker.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

const MIN_USERNAME_CHARS: usize = 2;
const MAX_USERNAME_CHARS: usize = 50;
const MAX_BATCH_INPUT: usize = 100;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\n]+").expect("separator regex is valid"));

/// Split raw input into trimmed, non-empty, deduplicated usernames.
/// Order follows first occurrence; case is preserved here (the checker
/// normalizes later).
pub fn parse_usernames(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let mut seen = HashSet::new();
    let mut usernames = Vec::new();
    for raw in SEPARATORS.split(input) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            usernames.push(trimmed.to_string());
        }
    }
    usernames
}

/// Validate a single candidate username.
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err("Username cannot be empty");
    }
    if trimmed.chars().count() < MIN_USERNAME_CHARS {
        return Err("Username must be at least 2 characters");
    }
    if username.chars().count() > MAX_USERNAME_CHARS {
        return Err("Username must be less than 50 characters");
    }
    Ok(())
}

/// Outcome of validating a parsed batch. `valid` holds only when every
/// candidate passed; usable candidates are reported either way.
pub struct BatchValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub valid_usernames: Vec<String>,
}

pub fn validate_usernames(usernames: &[String]) -> BatchValidation {
    if usernames.is_empty() {
        return BatchValidation {
            valid: false,
            errors: vec!["Please enter at least one username".to_string()],
            valid_usernames: Vec::new(),
        };
    }
    if usernames.len() > MAX_BATCH_INPUT {
        return BatchValidation {
            valid: false,
            errors: vec!["Maximum 100 usernames allowed".to_string()],
            valid_usernames: Vec::new(),
        };
    }

    let mut errors = Vec::new();
    let mut valid_usernames = Vec::new();
    for username in usernames {
        match validate_username(username) {
            Ok(()) => valid_usernames.push(username.clone()),
            Err(message) => errors.push(format!("\"{username}\": {message}")),
        }
    }

    BatchValidation {
        valid: !valid_usernames.is_empty() && errors.is_empty(),
        errors,
        valid_usernames,
    }
}
