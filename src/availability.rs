//! Deterministic pseudo-availability oracle.
//!
//! Verdicts are a pure function of the candidate name: a 32-bit polynomial
//! hash of the normalized name is compared against a per-target bias
//! threshold, with reserved names forced unavailable. No network lookup is
//! ever made; the bias constants only tune how plausible the demo data looks.

use serde::{Deserialize, Serialize};

/// Social platform targets. The set is closed and fixed at build time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Tiktok,
    Linkedin,
    Github,
    Youtube,
    Twitch,
    Discord,
    Reddit,
    Medium,
}

impl Platform {
    pub const ALL: [Platform; 10] = [
        Platform::Twitter,
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Linkedin,
        Platform::Github,
        Platform::Youtube,
        Platform::Twitch,
        Platform::Discord,
        Platform::Reddit,
        Platform::Medium,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Linkedin => "linkedin",
            Platform::Github => "github",
            Platform::Youtube => "youtube",
            Platform::Twitch => "twitch",
            Platform::Discord => "discord",
            Platform::Reddit => "reddit",
            Platform::Medium => "medium",
        }
    }

    /// Brand-protected names that are always taken on this platform.
    fn reserved_names(self) -> &'static [&'static str] {
        match self {
            Platform::Twitter => &["twitter", "support", "status", "help", "blog", "developer"],
            Platform::Instagram => &["instagram", "support", "about", "explore", "help"],
            Platform::Tiktok => &["tiktok", "support", "explore", "discover"],
            Platform::Linkedin => &["linkedin", "jobs", "help", "about", "safety"],
            Platform::Github => &[
                "github",
                "support",
                "about",
                "github-community",
                "github-support",
            ],
            Platform::Youtube => &["youtube", "user", "channel", "watch", "results"],
            Platform::Twitch => &["twitch", "directory", "help", "jobs", "brand"],
            Platform::Discord => &["discord", "support", "help", "developers", "hypesquad"],
            Platform::Reddit => &["reddit", "help", "announcements", "mods", "redditmobile"],
            Platform::Medium => &["medium", "support", "help", "trending", "about"],
        }
    }

    /// Fraction (0-100) of hash outcomes reported available on this platform.
    fn bias(self) -> u32 {
        match self {
            Platform::Twitter => 30,
            Platform::Instagram => 40,
            Platform::Tiktok => 50,
            Platform::Linkedin => 35,
            Platform::Github => 25,
            Platform::Youtube => 45,
            Platform::Twitch => 55,
            Platform::Discord => 60,
            Platform::Reddit => 50,
            Platform::Medium => 40,
        }
    }
}

/// Domain suffix targets. Serialized with the leading dot, e.g. `".com"`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tld {
    #[serde(rename = ".com")]
    Com,
    #[serde(rename = ".net")]
    Net,
    #[serde(rename = ".org")]
    Org,
    #[serde(rename = ".io")]
    Io,
    #[serde(rename = ".co")]
    Co,
    #[serde(rename = ".dev")]
    Dev,
}

impl Tld {
    pub const ALL: [Tld; 6] = [Tld::Com, Tld::Net, Tld::Org, Tld::Io, Tld::Co, Tld::Dev];

    pub fn as_str(self) -> &'static str {
        match self {
            Tld::Com => ".com",
            Tld::Net => ".net",
            Tld::Org => ".org",
            Tld::Io => ".io",
            Tld::Co => ".co",
            Tld::Dev => ".dev",
        }
    }

    /// Fraction (0-100) of hash outcomes reported registrable under this TLD.
    fn bias(self) -> u32 {
        match self {
            Tld::Com => 20,
            Tld::Net => 40,
            Tld::Org => 50,
            Tld::Io => 30,
            Tld::Co => 35,
            Tld::Dev => 45,
        }
    }
}

/// Polynomial rolling hash (`h = h*31 + c`) over UTF-16 code units with
/// 32-bit signed wraparound at every step, then the absolute value of the
/// final signed result. The wrapping arithmetic is part of the contract:
/// outputs must stay bit-compatible with the 32-bit overflow semantics the
/// availability data was tuned against.
pub fn hash_name(name: &str) -> u32 {
    let normalized = name.trim().to_lowercase();
    let mut hash: i32 = 0;
    for unit in normalized.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    // unsigned_abs maps i32::MIN to 2147483648 instead of wrapping back
    hash.unsigned_abs()
}

/// Whether `name` looks available on `platform`.
///
/// Empty and reserved names are always taken; everything else is decided by
/// the hash against the platform bias.
pub fn platform_available(name: &str, platform: Platform) -> bool {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return false;
    }
    if platform.reserved_names().contains(&normalized.as_str()) {
        return false;
    }
    hash_name(&normalized) % 100 < platform.bias()
}

/// Whether `name` looks registrable under `tld`.
///
/// Names shorter than two characters are too short to register anywhere. The
/// hash input is the name concatenated with the TLD literal so the same name
/// gets an independent verdict per suffix.
pub fn domain_available(name: &str, tld: Tld) -> bool {
    let normalized = name.trim().to_lowercase();
    if normalized.encode_utf16().count() < 2 {
        return false;
    }
    hash_name(&format!("{}{}", normalized, tld.as_str())) % 100 < tld.bias()
}

/// Normalize a raw batch: trim, drop entries that become empty, and collapse
/// case-insensitive duplicates to their first occurrence, lower-cased.
pub fn normalize_batch(names: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::new();
    for name in names {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            unique.push(normalized);
        }
    }
    unique
}
