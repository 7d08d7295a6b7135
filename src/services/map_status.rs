use crate::models::{MapAvailability, MapStatus};

/// Value shipped in the sample `.env`; treated as no key at all.
pub const PLACEHOLDER_KEY: &str = "YOUR_ACTUAL_API_KEY_HERE";

const VISIBLE_CHARS: usize = 5;

pub fn map_status(api_key: Option<&str>) -> MapStatus {
    match api_key.filter(|key| !key.is_empty() && *key != PLACEHOLDER_KEY) {
        Some(key) => MapStatus {
            status: MapAvailability::Available,
            message: "Maps API key is available".to_string(),
            key: Some(redact_key(key)),
        },
        None => MapStatus {
            status: MapAvailability::Unavailable,
            message: "Maps API key is missing or using placeholder".to_string(),
            key: None,
        },
    }
}

const MASK: &str = "*****";

/// Keeps the first and last five characters: `AIzaS...xY9Qk`.
///
/// Keys too short to hide anything between the two ends are masked entirely.
pub fn redact_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= VISIBLE_CHARS * 2 {
        return MASK.to_string();
    }
    let head: String = chars.iter().take(VISIBLE_CHARS).collect();
    let tail: String = chars[chars.len().saturating_sub(VISIBLE_CHARS)..].iter().collect();
    format!("{}...{}", head, tail)
}
