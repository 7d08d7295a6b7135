use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapAvailability {
    Available,
    Unavailable,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapStatus {
    pub status: MapAvailability,
    pub message: String,
    /// Redacted credential, `first5...last5`; `null` when unavailable.
    pub key: Option<String>,
}
