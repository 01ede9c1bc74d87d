use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable record of one completed calculation.
///
/// Entries are created by successful calculate, scientific and convert
/// operations and live only in the engine's history log. `result` is the raw
/// numeric value, never the display string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// Canonical text of the operation, e.g. `2+3`, `sqrt(16)` or `100 cm → m`.
    pub expression: String,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
            timestamp: Utc::now(),
        }
    }
}

/// Query parameters for listing history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Number of entries to return. Defaults to 20 (also when unparsable or
    /// not positive), capped at 100.
    #[serde(default, deserialize_with = "super::lenient::positive_or_none")]
    pub limit: Option<u32>,
}

/// Most recent history entries, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
    /// Entries recorded since the last clear, including ones no longer retained.
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearHistoryResponse {
    pub message: String,
}
