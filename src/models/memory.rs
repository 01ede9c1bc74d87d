use serde::{Deserialize, Serialize};

use super::operand::Operand;

/// Input for a memory register operation.
///
/// `value` is only read by `store`, `add` and `subtract`; a missing value
/// counts as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryInput {
    #[serde(default, deserialize_with = "super::lenient::string_or_empty")]
    pub operation: String,
    #[serde(default)]
    pub value: Option<Operand>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryResponse {
    pub memory: f64,
    pub operation: String,
    pub formatted: String,
}
