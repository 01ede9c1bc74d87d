use serde::{Deserialize, Serialize};

use super::operand::Operand;

/// Input for evaluating an arithmetic expression.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateInput {
    #[serde(default, deserialize_with = "super::lenient::string_or_none")]
    pub expression: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub result: f64,
    /// The expression after symbol substitution, as it was evaluated.
    pub expression: String,
    pub formatted: String,
}

/// Input for a single-operand scientific function.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScientificInput {
    #[serde(default, deserialize_with = "super::lenient::string_or_empty")]
    pub operation: String,
    #[serde(default)]
    pub value: Option<Operand>,
    /// `"rad"` or `"deg"`. Radians when omitted.
    #[serde(default, deserialize_with = "super::lenient::string_or_none")]
    pub angle: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScientificResponse {
    pub result: f64,
    pub operation: String,
    pub formatted: String,
}
