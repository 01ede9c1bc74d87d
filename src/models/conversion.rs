use serde::{Deserialize, Serialize};

use super::operand::Operand;

/// Input for a unit conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertInput {
    #[serde(default)]
    pub value: Option<Operand>,
    #[serde(default, deserialize_with = "super::lenient::string_or_empty")]
    pub from_unit: String,
    #[serde(default, deserialize_with = "super::lenient::string_or_empty")]
    pub to_unit: String,
    #[serde(default, deserialize_with = "super::lenient::string_or_empty")]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub result: f64,
    pub from_value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub formatted: String,
}
