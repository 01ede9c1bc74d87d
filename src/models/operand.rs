use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::{plain_number, EngineError};

/// A numeric operand as sent by clients: a JSON number, a string holding one
/// (the calculator display sends its text verbatim), or anything else, which
/// is kept so the engine can reject it as [`EngineError::InvalidNumber`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Operand {
    /// Parse to a finite `f64`, rejecting anything else as [`EngineError::InvalidNumber`].
    pub fn to_f64(&self) -> Result<f64, EngineError> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| EngineError::InvalidNumber)?,
            Self::Other(_) => return Err(EngineError::InvalidNumber),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EngineError::InvalidNumber)
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Renders the operand as the client sent it, for history text.
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&plain_number(*n)),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let number: Operand = serde_json::from_value(json!(4)).unwrap();
        let text: Operand = serde_json::from_value(json!(" 2.5 ")).unwrap();
        assert_eq!(number.to_f64(), Ok(4.0));
        assert_eq!(text.to_f64(), Ok(2.5));
    }

    #[test]
    fn other_json_values_are_invalid_numbers() {
        for value in [json!(true), json!([1]), json!({ "n": 1 }), json!("NaN")] {
            let operand: Operand = serde_json::from_value(value).unwrap();
            assert_eq!(operand.to_f64(), Err(EngineError::InvalidNumber));
        }
    }

    #[test]
    fn large_numbers_display_with_exponent() {
        assert_eq!(Operand::from(1e21).to_string(), "1e+21");
        assert_eq!(Operand::from(9.0).to_string(), "9");
        assert_eq!(Operand::from("0.50").to_string(), "0.50");
    }
}
