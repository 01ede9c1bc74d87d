//! Field deserializers that never fail on a wrongly typed value.
//!
//! A field of the wrong JSON type is read as absent, so the engine reports
//! the same error it would for a missing field instead of the request being
//! rejected during extraction.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A JSON string, or `None` for any other value.
pub(crate) fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// A JSON string, or the empty string for any other value.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_or_none(deserializer)?.unwrap_or_default())
}

/// A positive integer from a query string; anything unparsable, zero or
/// negative reads as `None`.
pub(crate) fn positive_or_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|n| *n > 0))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "super::string_or_none")]
        maybe: Option<String>,
        #[serde(default, deserialize_with = "super::string_or_empty")]
        text: String,
    }

    #[derive(Debug, Deserialize)]
    struct Limit {
        #[serde(default, deserialize_with = "super::positive_or_none")]
        limit: Option<u32>,
    }

    #[test]
    fn non_strings_read_as_absent() {
        let fields: Fields = serde_json::from_value(json!({ "maybe": 5, "text": null })).unwrap();
        assert_eq!(fields.maybe, None);
        assert_eq!(fields.text, "");
    }

    #[test]
    fn strings_pass_through() {
        let fields: Fields = serde_json::from_value(json!({ "maybe": "2+2", "text": "sin" })).unwrap();
        assert_eq!(fields.maybe.as_deref(), Some("2+2"));
        assert_eq!(fields.text, "sin");
    }

    #[test]
    fn limits_parse_only_when_positive() {
        let parse = |raw: &str| -> Option<u32> {
            serde_json::from_value::<Limit>(json!({ "limit": raw }))
                .unwrap()
                .limit
        };
        assert_eq!(parse("15"), Some(15));
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("0"), None);
        assert_eq!(parse("-5"), None);
    }
}
