//! Lenient field decoders for backend payloads.
//!
//! The data-quality service is not strict about scalar types: identifiers may
//! be integers or strings and metric values may be numbers, strings or null.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Renders a scalar JSON value for display. `null` yields `None`.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Accepts a string, number, bool or null.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_text))
}

/// Like [`opt_text`] but null collapses to an empty string.
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    opt_text(deserializer).map(Option::unwrap_or_default)
}

/// Missing or null `include` means the check participates.
pub fn include_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

pub fn default_include() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_render_as_text() {
        assert_eq!(value_text(&json!(null)), None);
        assert_eq!(value_text(&json!("0.97")), Some("0.97".to_string()));
        assert_eq!(value_text(&json!(12)), Some("12".to_string()));
        assert_eq!(value_text(&json!(true)), Some("true".to_string()));
    }
}
