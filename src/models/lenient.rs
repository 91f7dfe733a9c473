//! Serde helpers for values coming back from the spreadsheet.
//!
//! Sheet cells holding digits (NIP, numeric passwords) come back as JSON
//! numbers, and empty cells as `""` or `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string(v: Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// String field that may be sent as a number; `null` becomes `""`.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(value_to_string(v).unwrap_or_default())
}

/// Optional string field; `null` and blank strings become `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(value_to_string(v)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "super::string")]
        nip: String,
        #[serde(default, deserialize_with = "super::opt_string")]
        rank: Option<String>,
    }

    #[test]
    fn numbers_become_strings() {
        let r: Row = serde_json::from_str(r#"{"nip": 19800101, "rank": "  "}"#).unwrap();
        assert_eq!(r.nip, "19800101");
        assert_eq!(r.rank, None);
    }

    #[test]
    fn missing_optional_is_none() {
        let r: Row = serde_json::from_str(r#"{"nip": "123"}"#).unwrap();
        assert_eq!(r.rank, None);
    }
}
