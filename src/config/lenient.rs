//! Field-tolerant decode helpers.
//!
//! Decoding is try-or-default per field: a malformed value decodes to the
//! field's documented default instead of failing the whole record. Combine
//! with `#[serde(default = "...")]` so a missing field takes the same
//! default as a malformed one.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder for string fields with no usable value.
pub const NOT_SET: &str = "<not set>";

pub fn not_set() -> String {
    NOT_SET.to_string()
}

/// Decode to `T`, substituting `T::default()` on a type mismatch.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decode a bool, substituting `true` on a type mismatch.
pub fn or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or(true))
}

/// Decode a string, substituting the `<not set>` marker on a type mismatch.
pub fn or_not_set<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|_| not_set()))
}
