//! Loosely-typed JSON leaves and serde helpers for the site data schema.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// A JSON string or number, rendered as text.
///
/// Used for fields that hand-written `data.json` files spell both ways,
/// e.g. `"imageWidth": 1200` vs `"imageWidth": "1200"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s.trim()),
        }
    }
}

/// Empty strings count as absent in every fallback chain.
pub trait NonEmpty {
    fn non_empty(&self) -> Option<&str>;
}

impl NonEmpty for Option<String> {
    fn non_empty(&self) -> Option<&str> {
        self.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Treat `null` like a missing key for defaulted members.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// String values of a JSON object, in document order, skipping blanks.
pub fn string_values(map: &serde_json::Map<String, serde_json::Value>) -> Vec<&str> {
    map.values()
        .filter_map(serde_json::Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .collect()
}
