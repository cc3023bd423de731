//! Field-level tolerant deserialization.
//!
//! Backend records are rendered cell by cell, so a single bad field must not
//! reject the whole record. A field that is missing, `null`, or carries an
//! unexpected JSON type deserializes to `None`.
//!
//! ```ignore
//! #[derive(serde::Deserialize)]
//! struct Row {
//!     #[serde(default, deserialize_with = "contracts::domain::common::lenient::deserialize")]
//!     id: Option<i64>,
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
