// File: crates/plot-core/src/record.rs
// Summary: Raw record model and the data document wrapper.
// Notes:
// - Records are plain JSON objects. Lookups never fail: an absent key, a null,
//   or a value of the wrong kind reads as `None`.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// One row of input data, keyed by field name.
pub type RawRecord = Map<String, Value>;

/// Top-level data payload: `{ "data": [ {..}, {..} ] }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DataDocument {
    #[serde(default)]
    pub data: Vec<RawRecord>,
}

impl DataDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Numeric value of `key`, or `None` when absent or not a number.
pub fn numeric(record: &RawRecord, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

/// X-axis label of `key`. Strings pass through, numbers and booleans are
/// rendered to text, anything else is `None`.
pub fn x_label(record: &RawRecord, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
