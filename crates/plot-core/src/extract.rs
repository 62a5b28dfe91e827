// File: crates/plot-core/src/extract.rs
// Summary: Flatten array-valued fields into one numeric value per record.

use serde_json::Value;

use crate::field::FieldDescriptor;
use crate::record::RawRecord;

/// For each record whose `field.value` holds a non-empty list, keep the first
/// nested entry matching `field.filters` and project its `field.metric`.
///
/// Records with an absent, empty, or non-list value are dropped. A record
/// with no matching entry (or no `metric` on the match) yields `null`.
/// Without `filters`, every nested entry matches. Output records carry only
/// the x key (when present) and the value key; input order is kept.
pub fn extract_array_field(records: &[RawRecord], field: &FieldDescriptor, x_key: &str) -> Vec<RawRecord> {
    if field.metric.is_none() {
        log::warn!("array field '{}' has no metric; every value will be null", field.value);
    }

    records
        .iter()
        .filter_map(|record| {
            let nested = match record.get(&field.value) {
                Some(Value::Array(items)) if !items.is_empty() => items,
                _ => return None,
            };

            let projected = nested
                .iter()
                .find(|entry| matches_filter(entry, field))
                .and_then(|entry| field.metric.as_ref().and_then(|m| entry.get(m)))
                .cloned()
                .unwrap_or(Value::Null);

            let mut out = RawRecord::new();
            if let Some(x) = record.get(x_key) {
                out.insert(x_key.to_string(), x.clone());
            }
            out.insert(field.value.clone(), projected);
            Some(out)
        })
        .collect()
}

fn matches_filter(entry: &Value, field: &FieldDescriptor) -> bool {
    match &field.filters {
        Some(filter) => entry.get(&filter.parameter) == Some(&filter.value),
        None => true,
    }
}
