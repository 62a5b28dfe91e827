// File: crates/plot-core/src/trim.rs
// Summary: Drop the trailing run of records whose tracked metrics sum to zero.

use crate::record::{numeric, RawRecord};

/// Return the prefix of `records` ending at the last record whose tracked
/// values do not sum to zero.
///
/// The scan walks from the final record back to index 1; index 0 is never
/// examined, so inputs with fewer than two records, or with no non-zero sum
/// in the scanned range, trim to an empty slice. Missing and non-numeric
/// values count as zero.
pub fn drop_leading_zeros<'a>(records: &'a [RawRecord], keys: &[&str]) -> &'a [RawRecord] {
    for index in (1..records.len()).rev() {
        let sum: f64 = keys
            .iter()
            .map(|key| numeric(&records[index], key).unwrap_or(0.0))
            .sum();
        if sum != 0.0 {
            return &records[..=index];
        }
    }
    &[]
}
