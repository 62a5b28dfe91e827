// File: crates/plot-core/src/text.rs
// Summary: Number formatting for hover labels.

use num_format::{Locale, ToFormattedString};

/// Thousands-grouped number with at most one decimal, dropped when zero:
/// `1234.56 -> "1,234.6"`, `12.0 -> "12"`, `-0.04 -> "0"`.
///
/// Magnitudes past the `u128` range (and non-finite values) fall back to the
/// plain float rendering.
pub fn format_hover(value: f64) -> String {
    let scaled = (value.abs() * 10.0).round();
    if !scaled.is_finite() || scaled >= u128::MAX as f64 {
        return value.to_string();
    }
    let tenths = scaled as u128;
    let (whole, frac) = (tenths / 10, tenths % 10);

    let sign = if value < 0.0 && tenths > 0 { "-" } else { "" };
    let whole = whole.to_formatted_string(&Locale::en);
    if frac > 0 {
        format!("{sign}{whole}.{frac}")
    } else {
        format!("{sign}{whole}")
    }
}
