//! Human-readable rendering of range lists.

use crate::types::{CategoricalOption, NumericRange, RangeSpec};

/// Glyph shown for a missing lower bound.
const NEG_INFINITY: &str = "-∞";

/// Glyph shown for a missing upper bound.
const POS_INFINITY: &str = "+∞";

/// Render a range list, one entry per line.
///
/// Numeric entries read `label: min – max` with open bounds shown as
/// infinities. Options read `label: value`, or just `value` without a label.
///
/// # Example
///
/// ```
/// use soilhealth::{NumericRange, format_ranges};
///
/// let ranges = vec![NumericRange::builder().label("High").min(3.0).build().into()];
/// assert_eq!(format_ranges(&ranges), "High: 3 – +∞");
/// ```
pub fn format_ranges(ranges: &[RangeSpec]) -> String {
    ranges
        .iter()
        .map(|range| match range {
            RangeSpec::Numeric(numeric) => format_numeric(numeric),
            RangeSpec::Categorical(option) => format_option(option),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_numeric(range: &NumericRange) -> String {
    let min = range
        .min
        .map_or_else(|| NEG_INFINITY.to_string(), |min| min.to_string());
    let max = range
        .max
        .map_or_else(|| POS_INFINITY.to_string(), |max| max.to_string());
    format!("{}: {min} – {max}", range.label).trim().to_string()
}

fn format_option(option: &CategoricalOption) -> String {
    match option.label.as_deref() {
        Some(label) if !label.is_empty() => format!("{label}: {}", option.value),
        _ => option.value.clone(),
    }
}
