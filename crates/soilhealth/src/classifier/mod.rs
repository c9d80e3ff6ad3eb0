//! Range classification.
//!
//! Maps a resolved value onto the first matching entry of a parameter's
//! ordered range list. Numbers are checked against numeric ranges, text
//! against categorical options. A value no entry accepts gets an
//! "Out of range" classification of moderate severity.

mod policy;

pub use policy::{KeywordSeverity, SeverityPolicy};

use crate::types::{CategoricalOption, Classification, NumericRange, RangeSpec, Severity, TestValue};

/// Label given to values no range accepts.
pub const OUT_OF_RANGE: &str = "Out of range";

/// Message for text that matches no option.
pub const NOT_IN_OPTIONS: &str = "Value not in options";

/// Message for numbers outside every range.
pub const OUTSIDE_RANGES: &str = "Value outside defined ranges";

/// Label used for a numeric range that has none.
const UNCATEGORIZED: &str = "Uncategorized";

/// Classify a value using the default [`KeywordSeverity`] policy.
///
/// Returns `None` when there is nothing to classify: a NaN number or blank
/// text.
///
/// # Example
///
/// ```
/// use soilhealth::{NumericRange, Severity, TestValue, classify};
///
/// let ranges = vec![NumericRange::builder().label("Optimal").min(0.0).max(10.0).build().into()];
///
/// let inside = classify(&TestValue::Numeric(5.0), &ranges).unwrap();
/// assert_eq!(inside.severity, Severity::Good);
///
/// let outside = classify(&TestValue::Numeric(15.0), &ranges).unwrap();
/// assert_eq!(outside.label, "Out of range");
/// assert_eq!(outside.severity, Severity::Moderate);
///
/// assert!(classify(&TestValue::Numeric(f64::NAN), &ranges).is_none());
/// ```
pub fn classify(value: &TestValue, ranges: &[RangeSpec]) -> Option<Classification> {
    classify_with(value, ranges, &KeywordSeverity)
}

/// Classify a value, inferring missing severities with `policy`.
pub fn classify_with<P>(value: &TestValue, ranges: &[RangeSpec], policy: &P) -> Option<Classification>
where
    P: SeverityPolicy + ?Sized,
{
    if value.is_absent() {
        return None;
    }
    let classification = match value {
        TestValue::Numeric(n) => ranges
            .iter()
            .find_map(|r| match r {
                RangeSpec::Numeric(range) => range.contains(*n).then_some(range),
                RangeSpec::Categorical(_) => None,
            })
            .map_or_else(
                || Classification::new(OUT_OF_RANGE, OUTSIDE_RANGES, Severity::Moderate),
                |range| numeric_classification(range, policy),
            ),
        TestValue::Categorical(text) => {
            let text = text.trim();
            ranges
                .iter()
                .find_map(|r| match r {
                    RangeSpec::Categorical(option) => (option.value == text).then_some(option),
                    RangeSpec::Numeric(_) => None,
                })
                .map_or_else(
                    || Classification::new(OUT_OF_RANGE, NOT_IN_OPTIONS, Severity::Moderate),
                    |option| categorical_classification(option, policy),
                )
        }
    };
    Some(classification)
}

fn numeric_classification<P>(range: &NumericRange, policy: &P) -> Classification
where
    P: SeverityPolicy + ?Sized,
{
    let label = non_blank(Some(&range.label));
    Classification::new(
        label.unwrap_or(UNCATEGORIZED),
        non_blank(range.message.as_ref()).or(label).unwrap_or_default(),
        range.severity.unwrap_or_else(|| policy.infer(&range.label)),
    )
}

fn categorical_classification<P>(option: &CategoricalOption, policy: &P) -> Classification
where
    P: SeverityPolicy + ?Sized,
{
    let label = non_blank(option.label.as_ref());
    Classification::new(
        label.unwrap_or(&option.value),
        non_blank(option.message.as_ref())
            .or(label)
            .unwrap_or(&option.value),
        option
            .severity
            .unwrap_or_else(|| policy.infer(option.label.as_deref().unwrap_or_default())),
    )
}

/// Blank text fields count as unset.
fn non_blank(text: Option<&String>) -> Option<&str> {
    text.map(String::as_str).filter(|s| !s.is_empty())
}
