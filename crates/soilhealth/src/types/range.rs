use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize};

use super::Severity;

/// One entry of a parameter's ordered range list.
///
/// Entries are checked in declaration order and the first one that matches
/// decides the classification. In JSON an object with a `value` key is a
/// categorical option, anything else is a numeric range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeSpec {
    Categorical(CategoricalOption),
    Numeric(NumericRange),
}

/// An inclusive numeric interval. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct NumericRange {
    #[serde(default)]
    #[builder(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// A select option, matched exactly (case-sensitive) against the test value.
///
/// A numeric `value` in JSON is read as its text, so `7` matches the input
/// `"7"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct CategoricalOption {
    #[serde(deserialize_with = "option_text")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

fn option_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}

impl NumericRange {
    /// Whether `value` lies within both (inclusive) bounds.
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

impl From<NumericRange> for RangeSpec {
    fn from(range: NumericRange) -> Self {
        RangeSpec::Numeric(range)
    }
}

impl From<CategoricalOption> for RangeSpec {
    fn from(option: CategoricalOption) -> Self {
        RangeSpec::Categorical(option)
    }
}
