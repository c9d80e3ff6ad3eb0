use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw, externally supplied values keyed by parameter id.
///
/// Missing or empty entries mean "no value".
pub type InputValues = HashMap<String, String>;

/// A value ready for classification.
///
/// Select parameters are matched by text, everything else by number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestValue {
    Numeric(f64),
    Categorical(String),
}

impl TestValue {
    /// Whether this value carries nothing to classify (NaN or blank text).
    pub fn is_absent(&self) -> bool {
        match self {
            TestValue::Numeric(n) => n.is_nan(),
            TestValue::Categorical(s) => s.trim().is_empty(),
        }
    }
}

impl From<f64> for TestValue {
    fn from(n: f64) -> Self {
        TestValue::Numeric(n)
    }
}

impl From<String> for TestValue {
    fn from(s: String) -> Self {
        TestValue::Categorical(s)
    }
}

impl From<&str> for TestValue {
    fn from(s: &str) -> Self {
        TestValue::Categorical(s.to_string())
    }
}

/// Resolved numeric value of every parameter in a set.
///
/// NaN marks a value that could not be resolved. Serializes as a JSON object
/// with `null` in place of NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ComputedValues(HashMap<String, f64>);

impl ComputedValues {
    /// The resolved value for `id`, if `id` was part of the resolved set.
    pub fn get(&self, id: &str) -> Option<f64> {
        self.0.get(id).copied()
    }

    /// The resolved value for `id`, NaN when unknown.
    pub fn value(&self, id: &str) -> f64 {
        self.get(id).unwrap_or(f64::NAN)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, f64>> for ComputedValues {
    fn from(values: HashMap<String, f64>) -> Self {
        Self(values)
    }
}

/// Convert a raw input string to a number.
///
/// Surrounding whitespace is ignored. Empty or unparsable text is NaN. Of the
/// spelled-out non-finite forms only `Infinity` (optionally signed) is
/// accepted; `inf`, `infinity` and `NaN` are NaN. Decimal literals too large
/// for `f64` still overflow to an infinity.
pub fn parse_input(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| {
            let number = s.parse::<f64>().ok()?;
            let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
            let accepted = number.is_finite()
                || unsigned == "Infinity"
                || unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.');
            accepted.then_some(number)
        })
        .unwrap_or(f64::NAN)
}
