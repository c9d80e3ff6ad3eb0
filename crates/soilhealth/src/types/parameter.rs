use bon::Builder;
use serde::{Deserialize, Serialize};

use super::RangeSpec;

/// How a parameter obtains its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// A number typed in by the user.
    #[default]
    Input,
    /// Derived from other parameters through an arithmetic expression.
    Computed,
    /// One of a fixed set of textual options.
    Select,
}

/// A soil-health parameter definition.
///
/// # Example
///
/// ```
/// use soilhealth::{NumericRange, Parameter, ParameterKind};
///
/// let ph = Parameter::builder()
///     .id("ph")
///     .name("Soil pH")
///     .ranges(vec![
///         NumericRange::builder().label("Optimal").min(6.0).max(7.5).build().into(),
///     ])
///     .build();
///
/// assert_eq!(ph.kind, ParameterKind::Input);
/// assert_eq!(ph.ranges.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct Parameter {
    /// Key of this parameter within its set; expressions refer to it by id.
    pub id: String,

    #[serde(default)]
    #[builder(default)]
    pub name: String,

    #[serde(default)]
    #[builder(default)]
    pub description: String,

    /// Display-only unit such as `mg/kg`.
    #[serde(default)]
    #[builder(default)]
    pub unit: String,

    #[serde(rename = "type", default)]
    #[builder(default)]
    pub kind: ParameterKind,

    /// Arithmetic formula over other parameter ids, used when `kind` is
    /// [`ParameterKind::Computed`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Ordered range list; the first matching entry wins.
    #[serde(default)]
    #[builder(default)]
    pub ranges: Vec<RangeSpec>,
}

impl Parameter {
    /// The expression to evaluate, if this parameter is computed and has a
    /// non-blank one. Otherwise the parameter takes its raw input value.
    pub fn formula(&self) -> Option<&str> {
        if self.kind != ParameterKind::Computed {
            return None;
        }
        self.expression
            .as_deref()
            .filter(|expr| !expr.trim().is_empty())
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// A set of parameter definitions as exchanged with the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MasterData {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}
