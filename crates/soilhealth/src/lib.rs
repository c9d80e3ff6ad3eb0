//! Soil-health parameter evaluation.
//!
//! Parameters are either typed in, chosen from a list of options, or computed
//! from other parameters with an arithmetic expression. This crate resolves
//! the value of every parameter in a set and classifies each value against
//! the parameter's ordered health ranges.
//!
//! # Example
//!
//! ```
//! use soilhealth::{InputValues, NumericRange, Parameter, ParameterKind, Severity, assess};
//!
//! let parameters = vec![
//!     Parameter::builder().id("sand").build(),
//!     Parameter::builder().id("clay").build(),
//!     Parameter::builder()
//!         .id("sand_clay_ratio")
//!         .kind(ParameterKind::Computed)
//!         .expression("sand / clay".to_string())
//!         .ranges(vec![
//!             NumericRange::builder().label("Optimal").min(1.0).max(3.0).build().into(),
//!         ])
//!         .build(),
//! ];
//! let inputs = InputValues::from([
//!     ("sand".to_string(), "40".to_string()),
//!     ("clay".to_string(), "20".to_string()),
//! ]);
//!
//! let assessment = assess(&parameters, &inputs);
//! assert_eq!(assessment.computed.get("sand_clay_ratio"), Some(2.0));
//! let ratio = assessment.rows[2].classification.as_ref().unwrap();
//! assert_eq!(ratio.severity, Severity::Good);
//! ```

pub mod assessment;
pub mod classifier;
pub mod formatter;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use assessment::{Assessment, HealthSummary, ParameterAssessment, Verdict};
pub use classifier::{KeywordSeverity, SeverityPolicy, classify, classify_with};
pub use formatter::format_ranges;
pub use interpreter::{
    Engine, Expression, LintWarning, ResolveError, compute_suggestions, evaluate,
    lint_parameters,
};
pub use parser::{ExprError, Operator, Token, to_postfix, tokenize};
pub use types::{
    CategoricalOption, Classification, ComputedValues, InputValues, MasterData, NumericRange,
    Parameter, ParameterKind, RangeSpec, Severity, TestValue,
};

/// Compute a value for every parameter using the default [`Engine`].
///
/// Never fails. Unresolvable values, including those of parameters with a
/// broken expression or caught in a dependency cycle, are NaN.
pub fn resolve_all(parameters: &[Parameter], inputs: &InputValues) -> ComputedValues {
    Engine::default().resolve_all(parameters, inputs)
}

/// Resolve and classify every parameter using the default [`Engine`].
pub fn assess(parameters: &[Parameter], inputs: &InputValues) -> Assessment {
    Engine::default().assess(parameters, inputs)
}
