//! User-facing entry point bundling the tunables of an evaluation.

use std::sync::Arc;

use bon::Builder;
use tracing::instrument;

use crate::assessment::{Assessment, HealthSummary, ParameterAssessment};
use crate::classifier::{KeywordSeverity, SeverityPolicy, classify_with};
use crate::interpreter::ResolveContext;
use crate::interpreter::resolver::{index_parameters, resolve_parameter};
use crate::types::{
    Classification, ComputedValues, InputValues, Parameter, ParameterKind, RangeSpec, TestValue,
};

/// Resolves and classifies parameter sets.
///
/// An engine holds configuration only. Every call builds its own memo table
/// and resolution path, so one engine can serve concurrent callers.
///
/// # Example
///
/// ```
/// use soilhealth::{Engine, InputValues, Parameter, ParameterKind};
///
/// let engine = Engine::builder().max_depth(32).build();
/// let parameters = vec![
///     Parameter::builder().id("sand").build(),
///     Parameter::builder()
///         .id("half_sand")
///         .kind(ParameterKind::Computed)
///         .expression("sand / 2".to_string())
///         .build(),
/// ];
/// let inputs = InputValues::from([("sand".to_string(), "40".to_string())]);
///
/// let values = engine.resolve_all(&parameters, &inputs);
/// assert_eq!(values.get("half_sand"), Some(20.0));
/// ```
#[derive(Clone, Builder)]
pub struct Engine {
    /// Longest dependency chain followed before a reference resolves to NaN.
    /// Unlimited when unset.
    max_depth: Option<usize>,

    /// Severity assigned to ranges that do not declare one.
    #[builder(default = default_policy())]
    severity_policy: Arc<dyn SeverityPolicy + Send + Sync>,
}

fn default_policy() -> Arc<dyn SeverityPolicy + Send + Sync> {
    Arc::new(KeywordSeverity)
}

impl Default for Engine {
    fn default() -> Self {
        Engine::builder().build()
    }
}

impl Engine {
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Compute a value for every parameter in the set.
    ///
    /// The result has one entry per distinct id. Never fails; entries that
    /// cannot be resolved are NaN.
    #[instrument(level = "debug", skip_all, fields(count = parameters.len()))]
    pub fn resolve_all(&self, parameters: &[Parameter], inputs: &InputValues) -> ComputedValues {
        let index = index_parameters(parameters);
        let mut ctx = match self.max_depth {
            Some(max_depth) => ResolveContext::with_max_depth(max_depth),
            None => ResolveContext::new(),
        };
        for parameter in parameters {
            resolve_parameter(&parameter.id, &index, inputs, &mut ctx);
        }
        ctx.into_values()
    }

    /// Classify a value against an ordered range list.
    ///
    /// Returns `None` when the value is absent (NaN or blank text).
    pub fn classify(&self, value: &TestValue, ranges: &[RangeSpec]) -> Option<Classification> {
        classify_with(value, ranges, self.severity_policy.as_ref())
    }

    /// Resolve every parameter and classify each one's current value.
    ///
    /// Select parameters are classified by their raw text, all others by their
    /// resolved number. Rows follow declaration order.
    pub fn assess(&self, parameters: &[Parameter], inputs: &InputValues) -> Assessment {
        let computed = self.resolve_all(parameters, inputs);
        let rows: Vec<ParameterAssessment> = parameters
            .iter()
            .map(|parameter| {
                let value = match parameter.kind {
                    ParameterKind::Select => TestValue::Categorical(
                        inputs.get(&parameter.id).cloned().unwrap_or_default(),
                    ),
                    ParameterKind::Input | ParameterKind::Computed => {
                        TestValue::Numeric(computed.value(&parameter.id))
                    }
                };
                let classification = self.classify(&value, &parameter.ranges);
                ParameterAssessment {
                    id: parameter.id.clone(),
                    name: parameter.display_name().to_string(),
                    unit: parameter.unit.clone(),
                    kind: parameter.kind,
                    value,
                    classification,
                }
            })
            .collect();
        let summary =
            HealthSummary::from_classifications(rows.iter().filter_map(|r| r.classification.as_ref()));
        Assessment {
            computed,
            rows,
            summary,
        }
    }
}
