//! Per-parameter assessment rows and the overall health summary.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::types::{Classification, ComputedValues, ParameterKind, Severity, TestValue};

/// The outcome of evaluating a whole parameter set.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// Resolved number for every parameter id.
    pub computed: ComputedValues,
    /// One row per parameter, in declaration order.
    pub rows: Vec<ParameterAssessment>,
    pub summary: HealthSummary,
}

/// The value and classification of one parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterAssessment {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub kind: ParameterKind,
    pub value: TestValue,
    /// `None` when the parameter has no value to classify yet.
    pub classification: Option<Classification>,
}

/// Counts per severity and an overall verdict for a set of classifications.
///
/// Parameters without a classification are left out entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthSummary {
    pub good: usize,
    pub moderate: usize,
    pub poor: usize,
    pub total: usize,
    /// Mean severity grade, `0.0` when nothing was classified.
    pub mean_severity: f64,
    pub verdict: Verdict,
}

impl HealthSummary {
    /// Summarize classifications.
    ///
    /// # Example
    ///
    /// ```
    /// use soilhealth::{Classification, HealthSummary, Severity, Verdict};
    ///
    /// let results = [
    ///     Classification::new("Optimal", "Optimal", Severity::Good),
    ///     Classification::new("Low", "Low", Severity::Poor),
    /// ];
    /// let summary = HealthSummary::from_classifications(&results);
    /// assert_eq!(summary.total, 2);
    /// assert_eq!(summary.verdict, Verdict::NeedsAttention);
    /// ```
    pub fn from_classifications<'a>(
        classifications: impl IntoIterator<Item = &'a Classification>,
    ) -> Self {
        let (mut good, mut moderate, mut poor) = (0, 0, 0);
        for classification in classifications {
            match classification.severity {
                Severity::Good => good += 1,
                Severity::Moderate => moderate += 1,
                Severity::Poor => poor += 1,
            }
        }
        let total = good + moderate + poor;
        let mean_severity = if total == 0 {
            0.0
        } else {
            (moderate + 2 * poor) as f64 / total as f64
        };
        Self {
            good,
            moderate,
            poor,
            total,
            mean_severity,
            verdict: Verdict::from_mean_severity(mean_severity),
        }
    }
}

/// Overall health of a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Healthy,
    NeedsAttention,
    Poor,
}

impl Verdict {
    /// Below 0.5 is healthy, below 1.5 needs attention, the rest is poor.
    pub fn from_mean_severity(mean: f64) -> Self {
        if mean < 0.5 {
            Verdict::Healthy
        } else if mean < 1.5 {
            Verdict::NeedsAttention
        } else {
            Verdict::Poor
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Verdict::Healthy => Severity::Good,
            Verdict::NeedsAttention => Severity::Moderate,
            Verdict::Poor => Severity::Poor,
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let text = match self {
            Verdict::Healthy => "Overall Healthy",
            Verdict::NeedsAttention => "Needs Attention",
            Verdict::Poor => "Poor",
        };
        write!(f, "{text}")
    }
}
