//! Severity inference for ranges that do not declare one.

use crate::types::Severity;

/// Chooses a severity from a range's label when none is declared.
///
/// Implemented for any `Fn(&str) -> Severity`, so a closure can stand in for
/// domain-specific wording.
pub trait SeverityPolicy {
    fn infer(&self, label: &str) -> Severity;
}

impl<F> SeverityPolicy for F
where
    F: Fn(&str) -> Severity,
{
    fn infer(&self, label: &str) -> Severity {
        self(label)
    }
}

/// Label words that mark a healthy range.
const GOOD_KEYWORDS: &[&str] = &["optimal", "good", "healthy"];

/// Label words that mark a borderline range.
const MODERATE_KEYWORDS: &[&str] = &["moderate", "border", "medium", "fair"];

/// The default policy: case-insensitive keyword search on the label.
///
/// "Optimal", "good" or "healthy" is [`Severity::Good`]; "moderate",
/// "border", "medium" or "fair" is [`Severity::Moderate`]; anything else,
/// including an empty label, is [`Severity::Poor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSeverity;

impl SeverityPolicy for KeywordSeverity {
    fn infer(&self, label: &str) -> Severity {
        let lowered = label.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| lowered.contains(w));
        if mentions(GOOD_KEYWORDS) {
            Severity::Good
        } else if mentions(MODERATE_KEYWORDS) {
            Severity::Moderate
        } else {
            Severity::Poor
        }
    }
}
