use serde::{Deserialize, Serialize};

use super::Severity;

/// The result of matching one value against its parameter's ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub message: String,
    pub severity: Severity,
}

impl Classification {
    pub fn new(label: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            severity,
        }
    }
}
