use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordinal health grade of a classified value. Lower is healthier.
///
/// Serializes as its integer grade (`0`, `1` or `2`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Good = 0,
    Moderate = 1,
    Poor = 2,
}

impl Severity {
    /// The numeric grade of this severity.
    pub fn grade(self) -> u8 {
        self as u8
    }
}

/// A severity grade outside `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid severity grade {0}, expected 0, 1 or 2")]
pub struct InvalidSeverity(pub u8);

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(grade: u8) -> Result<Self, Self::Error> {
        match grade {
            0 => Ok(Severity::Good),
            1 => Ok(Severity::Moderate),
            2 => Ok(Severity::Poor),
            other => Err(InvalidSeverity(other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.grade()
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Severity::Good => "good",
            Severity::Moderate => "moderate",
            Severity::Poor => "poor",
        };
        write!(f, "{name}")
    }
}
