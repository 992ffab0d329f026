//! Verdict types for sort correctness checks

use serde::{Deserialize, Serialize};

/// Outcome of comparing one algorithm's output to the reference ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Output matched the reference sort
    Correct,
    /// Output disagreed with the reference sort
    Mismatch,
}

impl Verdict {
    /// Build a verdict by comparing an algorithm's output to the reference
    pub fn check(output: &[i64], reference: &[i64]) -> Self {
        if output == reference {
            Verdict::Correct
        } else {
            Verdict::Mismatch
        }
    }

    /// Get short code for verdict
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::Correct => "OK",
            Verdict::Mismatch => "MISMATCH",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Verdict::Mismatch)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
