//! Evaluation output types.

use crate::meter::{Meter, meter_for_score};

/// Highest score a password can reach (one point per positive criterion).
pub const MAX_SCORE: u8 = 5;

/// Outcome of a single heuristic rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    pub description: String,
    pub satisfied: bool,
}

impl RuleResult {
    pub fn new(description: impl Into<String>, satisfied: bool) -> Self {
        Self {
            description: description.into(),
            satisfied,
        }
    }

    pub(crate) fn failed(description: impl Into<String>) -> Self {
        Self::new(description, false)
    }
}

/// Result of evaluating one password.
///
/// `results` is in evaluation order, which is also display order:
/// the five scored criteria, the common-password entry, then the
/// repetition and sequence failures when they apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrengthReport {
    pub results: Vec<RuleResult>,
    /// Number of satisfied scored criteria, `0..=MAX_SCORE`.
    pub score: u8,
}

impl StrengthReport {
    /// Report for an empty password.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Scored criteria only (the first five entries, or none).
    pub fn scored(&self) -> &[RuleResult] {
        let n = self.results.len().min(MAX_SCORE as usize);
        &self.results[..n]
    }

    /// Entries that were not satisfied, in display order.
    pub fn failures(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| !r.satisfied)
    }

    pub fn meter(&self) -> Meter {
        meter_for_score(self.score)
    }
}
