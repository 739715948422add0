//! Length section - checks password minimum length.

use super::Candidate;
use crate::types::RuleResult;

pub const MIN_LENGTH: usize = 8;

/// Satisfied when the password has at least `MIN_LENGTH` code units.
pub fn length_section(password: &Candidate<'_>) -> RuleResult {
    RuleResult::new(
        format!("At least {} characters long", MIN_LENGTH),
        password.len() >= MIN_LENGTH,
    )
}
