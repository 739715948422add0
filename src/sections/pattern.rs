//! Pattern sections - detects repeated and sequential characters.
//!
//! Both only report failures; a clean password adds no entry.

use super::{Candidate, PatternResult};
use crate::types::RuleResult;

const RUN: usize = 3;

fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}

/// Flags three identical consecutive code units (e.g. "aaa").
pub fn repetition_section(password: &Candidate<'_>) -> PatternResult {
    let repeated = password
        .units()
        .windows(RUN)
        .any(|w| !is_line_terminator(w[0]) && w[0] == w[1] && w[1] == w[2]);

    repeated.then(|| RuleResult::failed("Should not contain repeating characters"))
}

/// Flags three ascending consecutive code units (e.g. "abc", "123").
pub fn sequence_section(password: &Candidate<'_>) -> PatternResult {
    let sequential = password.units().windows(RUN).any(|w| {
        let (a, b, c) = (u32::from(w[0]), u32::from(w[1]), u32::from(w[2]));
        b == a + 1 && c == b + 1
    });

    sequential.then(|| RuleResult::failed("Should not contain sequential characters"))
}
