//! Character variety sections - uppercase, lowercase, digits, symbols.
//!
//! All classes are ASCII-only: a non-ASCII letter counts as a symbol.

use super::Candidate;
use crate::types::RuleResult;

pub fn uppercase_section(password: &Candidate<'_>) -> RuleResult {
    RuleResult::new(
        "Contains an uppercase letter",
        password.any_ascii(|b| b.is_ascii_uppercase()),
    )
}

pub fn lowercase_section(password: &Candidate<'_>) -> RuleResult {
    RuleResult::new(
        "Contains a lowercase letter",
        password.any_ascii(|b| b.is_ascii_lowercase()),
    )
}

pub fn digit_section(password: &Candidate<'_>) -> RuleResult {
    RuleResult::new(
        "Contains a number",
        password.any_ascii(|b| b.is_ascii_digit()),
    )
}

/// Satisfied by any code unit outside `[A-Za-z0-9]`.
pub fn symbol_section(password: &Candidate<'_>) -> RuleResult {
    let has_symbol = password
        .units()
        .iter()
        .any(|&u| !u8::try_from(u).is_ok_and(|b| b.is_ascii_alphanumeric()));
    RuleResult::new("Contains a symbol", has_symbol)
}
