//! Password evaluation sections
//!
//! Each section checks one aspect of the password and yields the
//! feedback entries it contributes.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use pattern::{repetition_section, sequence_section};
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

use crate::types::RuleResult;

/// Result type for scored sections: always one entry, counted when satisfied.
pub type ScoredSection = fn(&Candidate<'_>) -> RuleResult;

/// Result type for pattern sections.
/// - `Some(result)` - pattern found, failure entry
/// - `None` - pattern absent, nothing reported
pub type PatternResult = Option<RuleResult>;

/// Password under evaluation, viewed both as text and as UTF-16 code units.
///
/// Lengths and character classes are measured on code units so that
/// astral characters count twice, the way browser input fields do.
pub struct Candidate<'a> {
    text: &'a str,
    units: Vec<u16>,
}

impl<'a> Candidate<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            units: text.encode_utf16().collect(),
        }
    }

    pub fn text(&self) -> &str {
        self.text
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// True when any code unit is an ASCII byte matching `pred`.
    pub fn any_ascii(&self, pred: impl Fn(u8) -> bool) -> bool {
        self.units
            .iter()
            .any(|&u| u8::try_from(u).is_ok_and(|b| b.is_ascii() && pred(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_counts_code_units() {
        assert_eq!(Candidate::new("abc").len(), 3);
        assert_eq!(Candidate::new("é").len(), 1);
        assert_eq!(Candidate::new("😀").len(), 2);
        assert!(Candidate::new("").is_empty());
    }

    #[test]
    fn test_any_ascii_ignores_non_ascii() {
        let candidate = Candidate::new("ÀÉ");
        assert!(!candidate.any_ascii(|b| b.is_ascii_uppercase()));
        assert!(Candidate::new("xA").any_ascii(|b| b.is_ascii_uppercase()));
    }
}
