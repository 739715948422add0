//! Blacklist section - checks if password is in common password list.

use super::Candidate;
use crate::blacklist::CommonPasswords;
use crate::types::RuleResult;

/// Always reports: a failure when the password is common, a success otherwise.
pub fn blacklist_section(password: &Candidate<'_>, common: &CommonPasswords) -> RuleResult {
    if common.contains(password.text()) {
        return RuleResult::failed("Should not be a common password");
    }
    RuleResult::new("Not a common password", true)
}
