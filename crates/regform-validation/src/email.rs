//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Source of the light-weight email pattern: something, an `@`, something, a
/// dot, something. No whitespace and no second `@` in any part.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Validates basic email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Compiled email pattern, for callers that attach it to a rule set
pub fn email_regex() -> &'static Regex {
    &EMAIL_REGEX
}
