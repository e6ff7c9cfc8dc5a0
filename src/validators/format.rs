//! Wire-format validators: email, GUID, login, digit strings.
//!
//! The patterns here are deliberately permissive in the way form
//! validation usually is: `email` checks shape, not deliverability.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;
use crate::validator;

/// Anything-at-anything-dot-tld, anchored at the end of the input.
pub(crate) static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S{2,}$").unwrap_or_else(|e| unreachable!("static pattern: {e}"))
});

/// Hyphenated 8-4-4-4-12 GUID, bare or in matched braces or parens, or a
/// bare 32-hex-digit string.
pub(crate) static GUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    let groups =
        "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}";
    Regex::new(&format!(
        r"^(?:\{{{groups}\}}|\({groups}\)|{groups}|[0-9a-fA-F]{{32}})$"
    ))
    .unwrap_or_else(|e| unreachable!("static pattern: {e}"))
});

/// One or more ASCII digits and nothing else.
pub(crate) static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+$").unwrap_or_else(|e| unreachable!("static pattern: {e}"))
});

validator! {
    /// Email-shaped strings.
    pub Email for str;
    rule(input) { EMAIL_RE.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}

validator! {
    /// GUIDs, hyphenated or bare, with optional brace or paren wrapping.
    pub Guid for str;
    rule(input) { GUID_RE.is_match(input) }
    error(input) { ValidationError::invalid_format("guid") }
    fn guid();
}

validator! {
    /// Digit-only strings.
    pub Digits for str;
    rule(input) { DIGITS_RE.is_match(input) }
    error(input) { ValidationError::invalid_format("digits") }
    fn digits();
}

/// Login identifiers: either email-shaped or a `DOMAIN\user` style name.
///
/// Built from the email validator OR a backslash check, which is the kind
/// of composition [`ValidateExt`](crate::foundation::ValidateExt) exists
/// for.
#[must_use]
pub fn login() -> crate::combinators::Or<Email, crate::validators::pattern::Contains> {
    crate::combinators::or(email(), crate::validators::pattern::contains("\\".to_owned()))
}
