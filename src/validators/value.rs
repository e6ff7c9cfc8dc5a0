//! Presence and literal-value validators.

use crate::foundation::ValidationError;
use crate::validator;

validator! {
    /// Requires a non-empty string.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::required() }
    fn not_empty();
}

validator! {
    /// Requires the string `"true"` or `"false"`, case-insensitively.
    pub BoolStr for str;
    rule(input) {
        input.eq_ignore_ascii_case("true") || input.eq_ignore_ascii_case("false")
    }
    error(input) { ValidationError::invalid_format("boolean string") }
    fn bool_str();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn not_empty_rejects_empty_only() {
        let v = not_empty();
        assert!(v.validate(" ").is_ok());
        assert!(v.validate("").is_err());
    }

    #[test]
    fn bool_str_case_insensitive() {
        let v = bool_str();
        assert!(v.validate("true").is_ok());
        assert!(v.validate("FALSE").is_ok());
        assert!(v.validate("True").is_ok());
        assert!(v.validate("yes").is_err());
        assert!(v.validate("").is_err());
    }
}
