//! Pattern and substring validators for strings.

use regex::Regex;

use crate::foundation::ValidationError;
use crate::validator;

validator! {
    /// Matches the input against a regular expression.
    pub Matches { regex: Regex } for str;
    rule(self, input) { self.regex.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format(self.regex.as_str().to_owned())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self { regex: Regex::new(pattern)? })
    }
    fn matches(pattern: &str) -> regex::Error;
}

impl Matches {
    /// Wraps an already-compiled regex.
    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }
}

validator! {
    /// Requires the input to contain a substring.
    pub Contains { needle: String } for str;
    rule(self, input) { input.contains(self.needle.as_str()) }
    error(self, input) {
        ValidationError::custom("contains", format!("must contain {:?}", self.needle))
            .with_param("needle", self.needle.clone())
    }
    fn contains(needle: String);
}

validator! {
    /// Requires every character to be ASCII alphanumeric.
    pub Alphanumeric for str;
    rule(input) { !input.is_empty() && input.chars().all(|c| c.is_ascii_alphanumeric()) }
    error(input) { ValidationError::invalid_format("alphanumeric") }
    fn alphanumeric();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn matches_compiled_pattern() {
        let v = matches(r"^\d{4}$").unwrap();
        assert!(v.validate("2024").is_ok());
        assert!(v.validate("20245").is_err());
        assert!(v.validate("abcd").is_err());
    }

    #[test]
    fn matches_rejects_bad_pattern() {
        assert!(matches(r"(unclosed").is_err());
    }

    #[test]
    fn contains_substring() {
        let v = contains("@".to_owned());
        assert!(v.validate("user@host").is_ok());
        let err = v.validate("userhost").unwrap_err();
        assert_eq!(err.param("needle"), Some("@"));
    }

    #[test]
    fn alphanumeric_rejects_symbols_and_empty() {
        let v = alphanumeric();
        assert!(v.validate("abc123").is_ok());
        assert!(v.validate("abc!").is_err());
        assert!(v.validate("").is_err());
    }
}
