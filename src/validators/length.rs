//! Length validators for strings.
//!
//! Lengths are measured in characters, not bytes.

use crate::foundation::ValidationError;
use crate::validator;

validator! {
    /// Requires at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) {
        ValidationError::min_length(self.min, input.chars().count())
    }
    fn min_length(min: usize);
}

validator! {
    /// Requires at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) {
        ValidationError::max_length(self.max, input.chars().count())
    }
    fn max_length(max: usize);
}

validator! {
    /// Requires exactly `len` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { len: usize } for str;
    rule(self, input) { input.chars().count() == self.len }
    error(self, input) {
        ValidationError::custom("exact_length", format!("expected exactly {} characters", self.len))
            .with_param("expected", self.len.to_string())
            .with_param("actual", input.chars().count().to_string())
    }
    fn exact_length(len: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};

    #[test]
    fn min_counts_chars_not_bytes() {
        let v = min_length(3);
        assert!(v.validate("äöü").is_ok());
        assert!(v.validate("äö").is_err());
    }

    #[test]
    fn max_length_boundary() {
        let v = max_length(2);
        assert!(v.validate("ab").is_ok());
        assert!(v.validate("abc").is_err());
    }

    #[test]
    fn exact_length_params() {
        let err = exact_length(4).validate("abc").unwrap_err();
        assert_eq!(err.param("expected"), Some("4"));
        assert_eq!(err.param("actual"), Some("3"));
    }

    #[test]
    fn range_via_and() {
        let v = min_length(2).and(max_length(4));
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("a").is_err());
        assert!(v.validate("abcde").is_err());
    }
}
