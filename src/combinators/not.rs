//! NOT combinator - inverts a validator.

use crate::foundation::{Validate, ValidationError};

/// Inverts the outcome of the inner validator.
///
/// Succeeds when the inner validator fails, and fails with a generic
/// `negation` error when it succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::custom(
                "negation",
                "value matched a disallowed condition",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
#[must_use]
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Empty;

    impl Validate for Empty {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.is_empty() {
                Ok(())
            } else {
                Err(ValidationError::custom("not_empty", "expected empty"))
            }
        }
    }

    #[test]
    fn inverts_outcome() {
        let non_empty = not(Empty);
        assert!(non_empty.validate("text").is_ok());
        let err = non_empty.validate("").unwrap_err();
        assert_eq!(err.code, "negation");
    }
}
