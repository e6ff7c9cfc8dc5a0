//! WHEN combinator - conditional validation.

use crate::foundation::{Validate, ValidationError};

/// Applies the inner validator only when a predicate holds for the input.
///
/// When the predicate returns `false` the input passes unchecked.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::prelude::*;
///
/// // Only enforce the format when a value was actually entered.
/// let v = email().when(|s: &str| !s.is_empty());
/// assert!(v.validate("").is_ok());
/// assert!(v.validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, F> {
    inner: V,
    condition: F,
}

impl<V, F> When<V, F> {
    /// Creates a new `When` combinator.
    pub fn new(inner: V, condition: F) -> Self {
        Self { inner, condition }
    }
}

impl<V, F> Validate for When<V, F>
where
    V: Validate,
    F: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.inner.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator.
#[must_use]
pub fn when<V, F>(inner: V, condition: F) -> When<V, F>
where
    V: Validate,
    F: Fn(&V::Input) -> bool,
{
    When::new(inner, condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AllDigits;

    impl Validate for AllDigits {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.chars().all(|c| c.is_ascii_digit()) {
                Ok(())
            } else {
                Err(ValidationError::invalid_format("digits"))
            }
        }
    }

    #[test]
    fn skipped_when_condition_false() {
        let v = when(AllDigits, |s: &str| !s.is_empty());
        assert!(v.validate("").is_ok());
    }

    #[test]
    fn applied_when_condition_true() {
        let v = when(AllDigits, |s: &str| !s.is_empty());
        assert!(v.validate("123").is_ok());
        assert!(v.validate("12a").is_err());
    }
}
