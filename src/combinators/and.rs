//! AND combinator - logical conjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass; the error of the first failing validator is
/// returned and the second is not evaluated after a failure.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::prelude::*;
///
/// let validator = min_length(5).and(max_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
#[must_use]
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    struct MinLength(usize);
    struct MaxLength(usize);

    impl Validate for MinLength {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            let len = input.chars().count();
            if len >= self.0 {
                Ok(())
            } else {
                Err(ValidationError::min_length(self.0, len))
            }
        }
    }

    impl Validate for MaxLength {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            let len = input.chars().count();
            if len <= self.0 {
                Ok(())
            } else {
                Err(ValidationError::max_length(self.0, len))
            }
        }
    }

    #[test]
    fn both_pass() {
        let v = MinLength(3).and(MaxLength(10));
        assert!(v.validate("hello").is_ok());
    }

    #[test]
    fn first_failure_wins() {
        let v = MinLength(3).and(MaxLength(10));
        let err = v.validate("ab").unwrap_err();
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn second_failure_reported() {
        let v = MinLength(3).and(MaxLength(5));
        let err = v.validate("toolongvalue").unwrap_err();
        assert_eq!(err.code, "max_length");
    }

    #[test]
    fn into_parts_round_trip() {
        let v = and(MinLength(1), MaxLength(2));
        let (l, r) = v.into_parts();
        assert!(l.validate("a").is_ok());
        assert!(r.validate("abc").is_err());
    }
}
