//! OR combinator - logical disjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one side must pass. The right side is not evaluated when the
/// left passes. When both fail, the error of the **last** attempted
/// validator (the right side) is returned so callers see the most recent
/// failure context.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::prelude::*;
///
/// let validator = exact_length(5).or(exact_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.left.validate(input).is_ok() {
            return Ok(());
        }
        self.right.validate(input)
    }
}

/// Creates an `Or` combinator from two validators.
#[must_use]
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
