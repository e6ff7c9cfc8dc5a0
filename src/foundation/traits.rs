//! Core validation trait and combinator extension.

use crate::combinators::{And, Not, Optional, Or, When};
use crate::foundation::ValidationError;

// ============================================================================
// Validate
// ============================================================================

/// A synchronous validator over a typed input.
///
/// The input type is an associated type so validators can accept unsized
/// borrows (`str`, `[T]`) without the caller boxing or converting.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::foundation::{Validate, ValidationError};
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.is_empty() {
///             Err(ValidationError::required())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of value this validator checks.
    type Input: ?Sized;

    /// Checks the input, returning the first failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// Validators compose by reference too.
impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// ValidateExt
// ============================================================================

/// Combinator methods, available on every validator.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::prelude::*;
///
/// let username = min_length(3).and(max_length(20)).and(alphanumeric());
/// assert!(username.validate("alice").is_ok());
/// assert!(username.validate("a!").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both `self` and `other` must pass.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Either `self` or `other` must pass; `other` is not evaluated when
    /// `self` passes.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the outcome of `self`.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Passes when the input is `None`, otherwise applies `self`.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Applies `self` only when `condition` holds for the input.
    fn when<F>(self, condition: F) -> When<Self, F>
    where
        F: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }
}

impl<V: Validate> ValidateExt for V {}

#[cfg(test)]
mod tests {
    use super::*;

    struct MinLen(usize);

    impl Validate for MinLen {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.chars().count() >= self.0 {
                Ok(())
            } else {
                Err(ValidationError::min_length(self.0, input.chars().count()))
            }
        }
    }

    #[test]
    fn validate_through_reference() {
        let v = MinLen(3);
        let by_ref: &MinLen = &v;
        assert!(by_ref.validate("abc").is_ok());
        assert!(by_ref.validate("ab").is_err());
    }

    #[test]
    fn validate_through_box() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(MinLen(2));
        assert!(boxed.validate("ok").is_ok());
        assert!(boxed.validate("x").is_err());
    }

    #[test]
    fn ext_methods_compose() {
        let v = MinLen(2).and(MinLen(3)).or(MinLen(10));
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("ab").is_err());
    }
}
