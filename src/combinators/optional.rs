//! Optional combinator - lifts a validator over `Option`.

use crate::foundation::{Validate, ValidationError};

/// Applies the inner validator only when a value is present.
///
/// `None` always passes. This is the typed analogue of the engine's
/// optional short-circuit: absence is not an error unless a presence rule
/// says so.
///
/// For sized inputs `Optional` is itself a [`Validate`] over
/// `Option<Input>`; for unsized inputs (`str`, `[T]`) use
/// [`validate_opt`](Optional::validate_opt) with an optional borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Optional<V>
where
    V: Validate,
    V::Input: Sized,
{
    type Input = Option<V::Input>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

impl<V> Optional<V>
where
    V: Validate,
{
    /// Validates an optional borrow of the inner input type.
    ///
    /// Works for unsized inputs where the `Validate` impl above cannot.
    pub fn validate_opt(&self, input: Option<&V::Input>) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

/// Creates an `Optional` combinator.
#[must_use]
pub fn optional<V: Validate>(inner: V) -> Optional<V> {
    Optional::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NonEmpty;

    impl Validate for NonEmpty {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.is_empty() {
                Err(ValidationError::required())
            } else {
                Ok(())
            }
        }
    }

    struct Positive;

    impl Validate for Positive {
        type Input = i64;
        fn validate(&self, input: &i64) -> Result<(), ValidationError> {
            if *input > 0 {
                Ok(())
            } else {
                Err(ValidationError::out_of_range("must be positive"))
            }
        }
    }

    #[test]
    fn none_passes() {
        let v = optional(Positive);
        assert!(v.validate(&None).is_ok());
        assert!(optional(NonEmpty).validate_opt(None).is_ok());
    }

    #[test]
    fn some_is_validated() {
        let v = optional(Positive);
        assert!(v.validate(&Some(3)).is_ok());
        assert!(v.validate(&Some(-1)).is_err());

        let v = optional(NonEmpty);
        assert!(v.validate_opt(Some("x")).is_ok());
        assert!(v.validate_opt(Some("")).is_err());
    }
}
