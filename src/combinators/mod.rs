//! Validator combinators.
//!
//! Combinators adapt and compose validators without giving up static
//! typing: the compiler checks that both sides of an [`And`] or [`Or`]
//! agree on the input type. They are usually reached through
//! [`ValidateExt`](crate::foundation::ValidateExt) rather than constructed
//! directly.

mod and;
mod not;
mod optional;
mod or;
mod when;

pub use and::{And, and};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
pub use when::{When, when};

// ============================================================================
// Laws
// ============================================================================

#[cfg(test)]
mod laws {
    use crate::foundation::{Validate, ValidateExt, ValidationError};

    #[derive(Clone, Copy)]
    struct Pass;
    #[derive(Clone, Copy)]
    struct Fail;

    impl Validate for Pass {
        type Input = str;
        fn validate(&self, _: &str) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    impl Validate for Fail {
        type Input = str;
        fn validate(&self, _: &str) -> Result<(), ValidationError> {
            Err(ValidationError::custom("fail", "always fails"))
        }
    }

    #[test]
    fn and_is_associative() {
        let left = Pass.and(Fail).and(Pass);
        let right = Pass.and(Fail.and(Pass));
        assert_eq!(
            left.validate("x").is_ok(),
            right.validate("x").is_ok()
        );
    }

    #[test]
    fn or_is_associative() {
        let left = Fail.or(Fail).or(Pass);
        let right = Fail.or(Fail.or(Pass));
        assert_eq!(
            left.validate("x").is_ok(),
            right.validate("x").is_ok()
        );
    }

    #[test]
    fn pass_is_identity_for_and() {
        assert!(Pass.and(Pass).validate("x").is_ok());
        assert!(Pass.and(Fail).validate("x").is_err());
    }

    #[test]
    fn double_negation() {
        assert!(Fail.not().not().validate("x").is_err());
        assert!(Pass.not().not().validate("x").is_ok());
    }
}
