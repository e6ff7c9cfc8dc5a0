//! Foundation layer: core trait and error types.
//!
//! Everything in the crate builds on two pieces:
//!
//! - [`Validate`] — the synchronous validation trait with a typed input.
//! - [`ValidationError`] — the structured error validators return.
//!
//! [`ValidateExt`] is blanket-implemented for every validator and provides
//! the combinator methods (`and`, `or`, `not`, `optional`, `when`).

pub mod error;
pub mod traits;

pub use error::{ParamPairs, ValidationError};
pub use traits::{Validate, ValidateExt};

/// Convenient alias for validation outcomes.
pub type ValidationResult = Result<(), ValidationError>;
