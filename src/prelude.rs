//! Convenient star-import for the common surface.
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//! ```

pub use crate::combinators::{And, Not, Optional, Or, When};
pub use crate::engine::{
    CompareTarget, Comparison, FieldError, FieldRules, RuleConfig, RuleParams, RuleRegistry,
    RuleSpec, Schema, SchemaBuilder, SchemaError, TestContext, ValidationReport, Validator,
};
pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult};
pub use crate::validators::{
    alphanumeric, bool_str, contains, digits, email, exact_length, guid, login, matches,
    max_length, min_length, not_empty,
};
pub use crate::{any_of, compose, validator};
