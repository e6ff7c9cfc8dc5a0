//! # formguard
//!
//! Composable validation for form-shaped records.
//!
//! The crate has two layers:
//!
//! - **Foundation + combinators**: a synchronous [`Validate`] trait with
//!   typed inputs, combinator adapters ([`ValidateExt`]), and a
//!   [`validator!`] macro for declaring small validators with zero
//!   boilerplate.
//! - **Engine**: a [`RuleRegistry`] of named rules over JSON values, a
//!   [`Schema`] describing per-field rule specs, and a [`Validator`] that
//!   checks a whole record in one synchronous pass, producing a
//!   [`ValidationReport`] with the accepted data and per-field failures.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .field("email", FieldRules::single(RuleSpec::named("email")))
//!     .field("age", FieldRules::single(
//!         RuleSpec::config("compare")
//!             .comparison(Comparison::Ge)
//!             .compare_value(json!(18)),
//!     ))
//!     .build();
//!
//! let validator = Validator::new();
//! let report = validator.validate(&json!({
//!     "email": "sam@example.com",
//!     "age": 21,
//! }), &schema);
//! assert!(report.valid);
//! ```
//!
//! [`Validate`]: foundation::Validate
//! [`ValidateExt`]: foundation::ValidateExt
//! [`RuleRegistry`]: engine::RuleRegistry
//! [`Schema`]: engine::Schema
//! [`Validator`]: engine::Validator
//! [`ValidationReport`]: engine::ValidationReport

#![allow(clippy::result_large_err)]
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use engine::{
    Comparison, CompareTarget, FieldError, FieldRules, RuleParams, RuleRegistry, RuleSpec, Schema,
    SchemaError, ValidationReport, Validator,
};
pub use foundation::{Validate, ValidateExt, ValidationError};
