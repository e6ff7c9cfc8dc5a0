//! Schema-driven record validation.
//!
//! The engine validates whole records (JSON objects) against a
//! [`Schema`]: each field names one or more rule specs, specs resolve in
//! a [`RuleRegistry`], and a [`Validator`] runs the pass and produces a
//! [`ValidationReport`] carrying the accepted data plus the first failing
//! test context per field.

mod coerce;
mod context;
mod registry;
mod report;
mod schema;
mod validator;

pub use context::TestContext;
pub use registry::RuleRegistry;
pub use report::{FieldError, ValidationReport};
pub use schema::{
    CompareTarget, Comparison, FieldRules, InlineRule, RuleCheck, RuleConfig, RuleFn, RuleParams,
    RuleSpec, Schema, SchemaBuilder, SchemaError,
};
pub use validator::{DEFAULT_MAX_DEPTH, Validator};
