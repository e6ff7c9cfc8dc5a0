//! The validation driver.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::context::TestContext;
use super::registry::RuleRegistry;
use super::report::{FieldError, ValidationReport};
use super::schema::{FieldRules, RuleConfig, RuleParams, RuleSpec, Schema};

/// Default cap on nested-schema recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Drives one full validation pass over a record.
///
/// A `Validator` owns a [`RuleRegistry`] and a recursion cap. It is pure:
/// [`validate`](Self::validate) has no side effects on the record, the
/// schema, or the validator itself, so one instance can serve any number
/// of submission attempts.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::prelude::*;
/// use serde_json::json;
///
/// let schema = Schema::builder()
///     .field("email", "email")
///     .field("age", RuleSpec::config("compare")
///         .comparison(Comparison::Ge)
///         .compare_value(json!(18)))
///     .build();
///
/// let validator = Validator::new();
/// let report = validator.validate(&json!({"email": "a@b.co", "age": 21}), &schema);
/// assert!(report.valid);
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    registry: RuleRegistry,
    max_depth: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// A validator over the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::new())
    }

    /// A validator over a caller-built registry.
    #[must_use]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Overrides the nested-schema recursion cap.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The rule registry.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Mutable access to the registry, for setup-time registration.
    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Validates `record` against `schema`.
    ///
    /// A non-object record cannot be validated; the result is still fully
    /// shaped, with `valid = false` and empty maps, so callers never have
    /// to guess at the report's structure.
    #[must_use]
    pub fn validate(&self, record: &Value, schema: &Schema) -> ValidationReport {
        let Value::Object(record) = record else {
            tracing::debug!("record is not an object; nothing to validate");
            return ValidationReport::malformed();
        };
        self.validate_record(record, schema, 0)
    }

    /// Recursion entry for the `schema` rule. Fails closed at the cap.
    pub(crate) fn validate_nested(&self, value: &Value, schema: &Schema, depth: usize) -> bool {
        if depth >= self.max_depth {
            tracing::warn!(
                max_depth = self.max_depth,
                "nested schema exceeds recursion cap; failing closed"
            );
            return false;
        }
        let Value::Object(record) = value else {
            return false;
        };
        self.validate_record(record, schema, depth).valid
    }

    fn validate_record(
        &self,
        record: &Map<String, Value>,
        schema: &Schema,
        depth: usize,
    ) -> ValidationReport {
        let mut data = IndexMap::new();
        let mut errors = IndexMap::new();

        for (field, rules) in schema.fields() {
            // Null and missing are both "absent"; the empty string is not.
            let value = record.get(field).filter(|v| !v.is_null());
            if let Some(v) = value {
                data.insert(field.to_owned(), v.clone());
            }

            let outcome = match rules {
                FieldRules::Single(spec) => self.eval_spec(spec, field, value, record, depth),
                FieldRules::AllOf(specs) => {
                    let mut outcome = Ok(());
                    for spec in specs {
                        if let Err(error) = self.eval_spec(spec, field, value, record, depth) {
                            outcome = Err(error);
                            break;
                        }
                    }
                    outcome
                }
                FieldRules::AnyOf(specs) => self.eval_any_of(specs, field, value, record, depth),
                FieldRules::Nested(nested) => {
                    let spec = RuleSpec::Config(RuleConfig {
                        check: super::schema::RuleCheck::Named("schema".into()),
                        params: RuleParams {
                            schema: Some(nested.clone()),
                            ..RuleParams::default()
                        },
                    });
                    self.eval_spec(&spec, field, value, record, depth)
                }
            };

            if let Err(error) = outcome {
                errors.insert(field.to_owned(), error);
            }
        }

        ValidationReport::finish(data, errors)
    }

    /// Tries alternatives in order; the first pass wins. When every
    /// alternative fails, the last attempted spec's context is the error.
    fn eval_any_of(
        &self,
        specs: &[RuleSpec],
        field: &str,
        value: Option<&Value>,
        record: &Map<String, Value>,
        depth: usize,
    ) -> Result<(), FieldError> {
        let mut last_error = None;
        for spec in specs {
            match self.eval_spec(spec, field, value, record, depth) {
                Ok(()) => return Ok(()),
                Err(error) => last_error = Some(error),
            }
        }
        // An empty alternatives list is an unsatisfiable disjunction.
        Err(last_error.unwrap_or_else(|| FieldError {
            rule: None,
            value: value.cloned(),
            params: RuleParams::default(),
        }))
    }

    fn eval_spec(
        &self,
        spec: &RuleSpec,
        field: &str,
        value: Option<&Value>,
        record: &Map<String, Value>,
        depth: usize,
    ) -> Result<(), FieldError> {
        let params = spec.params();
        let ctx = TestContext {
            value,
            field,
            params: &params,
            record,
            engine: self,
            depth,
        };

        if params.optional && ctx.is_blank() {
            return Ok(());
        }

        let test = self.registry.resolve(&spec.check());
        if test(&ctx) {
            Ok(())
        } else {
            Err(FieldError {
                rule: spec.name().map(str::to_owned),
                value: value.cloned(),
                params: params.into_owned(),
            })
        }
    }
}
