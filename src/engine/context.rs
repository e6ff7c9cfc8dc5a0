//! Per-invocation test context.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::coerce;
use super::schema::{CompareTarget, Comparison, RuleParams, Schema};
use super::validator::Validator;

/// Everything a rule's test function can see for one invocation.
///
/// A context is built fresh immediately before each rule call and
/// discarded after it: the field's value, the spec's declared params, and
/// a read-only view of the whole record for cross-field rules.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::prelude::*;
///
/// // A custom rule: the field must equal its sibling "password".
/// let spec = RuleSpec::inline(|ctx| {
///     ctx.value() == ctx.sibling("password")
/// });
/// ```
pub struct TestContext<'a> {
    pub(crate) value: Option<&'a Value>,
    pub(crate) field: &'a str,
    pub(crate) params: &'a RuleParams,
    pub(crate) record: &'a Map<String, Value>,
    pub(crate) engine: &'a Validator,
    pub(crate) depth: usize,
}

impl<'a> TestContext<'a> {
    /// The field's submitted value; `None` when absent (missing or null).
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    /// The name of the field under test.
    #[must_use]
    pub fn field(&self) -> &str {
        self.field
    }

    /// The spec's declared params.
    #[must_use]
    pub fn params(&self) -> &RuleParams {
        self.params
    }

    /// Whether a value was submitted at all.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the value is absent or the empty string.
    ///
    /// This is the condition the `optional` flag short-circuits on.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self.value {
            None => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        }
    }

    /// The string form of the value, when it has one.
    #[must_use]
    pub fn text(&self) -> Option<Cow<'a, str>> {
        self.value.and_then(coerce::to_text)
    }

    /// Looks up another field of the record under validation.
    #[must_use]
    pub fn sibling(&self, name: &str) -> Option<&'a Value> {
        self.record.get(name).filter(|v| !v.is_null())
    }

    /// The comparison operator, defaulting to loose equality.
    #[must_use]
    pub fn comparison(&self) -> Comparison {
        self.params.comparison.unwrap_or_default()
    }

    /// Resolves the spec's compare target: a literal, or a sibling field.
    #[must_use]
    pub fn compare_target(&self) -> Option<&'a Value> {
        match &self.params.compare {
            Some(CompareTarget::Value(value)) => Some(value),
            Some(CompareTarget::Field(name)) => self.sibling(name),
            None => None,
        }
    }

    /// Length of the value: characters for strings, elements for
    /// containers.
    #[must_use]
    pub fn value_length(&self) -> Option<usize> {
        self.value.and_then(coerce::length_of)
    }

    /// Recursively validates the value against `schema`, counting one
    /// level of nesting against the engine's depth cap.
    #[must_use]
    pub fn validate_nested(&self, schema: &Schema) -> bool {
        match self.value {
            Some(value) => self.engine.validate_nested(value, schema, self.depth + 1),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::schema::RuleParams;
    use crate::engine::validator::Validator;
    use serde_json::json;

    #[test]
    fn blankness_and_presence() {
        let engine = Validator::new();
        let record = json!({"a": "", "b": "x", "c": null});
        let record = record.as_object().unwrap();
        let params = RuleParams::default();

        let ctx = |field: &'static str| super::TestContext {
            value: record.get(field).filter(|v| !v.is_null()),
            field,
            params: &params,
            record,
            engine: &engine,
            depth: 0,
        };

        assert!(ctx("a").is_present());
        assert!(ctx("a").is_blank());
        assert!(ctx("b").is_present());
        assert!(!ctx("b").is_blank());
        assert!(!ctx("c").is_present());
        assert!(ctx("c").is_blank());
        assert!(!ctx("missing").is_present());
    }

    #[test]
    fn sibling_lookup_skips_null() {
        let engine = Validator::new();
        let record = json!({"a": 1, "b": null});
        let record = record.as_object().unwrap();
        let params = RuleParams::default();
        let ctx = super::TestContext {
            value: None,
            field: "x",
            params: &params,
            record,
            engine: &engine,
            depth: 0,
        };
        assert_eq!(ctx.sibling("a"), Some(&json!(1)));
        assert_eq!(ctx.sibling("b"), None);
    }
}
