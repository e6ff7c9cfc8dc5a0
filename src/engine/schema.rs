//! Schemas, rule specs, and their JSON authoring form.
//!
//! A [`Schema`] maps field names to [`FieldRules`]. Each spec is either a
//! named rule, an inline test function, or a configured rule with
//! attributes ([`RuleParams`]). List semantics are explicit: a field either
//! requires all of its specs ([`FieldRules::AllOf`]) or any one of them
//! ([`FieldRules::AnyOf`]); there is no guessing from the container shape.
//!
//! [`Schema::from_json`] accepts the duck-typed authoring form (bare rule
//! names, `{"test": ..., attributes...}` objects, arrays of alternatives,
//! nested objects) and converts it to the tagged representation, rejecting
//! anything it does not understand.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::context::TestContext;

// ============================================================================
// Comparison
// ============================================================================

/// Comparison operator for the `compare` and `length` rules.
///
/// [`Comparison::Eq`] is loose (numeric coercion applies, so `"18"`
/// equals `18`); [`Comparison::StrictEq`] requires identical JSON values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Comparison {
    /// `<`
    #[serde(rename = "<")]
    Lt,
    /// `<=`
    #[serde(rename = "<=")]
    Le,
    /// `>`
    #[serde(rename = ">")]
    Gt,
    /// `>=`
    #[serde(rename = ">=")]
    Ge,
    /// `!=` (loose)
    #[serde(rename = "!=")]
    Ne,
    /// `==` (loose); the default.
    #[default]
    #[serde(rename = "==")]
    Eq,
    /// `===` (no coercion)
    #[serde(rename = "===")]
    StrictEq,
}

impl Comparison {
    /// The operator's source form (`"<="`, `"==="`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Ne => "!=",
            Self::Eq => "==",
            Self::StrictEq => "===",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Comparison {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            "!=" => Ok(Self::Ne),
            "==" => Ok(Self::Eq),
            "===" => Ok(Self::StrictEq),
            other => Err(SchemaError::BadComparison(other.to_owned())),
        }
    }
}

// ============================================================================
// Rule specs
// ============================================================================

/// Boxed test function shared by inline rules and resolved registry rules.
pub type RuleFn = Arc<dyn Fn(&TestContext<'_>) -> bool + Send + Sync>;

/// An inline test function embedded directly in a schema.
#[derive(Clone)]
pub struct InlineRule(pub(crate) RuleFn);

impl InlineRule {
    /// Wraps a closure as an inline rule.
    pub fn new(test: impl Fn(&TestContext<'_>) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(test))
    }

    pub(crate) fn test(&self, ctx: &TestContext<'_>) -> bool {
        (self.0)(ctx)
    }
}

impl fmt::Debug for InlineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InlineRule(..)")
    }
}

/// What a configured spec actually runs: a registry lookup or an inline fn.
#[derive(Debug, Clone)]
pub enum RuleCheck {
    /// Resolve the rule by name in the registry.
    Named(Cow<'static, str>),
    /// Run the embedded function.
    Inline(InlineRule),
}

/// Configured attributes of a rule spec.
///
/// Serializes into the report so callers can inspect exactly which
/// constraint failed; nested schemas are elided from the serialized form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RuleParams {
    /// Skip the rule entirely when the value is absent or empty.
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    /// Operator for `compare` and `length`; each rule picks its own default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    /// Right-hand side for the `compare` rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare: Option<CompareTarget>,
    /// Expected length for the `length` rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Nested schema for the `schema` rule.
    #[serde(skip)]
    pub schema: Option<Schema>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// The right-hand side of a `compare` rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareTarget {
    /// Compare against a literal value.
    Value(Value),
    /// Compare against a sibling field of the record under validation.
    Field(String),
}

/// A single rule spec: what to run and how.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::prelude::*;
/// use serde_json::json;
///
/// let by_name = RuleSpec::named("email");
/// let configured = RuleSpec::config("compare")
///     .comparison(Comparison::Ge)
///     .compare_value(json!(18));
/// let inline = RuleSpec::inline(|ctx| ctx.is_present());
/// ```
#[derive(Debug, Clone)]
pub enum RuleSpec {
    /// A bare rule name, resolved in the registry with default params.
    Named(Cow<'static, str>),
    /// A bare inline function with default params.
    Inline(InlineRule),
    /// A named or inline rule with configured params.
    Config(RuleConfig),
}

impl RuleSpec {
    /// A spec that resolves `name` in the registry.
    #[must_use]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Named(name.into())
    }

    /// A spec that runs the given function.
    pub fn inline(test: impl Fn(&TestContext<'_>) -> bool + Send + Sync + 'static) -> Self {
        Self::Inline(InlineRule::new(test))
    }

    /// Starts a configured spec for the named rule.
    ///
    /// Returns a [`RuleConfig`] builder; attach attributes and pass it
    /// anywhere a `RuleSpec` is accepted.
    #[must_use]
    pub fn config(name: impl Into<Cow<'static, str>>) -> RuleConfig {
        RuleConfig {
            check: RuleCheck::Named(name.into()),
            params: RuleParams::default(),
        }
    }

    /// The rule name, when this spec is named.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Config(config) => match &config.check {
                RuleCheck::Named(name) => Some(name),
                RuleCheck::Inline(_) => None,
            },
            Self::Inline(_) => None,
        }
    }

    pub(crate) fn check(&self) -> RuleCheck {
        match self {
            Self::Named(name) => RuleCheck::Named(name.clone()),
            Self::Inline(inline) => RuleCheck::Inline(inline.clone()),
            Self::Config(config) => config.check.clone(),
        }
    }

    pub(crate) fn params(&self) -> Cow<'_, RuleParams> {
        match self {
            Self::Config(config) => Cow::Borrowed(&config.params),
            _ => Cow::Owned(RuleParams::default()),
        }
    }
}

impl From<&'static str> for RuleSpec {
    fn from(name: &'static str) -> Self {
        Self::named(name)
    }
}

impl From<RuleConfig> for RuleSpec {
    fn from(config: RuleConfig) -> Self {
        Self::Config(config)
    }
}

/// Builder for configured rule specs.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    pub(crate) check: RuleCheck,
    pub(crate) params: RuleParams,
}

impl RuleConfig {
    /// Configures an inline test function instead of a named rule.
    pub fn inline(test: impl Fn(&TestContext<'_>) -> bool + Send + Sync + 'static) -> Self {
        Self {
            check: RuleCheck::Inline(InlineRule::new(test)),
            params: RuleParams::default(),
        }
    }

    /// Marks the spec optional: absent and empty values pass.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.params.optional = true;
        self
    }

    /// Sets the comparison operator.
    #[must_use]
    pub fn comparison(mut self, op: Comparison) -> Self {
        self.params.comparison = Some(op);
        self
    }

    /// Compares against a literal value.
    #[must_use]
    pub fn compare_value(mut self, value: Value) -> Self {
        self.params.compare = Some(CompareTarget::Value(value));
        self
    }

    /// Compares against a sibling field of the record.
    #[must_use]
    pub fn compare_field(mut self, field: impl Into<String>) -> Self {
        self.params.compare = Some(CompareTarget::Field(field.into()));
        self
    }

    /// Sets the expected length for the `length` rule.
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.params.length = Some(length);
        self
    }

    /// Attaches a nested schema for the `schema` rule.
    #[must_use]
    pub fn schema(mut self, schema: Schema) -> Self {
        self.params.schema = Some(schema);
        self
    }
}

// ============================================================================
// Field rules
// ============================================================================

/// How a field's specs combine.
#[derive(Debug, Clone)]
pub enum FieldRules {
    /// Exactly one spec.
    Single(RuleSpec),
    /// Every spec must pass; evaluation stops at the first failure.
    AllOf(Vec<RuleSpec>),
    /// At least one spec must pass; when all fail, the last attempted
    /// spec's context is reported.
    AnyOf(Vec<RuleSpec>),
    /// The field is itself a record validated against a nested schema.
    Nested(Schema),
}

impl FieldRules {
    /// A single spec.
    #[must_use]
    pub fn single(spec: impl Into<RuleSpec>) -> Self {
        Self::Single(spec.into())
    }

    /// All specs must pass, in order.
    #[must_use]
    pub fn all_of(specs: impl IntoIterator<Item = RuleSpec>) -> Self {
        Self::AllOf(specs.into_iter().collect())
    }

    /// Any one spec must pass.
    #[must_use]
    pub fn any_of(specs: impl IntoIterator<Item = RuleSpec>) -> Self {
        Self::AnyOf(specs.into_iter().collect())
    }

    /// The field holds a nested record.
    #[must_use]
    pub fn nested(schema: Schema) -> Self {
        Self::Nested(schema)
    }
}

impl From<RuleSpec> for FieldRules {
    fn from(spec: RuleSpec) -> Self {
        Self::Single(spec)
    }
}

impl From<RuleConfig> for FieldRules {
    fn from(config: RuleConfig) -> Self {
        Self::Single(config.into())
    }
}

impl From<&'static str> for FieldRules {
    fn from(name: &'static str) -> Self {
        Self::Single(RuleSpec::named(name))
    }
}

impl From<Schema> for FieldRules {
    fn from(schema: Schema) -> Self {
        Self::Nested(schema)
    }
}

// ============================================================================
// Schema
// ============================================================================

/// An ordered map from field name to that field's rules.
///
/// Fields are validated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, FieldRules>,
}

impl Schema {
    /// Starts an empty schema builder.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder {
            fields: IndexMap::new(),
        }
    }

    /// Iterates fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses the duck-typed JSON authoring form.
    ///
    /// Accepted shapes per field:
    ///
    /// - `"email"` — a bare rule name
    /// - `["email", {"test": "value"}]` — alternatives (any one must pass)
    /// - `{"test": "compare", "comparison": ">=", "compare": 18}` — a
    ///   configured rule; recognized attributes are `optional`,
    ///   `comparison`, `compare`, `compare_field`, `length`, and `schema`
    /// - `{"street": "value", "zip": "digits"}` — an object without a
    ///   `test` key is a nested schema
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the value is not an object or a field
    /// uses an unrecognized shape or attribute.
    pub fn from_json(value: &Value) -> Result<Self, SchemaError> {
        let Value::Object(map) = value else {
            return Err(SchemaError::NotAnObject);
        };
        let mut fields = IndexMap::with_capacity(map.len());
        for (name, spec) in map {
            fields.insert(name.clone(), parse_field(name, spec)?);
        }
        Ok(Self { fields })
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    fields: IndexMap<String, FieldRules>,
}

impl SchemaBuilder {
    /// Declares a field. Re-declaring a field replaces its rules.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: impl Into<FieldRules>) -> Self {
        self.fields.insert(name.into(), rules.into());
        self
    }

    /// Finishes the schema.
    #[must_use]
    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}

// ============================================================================
// JSON parsing
// ============================================================================

/// Failure to parse the JSON authoring form of a schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The top-level schema value was not a JSON object.
    #[error("schema must be a JSON object")]
    NotAnObject,
    /// A field's spec used a shape the parser does not recognize.
    #[error("field {field:?}: unrecognized rule spec shape")]
    UnknownShape {
        /// The offending field.
        field: String,
    },
    /// A configured spec's `test` attribute was not a string.
    #[error("field {field:?}: `test` must be a rule name")]
    BadTest {
        /// The offending field.
        field: String,
    },
    /// An unknown comparison operator string.
    #[error("unknown comparison operator {0:?}")]
    BadComparison(String),
    /// A recognized attribute carried an unusable value.
    #[error("field {field:?}: bad value for attribute {attribute:?}")]
    BadAttribute {
        /// The offending field.
        field: String,
        /// The attribute with the unusable value.
        attribute: &'static str,
    },
    /// A configured spec carried an attribute the engine does not know.
    #[error("field {field:?}: unknown attribute {attribute:?}")]
    UnknownAttribute {
        /// The offending field.
        field: String,
        /// The unrecognized attribute.
        attribute: String,
    },
}

fn parse_field(name: &str, spec: &Value) -> Result<FieldRules, SchemaError> {
    match spec {
        Value::String(rule) => Ok(FieldRules::Single(RuleSpec::named(rule.clone()))),
        Value::Array(alternatives) => {
            let specs = alternatives
                .iter()
                .map(|alt| parse_spec(name, alt))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(FieldRules::AnyOf(specs))
        }
        Value::Object(map) if map.contains_key("tests") => parse_tests(name, map),
        Value::Object(map) if map.contains_key("test") => {
            Ok(FieldRules::Single(parse_config(name, spec)?))
        }
        Value::Object(_) => Ok(FieldRules::Nested(Schema::from_json(spec)?)),
        _ => Err(SchemaError::UnknownShape {
            field: name.to_owned(),
        }),
    }
}

/// `{"tests": [...], attrs...}`: an alternatives list whose surrounding
/// attributes are defaults for every alternative; an alternative's own
/// attributes win.
fn parse_tests(
    name: &str,
    map: &serde_json::Map<String, Value>,
) -> Result<FieldRules, SchemaError> {
    let Some(Value::Array(alternatives)) = map.get("tests") else {
        return Err(SchemaError::BadAttribute {
            field: name.to_owned(),
            attribute: "tests",
        });
    };
    let specs = alternatives
        .iter()
        .map(|alt| {
            let rule = match alt {
                Value::String(rule) => rule.clone(),
                Value::Object(alt_map) => match alt_map.get("test") {
                    Some(Value::String(rule)) => rule.clone(),
                    _ => {
                        return Err(SchemaError::BadTest {
                            field: name.to_owned(),
                        });
                    }
                },
                _ => {
                    return Err(SchemaError::UnknownShape {
                        field: name.to_owned(),
                    });
                }
            };
            let mut config = apply_attributes(name, RuleSpec::config(rule), map)?;
            if let Value::Object(alt_map) = alt {
                config = apply_attributes(name, config, alt_map)?;
            }
            Ok(RuleSpec::Config(config))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FieldRules::AnyOf(specs))
}

fn parse_spec(name: &str, spec: &Value) -> Result<RuleSpec, SchemaError> {
    match spec {
        Value::String(rule) => Ok(RuleSpec::named(rule.clone())),
        Value::Object(map) if map.contains_key("test") => parse_config(name, spec),
        _ => Err(SchemaError::UnknownShape {
            field: name.to_owned(),
        }),
    }
}

fn parse_config(name: &str, spec: &Value) -> Result<RuleSpec, SchemaError> {
    let Value::Object(map) = spec else {
        return Err(SchemaError::UnknownShape {
            field: name.to_owned(),
        });
    };
    let Some(Value::String(rule)) = map.get("test") else {
        return Err(SchemaError::BadTest {
            field: name.to_owned(),
        });
    };
    Ok(apply_attributes(name, RuleSpec::config(rule.clone()), map)?.into())
}

fn apply_attributes(
    name: &str,
    mut config: RuleConfig,
    map: &serde_json::Map<String, Value>,
) -> Result<RuleConfig, SchemaError> {
    for (attribute, value) in map {
        match attribute.as_str() {
            "test" | "tests" => {}
            "optional" => match value {
                Value::Bool(true) => config = config.optional(),
                Value::Bool(false) => {}
                _ => {
                    return Err(SchemaError::BadAttribute {
                        field: name.to_owned(),
                        attribute: "optional",
                    });
                }
            },
            "comparison" => {
                let Value::String(op) = value else {
                    return Err(SchemaError::BadAttribute {
                        field: name.to_owned(),
                        attribute: "comparison",
                    });
                };
                config = config.comparison(op.parse()?);
            }
            "compare" => config = config.compare_value(value.clone()),
            "compare_field" => {
                let Value::String(field) = value else {
                    return Err(SchemaError::BadAttribute {
                        field: name.to_owned(),
                        attribute: "compare_field",
                    });
                };
                config = config.compare_field(field.clone());
            }
            "length" => {
                let Some(length) = value.as_u64() else {
                    return Err(SchemaError::BadAttribute {
                        field: name.to_owned(),
                        attribute: "length",
                    });
                };
                config = config.length(length as usize);
            }
            "schema" => config = config.schema(Schema::from_json(value)?),
            other => {
                return Err(SchemaError::UnknownAttribute {
                    field: name.to_owned(),
                    attribute: other.to_owned(),
                });
            }
        }
    }
    Ok(config)
}
