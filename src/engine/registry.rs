//! The rule registry and its built-in rules.
//!
//! A [`RuleRegistry`] is an explicit value, not process-global state:
//! construct one, register custom rules during setup, then hand it to a
//! [`Validator`](super::validator::Validator). Registration is `&mut` and
//! lookups are `&`, so the borrow checker enforces the register-then-read
//! discipline; a finished registry is `Send + Sync` and can be shared.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;

use super::coerce;
use super::context::TestContext;
use super::schema::{Comparison, RuleCheck, RuleFn};
use crate::foundation::Validate;

/// A named rule: its test function plus, for pattern rules, the regex it
/// was registered with.
#[derive(Clone)]
struct Rule {
    test: RuleFn,
    pattern: Option<Regex>,
}

/// Table of named validation rules.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::prelude::*;
///
/// let mut registry = RuleRegistry::new();
/// assert!(registry.register("even", |ctx: &TestContext<'_>| {
///     ctx.value().and_then(|v| v.as_i64()).is_some_and(|n| n % 2 == 0)
/// }));
/// // Built-in names are taken.
/// assert!(!registry.register("email", |_: &TestContext<'_>| true));
/// ```
#[derive(Clone)]
pub struct RuleRegistry {
    rules: HashMap<Cow<'static, str>, Rule>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    /// A registry seeded with the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.seed_builtins();
        registry
    }

    /// A registry with no rules at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registers a rule under `name`.
    ///
    /// Returns `false` and leaves the registry unchanged when the name is
    /// already taken.
    pub fn register(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        test: impl Fn(&TestContext<'_>) -> bool + Send + Sync + 'static,
    ) -> bool {
        self.insert(
            name.into(),
            Rule {
                test: Arc::new(test),
                pattern: None,
            },
        )
    }

    /// Registers a rule that matches the value's string form against
    /// `regex`, and records the pattern for introspection.
    ///
    /// Same collision behavior as [`register`](Self::register).
    pub fn register_pattern(&mut self, name: impl Into<Cow<'static, str>>, regex: Regex) -> bool {
        let test_regex = regex.clone();
        self.insert(
            name.into(),
            Rule {
                test: Arc::new(move |ctx| {
                    ctx.text().is_some_and(|s| test_regex.is_match(&s))
                }),
                pattern: Some(regex),
            },
        )
    }

    /// Registers a typed string validator as a named rule.
    ///
    /// The adapted rule fails for absent and non-textual values. This is
    /// the bridge from the combinator layer into schemas:
    ///
    /// ```rust,ignore
    /// let mut registry = RuleRegistry::new();
    /// registry.register_str("username", alphanumeric().and(min_length(3)));
    /// ```
    pub fn register_str<V>(&mut self, name: impl Into<Cow<'static, str>>, validator: V) -> bool
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.register(name, move |ctx| {
            ctx.text().is_some_and(|s| validator.validate(&s).is_ok())
        })
    }

    /// Whether a rule with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// The regex a pattern rule was registered with, if any.
    #[must_use]
    pub fn pattern(&self, name: &str) -> Option<&Regex> {
        self.rules.get(name).and_then(|rule| rule.pattern.as_ref())
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates registered rule names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(Cow::as_ref)
    }

    /// Resolves a spec's check to a runnable test function.
    ///
    /// Unknown names resolve to a rule that always fails, with a
    /// diagnostic for the engineer; a misspelled schema must surface as
    /// "this field can never pass", never as a silent pass or a panic.
    #[must_use]
    pub fn resolve(&self, check: &RuleCheck) -> RuleFn {
        match check {
            RuleCheck::Inline(inline) => inline.0.clone(),
            RuleCheck::Named(name) => match self.rules.get(name.as_ref()) {
                Some(rule) => rule.test.clone(),
                None => {
                    tracing::warn!(rule = %name, "unknown validation rule; field will always fail");
                    Arc::new(|_| false)
                }
            },
        }
    }

    fn insert(&mut self, name: Cow<'static, str>, rule: Rule) -> bool {
        if self.rules.contains_key(&name) {
            tracing::debug!(rule = %name, "rule name already registered");
            return false;
        }
        tracing::debug!(rule = %name, "rule registered");
        self.rules.insert(name, rule);
        true
    }

    fn seed_builtins(&mut self) {
        use crate::validators::format;

        self.register_pattern("email", format::EMAIL_RE.clone());
        self.register_pattern("guid", format::GUID_RE.clone());
        self.register_pattern("digits", format::DIGITS_RE.clone());
        self.register_str("login", format::login());
        self.register("int", builtin::int);
        self.register("number", builtin::number);
        self.register("compare", builtin::compare);
        self.register("length", builtin::length);
        self.register("passthrough", builtin::passthrough);
        self.register("value", builtin::value);
        self.register("boolString", builtin::bool_string);
        self.register("schema", builtin::schema);
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.len())
            .finish()
    }
}

// ============================================================================
// Built-in rules
// ============================================================================

mod builtin {
    use super::*;
    use crate::validators::value::bool_str;

    /// Leading-integer parse: `"12abc"` passes, `""` fails.
    pub(super) fn int(ctx: &TestContext<'_>) -> bool {
        ctx.value().is_some_and(|v| coerce::leading_int(v).is_some())
    }

    /// The value has numeric content and coerces to a finite number.
    ///
    /// Blank strings coerce to zero under loose comparison, but a string
    /// with no numeric content is not itself a number.
    pub(super) fn number(ctx: &TestContext<'_>) -> bool {
        match ctx.value() {
            None => false,
            Some(serde_json::Value::String(s)) if s.trim().is_empty() => false,
            Some(v) => coerce::to_number(v).is_some_and(f64::is_finite),
        }
    }

    /// Relational test against a literal or a sibling field.
    ///
    /// When the target cannot be resolved the rule passes only if the
    /// spec is marked optional.
    pub(super) fn compare(ctx: &TestContext<'_>) -> bool {
        let Some(target) = ctx.compare_target() else {
            return ctx.params().optional;
        };
        let Some(value) = ctx.value() else {
            return false;
        };
        coerce::compare(ctx.comparison(), value, target)
    }

    /// Compares the value's length against the declared `length`,
    /// defaulting the operator to `>=`.
    pub(super) fn length(ctx: &TestContext<'_>) -> bool {
        let (Some(actual), Some(expected)) = (ctx.value_length(), ctx.params().length) else {
            return false;
        };
        let op = ctx.params().comparison.unwrap_or(Comparison::Ge);
        coerce::compare(op, &serde_json::json!(actual), &serde_json::json!(expected))
    }

    /// Escape hatch for fields with no real constraint.
    pub(super) fn passthrough(_ctx: &TestContext<'_>) -> bool {
        true
    }

    /// Present, and non-empty when a string.
    pub(super) fn value(ctx: &TestContext<'_>) -> bool {
        match ctx.value() {
            None => false,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Present and exactly `"true"` or `"false"`, case-insensitively.
    pub(super) fn bool_string(ctx: &TestContext<'_>) -> bool {
        ctx.text()
            .is_some_and(|s| bool_str().validate(&s).is_ok())
    }

    /// Recursive delegation to a nested schema.
    pub(super) fn schema(ctx: &TestContext<'_>) -> bool {
        match (&ctx.params().schema, ctx.value()) {
            (Some(nested), Some(_)) => ctx.validate_nested(nested),
            _ => false,
        }
    }
}
