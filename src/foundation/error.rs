//! Structured validation errors.
//!
//! [`ValidationError`] is deliberately cheap to construct: codes, messages,
//! and param keys are `Cow<'static, str>` so the common all-static case
//! allocates nothing, and params live in a [`SmallVec`] sized for the
//! typical one-or-two-param error.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Inline storage for error params; most errors carry at most three.
pub type ParamPairs = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>;

// ============================================================================
// ValidationError
// ============================================================================

/// A single validation failure.
///
/// Carries a stable machine-readable `code`, a human-readable `message`,
/// the offending `field` when known, and structured `params` describing
/// the constraint (e.g. `min = 5`).
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::foundation::ValidationError;
///
/// let err = ValidationError::new("min_length", "too short")
///     .with_field("username")
///     .with_param("min", "3");
/// assert_eq!(err.code, "min_length");
/// assert_eq!(err.param("min"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable machine-readable error code (e.g. `"min_length"`).
    pub code: Cow<'static, str>,
    /// Human-readable description of the failure.
    pub message: Cow<'static, str>,
    /// Field path the error applies to, when known.
    pub field: Option<Cow<'static, str>>,
    /// Structured constraint parameters as key/value pairs.
    pub params: ParamPairs,
}

impl ValidationError {
    /// Creates a new error with the given code and message.
    #[must_use]
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Attaches the field this error applies to.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attaches a structured constraint parameter.
    #[must_use]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a param by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    // ------------------------------------------------------------------
    // Common constructors
    // ------------------------------------------------------------------

    /// A required value was absent or empty.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "value is required")
    }

    /// The value did not match an expected format.
    #[must_use]
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        Self::new("invalid_format", format!("expected format: {expected}"))
            .with_param("expected", expected)
    }

    /// The value had the wrong type for the validator.
    #[must_use]
    pub fn type_mismatch(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        Self::new("type_mismatch", format!("expected {expected}"))
            .with_param("expected", expected)
    }

    /// The value was shorter than allowed.
    #[must_use]
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("length {actual} is below minimum {min}"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// The value was longer than allowed.
    #[must_use]
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("length {actual} exceeds maximum {max}"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// The value fell outside a permitted range or comparison.
    #[must_use]
    pub fn out_of_range(detail: impl Into<Cow<'static, str>>) -> Self {
        Self::new("out_of_range", detail)
    }

    /// Free-form failure with a caller-chosen code.
    #[must_use]
    pub fn custom(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {}: {}", self.code, field, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_strings_do_not_allocate() {
        let err = ValidationError::new("code", "message");
        assert!(matches!(err.code, Cow::Borrowed(_)));
        assert!(matches!(err.message, Cow::Borrowed(_)));
    }

    #[test]
    fn builder_chain() {
        let err = ValidationError::new("min_length", "too short")
            .with_field("username")
            .with_param("min", "3")
            .with_param("actual", "1");
        assert_eq!(err.field.as_deref(), Some("username"));
        assert_eq!(err.param("min"), Some("3"));
        assert_eq!(err.param("actual"), Some("1"));
        assert_eq!(err.param("missing"), None);
    }

    #[test]
    fn display_includes_field_when_present() {
        let err = ValidationError::required().with_field("email");
        assert_eq!(err.to_string(), "[required] email: value is required");

        let err = ValidationError::required();
        assert_eq!(err.to_string(), "[required] value is required");
    }

    #[test]
    fn convenience_constructors_carry_params() {
        let err = ValidationError::min_length(5, 2);
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("min"), Some("5"));
        assert_eq!(err.param("actual"), Some("2"));

        let err = ValidationError::invalid_format("email");
        assert_eq!(err.param("expected"), Some("email"));
    }
}
