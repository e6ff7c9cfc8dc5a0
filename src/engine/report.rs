//! Validation results.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::schema::RuleParams;

/// The failing test context recorded for a field.
///
/// Holds exactly what the failing rule saw: the rule's name (when it had
/// one), the submitted value at test time, and the spec's declared
/// params, so callers can render "expected >= 18, got 17" style messages.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Name of the failing rule; `None` for inline test functions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// The value under test, when one was submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// The failing spec's declared params.
    #[serde(flatten)]
    pub params: RuleParams,
}

/// Outcome of one validation pass.
///
/// Always fully shaped: `valid` is present even when the input could not
/// be validated at all, and it is `true` exactly when `errors` is empty.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Overall validity; `true` iff `errors` is empty.
    pub valid: bool,
    /// Submitted values for every schema field present in the record,
    /// in schema order, whether or not the field passed.
    pub data: IndexMap<String, Value>,
    /// First failing test context per failed field, in schema order.
    pub errors: IndexMap<String, FieldError>,
}

impl ValidationReport {
    /// An empty, invalid report for input that could not be validated.
    #[must_use]
    pub(crate) fn malformed() -> Self {
        Self {
            valid: false,
            data: IndexMap::new(),
            errors: IndexMap::new(),
        }
    }

    pub(crate) fn finish(data: IndexMap<String, Value>, errors: IndexMap<String, FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            data,
            errors,
        }
    }

    /// The recorded error for a field, if it failed.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// The value a field held at test time, if it was present.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_is_fully_shaped() {
        let report = ValidationReport::malformed();
        assert!(!report.valid);
        assert!(report.data.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn finish_derives_validity_from_errors() {
        let report = ValidationReport::finish(IndexMap::new(), IndexMap::new());
        assert!(report.valid);

        let mut errors = IndexMap::new();
        errors.insert(
            "f".to_owned(),
            FieldError {
                rule: Some("value".to_owned()),
                value: None,
                params: RuleParams::default(),
            },
        );
        let report = ValidationReport::finish(IndexMap::new(), errors);
        assert!(!report.valid);
        assert!(report.error("f").is_some());
    }

    #[test]
    fn serializes_with_flattened_params() {
        let mut errors = IndexMap::new();
        errors.insert(
            "age".to_owned(),
            FieldError {
                rule: Some("compare".to_owned()),
                value: Some(json!(17)),
                params: RuleParams {
                    comparison: Some(crate::engine::Comparison::Ge),
                    compare: Some(crate::engine::CompareTarget::Value(json!(18))),
                    ..RuleParams::default()
                },
            },
        );
        let report = ValidationReport::finish(IndexMap::new(), errors);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], json!(false));
        assert_eq!(json["errors"]["age"]["rule"], json!("compare"));
        assert_eq!(json["errors"]["age"]["comparison"], json!(">="));
    }
}
