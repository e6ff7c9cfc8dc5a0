//! Property tests over the engine.

use formguard::prelude::*;
use proptest::prelude::*;
use serde_json::json;

fn schema_under_test() -> Schema {
    Schema::builder()
        .field("name", "value")
        .field("email", RuleSpec::config("email").optional())
        .field(
            "age",
            RuleSpec::config("compare")
                .comparison(Comparison::Ge)
                .compare_value(json!(18)),
        )
        .build()
}

proptest! {
    /// Validation is a pure function of (record, schema).
    #[test]
    fn validation_is_idempotent(
        name in ".*",
        email in ".*",
        age in proptest::option::of(-1000i64..1000),
    ) {
        let mut record = serde_json::Map::new();
        record.insert("name".into(), json!(name));
        record.insert("email".into(), json!(email));
        if let Some(age) = age {
            record.insert("age".into(), json!(age));
        }
        let record = serde_json::Value::Object(record);

        let schema = schema_under_test();
        let validator = Validator::new();
        let first = serde_json::to_value(validator.validate(&record, &schema)).unwrap();
        let second = serde_json::to_value(validator.validate(&record, &schema)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// `valid` is exactly "no errors", and every schema field present in
    /// the record lands in `data`.
    #[test]
    fn report_shape_invariants(
        name in ".*",
        age in -1000i64..1000,
    ) {
        let record = json!({"name": name, "age": age});
        let report = Validator::new().validate(&record, &schema_under_test());

        prop_assert_eq!(report.valid, report.errors.is_empty());
        prop_assert!(report.data.contains_key("name"));
        prop_assert!(report.data.contains_key("age"));
        // No field appears in errors without being in the schema.
        for field in report.errors.keys() {
            prop_assert!(["name", "email", "age"].contains(&field.as_str()));
        }
    }

    /// The numeric age threshold behaves like a plain integer comparison.
    #[test]
    fn age_threshold_matches_integer_comparison(age in -1000i64..1000) {
        let record = json!({"name": "x", "age": age});
        let report = Validator::new().validate(&record, &schema_under_test());
        prop_assert_eq!(report.error("age").is_none(), age >= 18);
    }

    /// Stringified integers behave identically to bare integers under
    /// the loose comparison.
    #[test]
    fn loose_comparison_ignores_stringiness(age in -1000i64..1000) {
        let schema = schema_under_test();
        let validator = Validator::new();
        let as_number = validator.validate(&json!({"name": "x", "age": age}), &schema);
        let as_string = validator.validate(&json!({"name": "x", "age": age.to_string()}), &schema);
        prop_assert_eq!(as_number.valid, as_string.valid);
    }

    /// digit strings always satisfy the digits rule; anything containing
    /// a non-digit never does.
    #[test]
    fn digits_rule_agrees_with_char_check(s in "[ -~]*") {
        let schema = Schema::builder().field("f", "digits").build();
        let report = Validator::new().validate(&json!({"f": s.clone()}), &schema);
        let expected = !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        prop_assert_eq!(report.valid, expected);
    }
}
