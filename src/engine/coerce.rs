//! Loose value coercion and comparison.
//!
//! Form data arrives stringly-typed, so the engine compares values the way
//! a browser would: `"18"` and `18` are equal under the default loose
//! comparison, numbers order numerically, and everything has a defined
//! answer rather than a panic.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde_json::Value;

use super::schema::Comparison;

/// Coerces a JSON value to a number with browser `Number()` semantics.
///
/// Returns `None` for NaN outcomes. Notably: `null` and the empty string
/// coerce to `0`, booleans to `0`/`1`, and strings are trimmed first.
/// `"Infinity"` coerces but is not finite; callers that need finiteness
/// check it themselves.
pub(crate) fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                match trimmed {
                    "Infinity" | "+Infinity" => Some(f64::INFINITY),
                    "-Infinity" => Some(f64::NEG_INFINITY),
                    _ => trimmed.parse::<f64>().ok(),
                }
            }
        }
        // Arrays coerce through their string form: [] -> "", [x] -> x.
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [only] => to_number(only),
            _ => None,
        },
        Value::Object(_) => None,
    }
}

/// Leading-integer parse with `parseInt` semantics.
///
/// `"12abc"` yields `12`; `""`, `"abc"`, and a bare sign yield `None`.
/// Numbers parse through their string form, so `12.5` yields `12`.
pub(crate) fn leading_int(value: &Value) -> Option<i64> {
    let text = match value {
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        _ => return None,
    };
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    // Digit runs longer than i64 still contain a leading integer.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// The string form of a scalar value, for pattern rules.
///
/// Strings borrow; numbers and booleans render; containers and `null`
/// have no text form.
pub(crate) fn to_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// Element count for containers, character count for strings.
pub(crate) fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}

/// Loose equality: numeric coercion when either side is comparable as a
/// number, string comparison otherwise.
pub(crate) fn loose_eq(left: &Value, right: &Value) -> bool {
    if left == right {
        return true;
    }
    match (to_number(left), to_number(right)) {
        (Some(a), Some(b)) => a == b,
        _ => match (to_text(left), to_text(right)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

/// Relational ordering after numeric coercion; falls back to lexicographic
/// comparison when both sides are strings that do not coerce.
fn loose_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (to_number(left), to_number(right)) {
        (Some(a), Some(b)) => a.partial_cmp(&b),
        _ => match (left, right) {
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => None,
        },
    }
}

/// Applies a comparison operator to two values.
///
/// Unordered operands (NaN outcomes, mixed types) fail every relational
/// operator except `!=`, which they satisfy.
pub(crate) fn compare(op: Comparison, left: &Value, right: &Value) -> bool {
    match op {
        Comparison::Eq => loose_eq(left, right),
        Comparison::StrictEq => left == right,
        Comparison::Ne => !loose_eq(left, right),
        Comparison::Lt => matches!(loose_cmp(left, right), Some(Ordering::Less)),
        Comparison::Le => matches!(
            loose_cmp(left, right),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Comparison::Gt => matches!(loose_cmp(left, right), Some(Ordering::Greater)),
        Comparison::Ge => matches!(
            loose_cmp(left, right),
            Some(Ordering::Greater | Ordering::Equal)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_coercion_matches_browser_rules() {
        assert_eq!(to_number(&json!(null)), Some(0.0));
        assert_eq!(to_number(&json!(true)), Some(1.0));
        assert_eq!(to_number(&json!(false)), Some(0.0));
        assert_eq!(to_number(&json!("")), Some(0.0));
        assert_eq!(to_number(&json!("  42  ")), Some(42.0));
        assert_eq!(to_number(&json!("4.5")), Some(4.5));
        assert_eq!(to_number(&json!("abc")), None);
        assert_eq!(to_number(&json!([])), Some(0.0));
        assert_eq!(to_number(&json!(["7"])), Some(7.0));
        assert_eq!(to_number(&json!([1, 2])), None);
        assert_eq!(to_number(&json!({})), None);
        assert_eq!(to_number(&json!("Infinity")), Some(f64::INFINITY));
    }

    #[test]
    fn leading_int_parses_prefixes() {
        assert_eq!(leading_int(&json!("12abc")), Some(12));
        assert_eq!(leading_int(&json!("  -7xyz")), Some(-7));
        assert_eq!(leading_int(&json!("+3")), Some(3));
        assert_eq!(leading_int(&json!("")), None);
        assert_eq!(leading_int(&json!("abc")), None);
        assert_eq!(leading_int(&json!("-")), None);
        assert_eq!(leading_int(&json!(12.5)), Some(12));
        assert!(leading_int(&json!("99999999999999999999")).is_some());
        assert_eq!(leading_int(&json!(42)), Some(42));
        assert_eq!(leading_int(&json!(true)), None);
    }

    #[test]
    fn loose_equality_coerces_numbers() {
        assert!(loose_eq(&json!("18"), &json!(18)));
        assert!(loose_eq(&json!(true), &json!(1)));
        assert!(!loose_eq(&json!("18"), &json!(19)));
    }

    #[test]
    fn strict_equality_does_not_coerce() {
        assert!(!compare(Comparison::StrictEq, &json!("18"), &json!(18)));
        assert!(compare(Comparison::StrictEq, &json!(18), &json!(18)));
    }

    #[test]
    fn relational_operators() {
        assert!(compare(Comparison::Ge, &json!(21), &json!(18)));
        assert!(compare(Comparison::Ge, &json!("21"), &json!(18)));
        assert!(!compare(Comparison::Lt, &json!(21), &json!(18)));
        assert!(compare(Comparison::Ne, &json!("a"), &json!("b")));
        // Unordered operands fail relational operators.
        assert!(!compare(Comparison::Ge, &json!({}), &json!(1)));
        assert!(compare(Comparison::Ne, &json!({}), &json!(1)));
    }

    #[test]
    fn lengths() {
        assert_eq!(length_of(&json!("äbc")), Some(3));
        assert_eq!(length_of(&json!([1, 2])), Some(2));
        assert_eq!(length_of(&json!({"a": 1})), Some(1));
        assert_eq!(length_of(&json!(42)), None);
    }
}
