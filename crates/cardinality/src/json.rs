//! Dynamic evaluation over `serde_json::Value`
//!
//! The typed entry point in [`evaluator`](crate::evaluator) proves
//! countability at compile time. Dynamically-shaped data cannot, so this
//! front-end probes the value first: `null` counts as absent, arrays and
//! objects are countable, and everything else is rejected with
//! [`UnexpectedType`] before any bound is looked at.

use serde_json::Value;

use crate::constraint::Count;
use crate::evaluator::decide;
use crate::foundation::{UnexpectedType, Violation};

/// Returns a human-readable type name for a JSON value.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Probes a JSON value for an element count.
///
/// `Ok(None)` means the value is absent (`null`); `Err` means the value's
/// shape has no element count at all.
///
/// # Examples
///
/// ```
/// use cardinality::json::element_count;
/// use serde_json::json;
///
/// assert_eq!(element_count(&json!([1, 2, 3])), Ok(Some(3)));
/// assert_eq!(element_count(&json!(null)), Ok(None));
/// assert!(element_count(&json!("abc")).is_err());
/// ```
pub fn element_count(value: &Value) -> Result<Option<usize>, UnexpectedType> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(items.len())),
        Value::Object(map) => Ok(Some(map.len())),
        other => Err(UnexpectedType::countable(json_type_name(other))),
    }
}

/// Evaluates a JSON value against `constraint`.
///
/// `Ok(None)` is the valid outcome; `Ok(Some(violation))` is a failed
/// check; `Err` means the value was not countable to begin with and must
/// not be reported as a violation.
///
/// # Examples
///
/// ```
/// use cardinality::json::evaluate_json;
/// use cardinality::Count;
/// use serde_json::json;
///
/// let constraint = Count::at_most(3);
/// assert_eq!(evaluate_json(&json!([1, 2]), &constraint), Ok(None));
///
/// let violation = evaluate_json(&json!([1, 2, 3, 4]), &constraint)
///     .unwrap()
///     .unwrap();
/// assert_eq!(violation.count, 4);
/// ```
pub fn evaluate_json(value: &Value, constraint: &Count) -> Result<Option<Violation>, UnexpectedType> {
    let Some(count) = element_count(value)? else {
        return Ok(None);
    };
    Ok(decide(constraint, count)
        .map(|(template, limit)| Violation::new(template, count, limit, value.clone())))
}
