//! Count evaluation: compare an element count against configured bounds
//!
//! The evaluator is a pure decision function with three terminal outcomes:
//! no violation, exact violation, or bound violation. It has no state and
//! no side effects beyond producing the descriptor.

use std::borrow::Cow;

use serde::Serialize;

use crate::constraint::Count;
use crate::foundation::{Countable, Violation, ViolationSink};

/// Selects the message template and violated limit for `count`, if any.
///
/// Decision order: exact bound (`min == max`), then maximum, then minimum.
pub(crate) fn decide(constraint: &Count, count: usize) -> Option<(Cow<'static, str>, usize)> {
    if let (Some(min), Some(max)) = (constraint.min(), constraint.max())
        && min == max
    {
        if count != min {
            return Some((constraint.exact_template(), min));
        }
        return None;
    }

    if let Some(max) = constraint.max()
        && count > max
    {
        return Some((constraint.max_template(), max));
    }

    if let Some(min) = constraint.min()
        && count < min
    {
        return Some((constraint.min_template(), min));
    }

    None
}

/// Evaluates `value` against `constraint`.
///
/// An absent value (`None`) never violates: presence is a separate rule's
/// responsibility. Countability is guaranteed by the [`Countable`] bound,
/// so this entry point cannot fail; the dynamic front-end in
/// [`json`](crate::json) is the one that can reject a value's shape.
///
/// # Examples
///
/// ```
/// use cardinality::{Count, evaluate};
///
/// let constraint = Count::at_least(5);
/// let violation = evaluate(Some(&vec![1, 2]), &constraint).unwrap();
/// assert_eq!(violation.param("{{ limit }}"), Some("5"));
///
/// assert!(evaluate::<Vec<i32>>(None, &constraint).is_none());
/// ```
#[must_use]
pub fn evaluate<C>(value: Option<&C>, constraint: &Count) -> Option<Violation>
where
    C: Countable + Serialize + ?Sized,
{
    let value = value?;
    let count = value.count();
    let (template, limit) = decide(constraint, count)?;
    let invalid_value = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
    Some(Violation::new(template, count, limit, invalid_value))
}

/// Evaluates `value` and forwards any violation to `sink`.
pub fn evaluate_into<C, S>(value: Option<&C>, constraint: &Count, sink: &mut S)
where
    C: Countable + Serialize + ?Sized,
    S: ViolationSink + ?Sized,
{
    if let Some(violation) = evaluate(value, constraint) {
        sink.report(violation);
    }
}

impl Count {
    /// Evaluates `value` against this constraint.
    ///
    /// Method form of [`evaluate`].
    #[must_use]
    pub fn evaluate<C>(&self, value: Option<&C>) -> Option<Violation>
    where
        C: Countable + Serialize + ?Sized,
    {
        evaluate(value, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{COUNT_PLACEHOLDER, LIMIT_PLACEHOLDER, Violations};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn within_max_is_valid() {
        let constraint = Count::at_most(3);
        assert!(evaluate(Some(&vec![1]), &constraint).is_none());
        assert!(evaluate(Some(&vec![1, 2, 3]), &constraint).is_none());
    }

    #[test]
    fn above_max_violates_with_count_and_limit() {
        let constraint = Count::at_most(3);
        let violation = evaluate(Some(&vec![1, 2, 3, 4]), &constraint).unwrap();

        assert_eq!(violation.message_template, constraint.max_message());
        assert_eq!(violation.count, 4);
        assert_eq!(violation.violated_limit, 3);
        assert_eq!(violation.param(COUNT_PLACEHOLDER), Some("4"));
        assert_eq!(violation.param(LIMIT_PLACEHOLDER), Some("3"));
        assert_eq!(violation.invalid_value, json!([1, 2, 3, 4]));
    }

    #[test]
    fn below_min_violates_with_count_and_limit() {
        let constraint = Count::at_least(5);
        let violation = evaluate(Some(&vec!["a", "b"]), &constraint).unwrap();

        assert_eq!(violation.message_template, constraint.min_message());
        assert_eq!(violation.count, 2);
        assert_eq!(violation.violated_limit, 5);
    }

    #[test]
    fn exact_bound_accepts_matching_count() {
        let constraint = Count::exact(4);
        assert!(evaluate(Some(&vec![1, 2, 3, 4]), &constraint).is_none());
    }

    #[test]
    fn exact_bound_uses_exact_template_both_directions() {
        let constraint = Count::exact(4).with_exact_message("myMessage");

        let too_few = evaluate(Some(&vec![1, 2, 3]), &constraint).unwrap();
        assert_eq!(too_few.message_template, "myMessage");
        assert_eq!(too_few.count, 3);
        assert_eq!(too_few.violated_limit, 4);

        let too_many = evaluate(Some(&vec![1, 2, 3, 4, 5]), &constraint).unwrap();
        assert_eq!(too_many.message_template, "myMessage");
        assert_eq!(too_many.count, 5);
        assert_eq!(too_many.violated_limit, 4);
    }

    #[test]
    fn absent_value_never_violates() {
        assert!(evaluate::<Vec<i32>>(None, &Count::exact(6)).is_none());
        assert!(evaluate::<Vec<i32>>(None, &Count::at_least(1)).is_none());
    }

    #[test]
    fn mappings_are_counted_by_keys() {
        let constraint = Count::at_most(3);
        let map = BTreeMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

        let violation = evaluate(Some(&map), &constraint).unwrap();
        assert_eq!(violation.count, 4);
    }

    #[test]
    fn range_reports_the_bound_that_failed() {
        let constraint = Count::between(2, 4).unwrap();

        let too_few = evaluate(Some(&vec![1]), &constraint).unwrap();
        assert_eq!(too_few.violated_limit, 2);
        assert_eq!(too_few.message_template, constraint.min_message());

        let too_many = evaluate(Some(&vec![1, 2, 3, 4, 5]), &constraint).unwrap();
        assert_eq!(too_many.violated_limit, 4);
        assert_eq!(too_many.message_template, constraint.max_message());

        assert!(evaluate(Some(&vec![1, 2, 3]), &constraint).is_none());
    }

    #[test]
    fn slices_evaluate_through_the_capability() {
        let constraint = Count::at_least(2);
        let items = [1, 2, 3];
        assert!(evaluate(Some(&items[..]), &constraint).is_none());
    }

    #[test]
    fn evaluate_into_reports_only_violations() {
        let constraint = Count::at_most(1);
        let mut sink = Violations::new();

        evaluate_into(Some(&vec![1]), &constraint, &mut sink);
        assert!(sink.is_empty());

        evaluate_into(Some(&vec![1, 2]), &constraint, &mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.items()[0].count, 2);
    }

    #[test]
    fn method_form_matches_free_function() {
        let constraint = Count::at_most(2);
        let value = vec![1, 2, 3];
        assert_eq!(
            constraint.evaluate(Some(&value)),
            evaluate(Some(&value), &constraint)
        );
    }
}
