//! The `Count` constraint: bounds and message templates
//!
//! A constraint is an immutable value object. It is built once per rule
//! declaration, shared freely across concurrent evaluations, and never
//! mutated afterwards.

use std::borrow::Cow;

use serde::Deserialize;

use crate::foundation::ConstraintError;

pub(crate) const DEFAULT_MIN_MESSAGE: &str =
    "This collection should contain {{ limit }} elements or more.";
pub(crate) const DEFAULT_MAX_MESSAGE: &str =
    "This collection should contain {{ limit }} elements or less.";
pub(crate) const DEFAULT_EXACT_MESSAGE: &str =
    "This collection should contain exactly {{ limit }} elements.";

/// Cardinality bounds for a collection-like value.
///
/// At least one bound is always set; `min <= max` always holds when both
/// are. `min == max` expresses "exactly N" and selects the exact-count
/// message on violation.
///
/// # Examples
///
/// ```
/// use cardinality::Count;
///
/// let exactly_five = Count::exact(5);
/// assert_eq!(exactly_five.min(), Some(5));
/// assert_eq!(exactly_five.max(), Some(5));
///
/// let tags = Count::between(1, 10).unwrap()
///     .with_min_message("Add at least {{ limit }} tag(s).");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count {
    min: Option<usize>,
    max: Option<usize>,
    min_message: Cow<'static, str>,
    max_message: Cow<'static, str>,
    exact_message: Cow<'static, str>,
}

/// Explicit options set for [`Count::from_options`].
///
/// Any combination of bounds and message overrides; unset messages fall
/// back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Inclusive lower bound on the element count.
    pub min: Option<usize>,
    /// Inclusive upper bound on the element count.
    pub max: Option<usize>,
    /// Template used when the count falls below `min`.
    pub min_message: Option<Cow<'static, str>>,
    /// Template used when the count exceeds `max`.
    pub max_message: Option<Cow<'static, str>>,
    /// Template used when `min == max` and the count differs.
    pub exact_message: Option<Cow<'static, str>>,
}

impl Count {
    fn with_bounds(min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            min,
            max,
            min_message: Cow::Borrowed(DEFAULT_MIN_MESSAGE),
            max_message: Cow::Borrowed(DEFAULT_MAX_MESSAGE),
            exact_message: Cow::Borrowed(DEFAULT_EXACT_MESSAGE),
        }
    }

    /// Requires exactly `n` elements.
    ///
    /// The scalar construction path: normalizes to `min = max = n`.
    #[must_use]
    pub fn exact(n: usize) -> Self {
        Self::with_bounds(Some(n), Some(n))
    }

    /// Requires at least `min` elements.
    #[must_use]
    pub fn at_least(min: usize) -> Self {
        Self::with_bounds(Some(min), None)
    }

    /// Requires at most `max` elements.
    #[must_use]
    pub fn at_most(max: usize) -> Self {
        Self::with_bounds(None, Some(max))
    }

    /// Requires between `min` and `max` elements, inclusive.
    pub fn between(min: usize, max: usize) -> Result<Self, ConstraintError> {
        if min > max {
            return Err(ConstraintError::InvertedRange { min, max });
        }
        Ok(Self::with_bounds(Some(min), Some(max)))
    }

    /// Builds a constraint from an explicit options set.
    pub fn from_options(options: CountOptions) -> Result<Self, ConstraintError> {
        let mut constraint = match (options.min, options.max) {
            (None, None) => return Err(ConstraintError::MissingBounds),
            (Some(min), Some(max)) => Self::between(min, max)?,
            (min, max) => Self::with_bounds(min, max),
        };
        if let Some(message) = options.min_message {
            constraint.min_message = message;
        }
        if let Some(message) = options.max_message {
            constraint.max_message = message;
        }
        if let Some(message) = options.exact_message {
            constraint.exact_message = message;
        }
        Ok(constraint)
    }

    /// Builds a constraint from declarative framework metadata.
    ///
    /// A bare non-negative integer means "exactly N"; an object supplies any
    /// combination of `min`, `max`, `min_message`, `max_message`, and
    /// `exact_message`. Anything else, including unknown option keys, fails
    /// with [`ConstraintError::Metadata`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cardinality::Count;
    /// use serde_json::json;
    ///
    /// let exact = Count::from_metadata(&json!(4)).unwrap();
    /// assert_eq!(exact.min(), exact.max());
    ///
    /// let range = Count::from_metadata(&json!({"min": 1, "max": 3})).unwrap();
    /// assert_eq!(range.max(), Some(3));
    ///
    /// assert!(Count::from_metadata(&json!({"limit": 5})).is_err());
    /// ```
    pub fn from_metadata(metadata: &serde_json::Value) -> Result<Self, ConstraintError> {
        if let Some(n) = metadata.as_u64() {
            let n = to_bound(n)?;
            return Ok(Self::exact(n));
        }

        let raw: RawOptions = serde_json::from_value(metadata.clone())
            .map_err(|err| ConstraintError::Metadata(err.to_string()))?;

        Self::from_options(CountOptions {
            min: raw.min.map(to_bound).transpose()?,
            max: raw.max.map(to_bound).transpose()?,
            min_message: raw.min_message.map(Cow::Owned),
            max_message: raw.max_message.map(Cow::Owned),
            exact_message: raw.exact_message.map(Cow::Owned),
        })
    }

    /// Replaces the below-minimum message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_min_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.min_message = message.into();
        self
    }

    /// Replaces the above-maximum message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.max_message = message.into();
        self
    }

    /// Replaces the exact-count message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_exact_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.exact_message = message.into();
        self
    }

    /// Inclusive lower bound, if set.
    #[must_use]
    pub fn min(&self) -> Option<usize> {
        self.min
    }

    /// Inclusive upper bound, if set.
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Template used when the count falls below the minimum.
    #[must_use]
    pub fn min_message(&self) -> &str {
        &self.min_message
    }

    /// Template used when the count exceeds the maximum.
    #[must_use]
    pub fn max_message(&self) -> &str {
        &self.max_message
    }

    /// Template used when an exact bound is missed.
    #[must_use]
    pub fn exact_message(&self) -> &str {
        &self.exact_message
    }

    pub(crate) fn min_template(&self) -> Cow<'static, str> {
        self.min_message.clone()
    }

    pub(crate) fn max_template(&self) -> Cow<'static, str> {
        self.max_message.clone()
    }

    pub(crate) fn exact_template(&self) -> Cow<'static, str> {
        self.exact_message.clone()
    }
}

fn to_bound(n: u64) -> Result<usize, ConstraintError> {
    usize::try_from(n)
        .map_err(|_| ConstraintError::Metadata(format!("bound {n} is out of range")))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    min: Option<u64>,
    max: Option<u64>,
    min_message: Option<String>,
    max_message: Option<String>,
    exact_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn exact_sets_both_bounds() {
        let constraint = Count::exact(5);
        assert_eq!(constraint.min(), Some(5));
        assert_eq!(constraint.max(), Some(5));
    }

    #[test]
    fn single_bound_constructors() {
        assert_eq!(Count::at_least(2).min(), Some(2));
        assert_eq!(Count::at_least(2).max(), None);
        assert_eq!(Count::at_most(7).min(), None);
        assert_eq!(Count::at_most(7).max(), Some(7));
    }

    #[test]
    fn between_rejects_inverted_range() {
        assert_eq!(
            Count::between(5, 2),
            Err(ConstraintError::InvertedRange { min: 5, max: 2 })
        );
        assert!(Count::between(2, 2).is_ok());
    }

    #[test]
    fn options_require_at_least_one_bound() {
        let err = Count::from_options(CountOptions::default()).unwrap_err();
        assert_eq!(err, ConstraintError::MissingBounds);
    }

    #[test]
    fn options_apply_message_overrides() {
        let constraint = Count::from_options(CountOptions {
            min: Some(1),
            max: Some(3),
            min_message: Some(Cow::Borrowed("myMinMessage")),
            ..CountOptions::default()
        })
        .unwrap();

        assert_eq!(constraint.min_message(), "myMinMessage");
        assert_eq!(constraint.max_message(), DEFAULT_MAX_MESSAGE);
        assert_eq!(constraint.exact_message(), DEFAULT_EXACT_MESSAGE);
    }

    #[test]
    fn builder_overrides_replace_templates() {
        let constraint = Count::exact(4).with_exact_message("myMessage");
        assert_eq!(constraint.exact_message(), "myMessage");
    }

    #[test]
    fn metadata_scalar_means_exact() {
        let constraint = Count::from_metadata(&json!(6)).unwrap();
        assert_eq!(constraint.min(), Some(6));
        assert_eq!(constraint.max(), Some(6));
    }

    #[test]
    fn metadata_object_with_bounds_and_messages() {
        let constraint = Count::from_metadata(&json!({
            "min": 4,
            "max": 4,
            "exact_message": "myMessage",
        }))
        .unwrap();

        assert_eq!(constraint.min(), Some(4));
        assert_eq!(constraint.exact_message(), "myMessage");
    }

    #[test]
    fn metadata_rejects_unknown_keys() {
        let err = Count::from_metadata(&json!({"min": 1, "limit": 3})).unwrap_err();
        assert!(matches!(err, ConstraintError::Metadata(_)));
    }

    #[test]
    fn metadata_rejects_missing_bounds() {
        let err = Count::from_metadata(&json!({"min_message": "m"})).unwrap_err();
        assert_eq!(err, ConstraintError::MissingBounds);
    }

    #[test]
    fn metadata_rejects_wrong_shapes() {
        assert!(Count::from_metadata(&json!("five")).is_err());
        assert!(Count::from_metadata(&json!(-3)).is_err());
        assert!(Count::from_metadata(&json!({"min": "1"})).is_err());
    }

    #[test]
    fn metadata_rejects_inverted_range() {
        let err = Count::from_metadata(&json!({"min": 9, "max": 1})).unwrap_err();
        assert_eq!(err, ConstraintError::InvertedRange { min: 9, max: 1 });
    }
}
