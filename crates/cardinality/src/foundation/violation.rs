//! Violation descriptors and the reporting sink
//!
//! A violation is an ordinary, expected outcome of evaluation, never an
//! error. The descriptor carries a message *template* and its substitution
//! parameters; rendering and localization happen on the reporting side.

use std::borrow::Cow;

use smallvec::SmallVec;

/// Placeholder for the actual element count in message templates.
pub const COUNT_PLACEHOLDER: &str = "{{ count }}";

/// Placeholder for the violated bound in message templates.
pub const LIMIT_PLACEHOLDER: &str = "{{ limit }}";

/// Description of one failed cardinality check.
///
/// Created transiently during a single evaluation call and handed to a
/// [`ViolationSink`]; the rule never retains it.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The message template selected for this violation kind
    /// (min, max, or exact).
    pub message_template: Cow<'static, str>,

    /// Placeholder → substitution pairs.
    ///
    /// Always contains `{{ count }}` and `{{ limit }}`, in that order.
    pub params: SmallVec<[(Cow<'static, str>, String); 2]>,

    /// The offending value, serialized.
    pub invalid_value: serde_json::Value,

    /// The element count that was computed.
    pub count: usize,

    /// The numeric bound that failed: minimum, maximum, or the shared
    /// exact value.
    pub violated_limit: usize,
}

impl Violation {
    pub(crate) fn new(
        message_template: Cow<'static, str>,
        count: usize,
        violated_limit: usize,
        invalid_value: serde_json::Value,
    ) -> Self {
        let mut params = SmallVec::new();
        params.push((Cow::Borrowed(COUNT_PLACEHOLDER), count.to_string()));
        params.push((Cow::Borrowed(LIMIT_PLACEHOLDER), violated_limit.to_string()));
        Self {
            message_template,
            params,
            invalid_value,
            count,
            violated_limit,
        }
    }

    /// Looks up a substitution parameter by placeholder name.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Receiver for violations produced during evaluation.
///
/// The validation framework supplies the real implementation (violation
/// accumulation, property-path tracking). [`Violations`] is a minimal
/// collecting implementation for standalone use and tests.
pub trait ViolationSink {
    /// Accepts one violation descriptor.
    fn report(&mut self, violation: Violation);
}

/// A simple collecting [`ViolationSink`].
#[derive(Debug, Clone, Default)]
pub struct Violations {
    items: Vec<Violation>,
}

impl Violations {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected violations.
    #[must_use]
    pub fn items(&self) -> &[Violation] {
        &self.items
    }

    /// Returns the number of collected violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the collection, yielding the violations.
    #[must_use]
    pub fn into_vec(self) -> Vec<Violation> {
        self.items
    }
}

impl ViolationSink for Violations {
    fn report(&mut self, violation: Violation) {
        self.items.push(violation);
    }
}
