//! Error types for constraint construction and type probing
//!
//! Two distinct classes live here. [`ConstraintError`] is raised while a
//! constraint is being built and is fatal to that configuration instance.
//! [`UnexpectedType`] is raised when evaluation receives a value whose shape
//! cannot be counted at all. Validation violations are neither: they are
//! ordinary outcomes, described by [`Violation`](super::Violation) and handed
//! to a sink rather than thrown.

use thiserror::Error;

/// Errors raised while constructing a [`Count`](crate::Count) constraint.
///
/// A malformed configuration is never silently corrected; construction fails
/// and the caller gets no constraint instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    /// Neither `min` nor `max` was supplied.
    #[error("at least one of `min` or `max` must be set")]
    MissingBounds,

    /// `min` exceeds `max`.
    #[error("`min` ({min}) must not exceed `max` ({max})")]
    InvertedRange {
        /// The lower bound that was given.
        min: usize,
        /// The upper bound that was given.
        max: usize,
    },

    /// Declarative metadata could not be decoded: unknown option key,
    /// wrong shape, or an out-of-range bound.
    #[error("invalid constraint metadata: {0}")]
    Metadata(String),
}

/// The evaluated value does not expose an element count.
///
/// This is a programming or wiring error, not a validation failure. It
/// propagates to the caller as `Err` and is never reported through the
/// violation sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a {expected} value, got {actual}")]
pub struct UnexpectedType {
    /// The capability the rule needs.
    pub expected: &'static str,
    /// Human-readable name of the type that was received.
    pub actual: &'static str,
}

impl UnexpectedType {
    /// A value that cannot be counted.
    #[must_use]
    pub fn countable(actual: &'static str) -> Self {
        Self {
            expected: "countable",
            actual,
        }
    }
}
