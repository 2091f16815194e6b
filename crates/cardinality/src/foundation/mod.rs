//! Core building blocks of the rule
//!
//! - **Capability**: [`Countable`], the one-method trait the evaluator
//!   depends on instead of concrete container types
//! - **Descriptors**: [`Violation`], [`ViolationSink`], [`Violations`]
//! - **Errors**: [`ConstraintError`], [`UnexpectedType`]

pub mod countable;
pub mod error;
pub mod violation;

// Re-export everything at the foundation level for convenience
pub use countable::Countable;
pub use error::{ConstraintError, UnexpectedType};
pub use violation::{COUNT_PLACEHOLDER, LIMIT_PLACEHOLDER, Violation, ViolationSink, Violations};
