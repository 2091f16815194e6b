//! # cardinality
//!
//! A single declarative validation rule: check the element count of a
//! collection-like value against a minimum, maximum, or exact bound, and
//! describe the failure as a structured [`Violation`] instead of an error.
//!
//! ## Quick Start
//!
//! ```
//! use cardinality::{Count, evaluate};
//!
//! let constraint = Count::at_most(3);
//! assert!(evaluate(Some(&vec![1, 2]), &constraint).is_none());
//!
//! let violation = evaluate(Some(&vec![1, 2, 3, 4]), &constraint).unwrap();
//! assert_eq!(violation.count, 4);
//! assert_eq!(violation.violated_limit, 3);
//! assert_eq!(violation.param("{{ count }}"), Some("4"));
//! ```
//!
//! ## Scope
//!
//! The rule counts elements and nothing else. It never rejects an absent
//! value (presence is a different rule's job), never walks into elements,
//! and never formats messages: a violation carries a message *template* and
//! its substitution parameters, and the reporting side decides how to render
//! them.
//!
//! Values that cannot be counted at all are rejected up front with
//! [`UnexpectedType`], which propagates as `Err` so callers cannot confuse
//! "this data is invalid" with "this data has the wrong shape to check".

pub mod constraint;
pub mod evaluator;
pub mod foundation;
#[cfg(feature = "json")]
pub mod json;
pub mod prelude;

pub use constraint::{Count, CountOptions};
pub use evaluator::{evaluate, evaluate_into};
pub use foundation::{
    ConstraintError, Countable, UnexpectedType, Violation, ViolationSink, Violations,
};
