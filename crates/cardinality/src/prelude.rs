//! Prelude module for convenient imports.
//!
//! Provides a single `use cardinality::prelude::*;` import that brings in
//! the constraint, the evaluation entry points, and the foundation types.
//!
//! # Examples
//!
//! ```
//! use cardinality::prelude::*;
//!
//! let constraint = Count::between(1, 10).unwrap();
//! assert!(evaluate(Some(&vec![1, 2, 3]), &constraint).is_none());
//! ```

pub use crate::constraint::{Count, CountOptions};
pub use crate::evaluator::{evaluate, evaluate_into};
pub use crate::foundation::{
    COUNT_PLACEHOLDER, ConstraintError, Countable, LIMIT_PLACEHOLDER, UnexpectedType, Violation,
    ViolationSink, Violations,
};

#[cfg(feature = "json")]
pub use crate::json::{element_count, evaluate_json, json_type_name};
