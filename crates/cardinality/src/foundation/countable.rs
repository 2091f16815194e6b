//! The countable capability
//!
//! The evaluator depends on this one-method trait instead of concrete
//! container types, so any sequence, set, or mapping with a well-defined
//! element count can be checked.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Types with a well-defined, finite element count.
///
/// Sequences count items, sets count members, and mappings count keys.
/// Iteration order and key contents never affect the result.
///
/// # Examples
///
/// ```
/// use cardinality::Countable;
/// use std::collections::BTreeMap;
///
/// assert_eq!(vec![1, 2, 3].count(), 3);
/// assert_eq!(BTreeMap::from([("a", 1), ("b", 2)]).count(), 2);
/// ```
pub trait Countable {
    /// Number of elements in the value.
    fn count(&self) -> usize;
}

impl<T> Countable for [T] {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for Vec<T> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for VecDeque<T> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Countable for HashSet<T, S> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for BTreeSet<T> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Countable for HashMap<K, V, S> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Countable for BTreeMap<K, V> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "json")]
impl Countable for serde_json::Map<String, serde_json::Value> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}
