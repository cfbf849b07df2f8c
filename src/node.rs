//! Weighted heap entries
//!
//! A [`Node`] pairs a payload `value` with an ordering `weight`. Nodes are
//! plain values: the caller builds them, hands them to a heap by value and
//! gets them back by value on removal.

use std::cmp::Ordering;
use std::fmt;

use crate::traits::Weighted;

/// An entry with a payload value and an ordering weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Node<V, W> {
    /// The payload / identity of the entry
    pub value: V,
    /// The ordering key; smaller weights are extracted first
    pub weight: W,
}

impl<V, W: Ord> Node<V, W> {
    /// Creates a new node
    pub fn new(value: V, weight: W) -> Self {
        Node { value, weight }
    }

    /// Compares two nodes by weight only
    pub fn compare(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }

    /// Splits the node into its `(weight, value)` parts
    pub fn into_parts(self) -> (W, V) {
        (self.weight, self.value)
    }
}

impl<V, W: Ord> Weighted for Node<V, W> {
    type Weight = W;

    #[inline]
    fn weight(&self) -> &W {
        &self.weight
    }
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for Node<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{value: {}, weight: {}}}", self.value, self.weight)
    }
}
