//! D-ary min-heap implementation
//!
//! A d-ary heap generalizes the binary heap: every internal node has up to `d`
//! children instead of two. The tree is stored implicitly in a `Vec`, with the
//! children of index `i` at `i*d + 1 ..= i*d + d` and its parent at `(i - 1) / d`.
//!
//! Raising `d` makes the tree shallower, so swimming up (insert, and the
//! priority decreases of Dijkstra or Prim) touches only `log_d n` levels. The
//! price is paid on the way down: sinking compares up to `d` children per level.
//! Workloads dominated by inserts and priority decreases should pick `d > 2`.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity      |
//! |------------------|-----------------|
//! | `push_node`      | O(log_d n)      |
//! | `pop_node`       | O(d log_d n)    |
//! | `remove_at`      | O(d log_d n)    |
//! | `peek_node`      | O(1)            |
//! | `contains`       | O(n)            |
//! | `heapify`        | O(n)            |
//! | `from_nodes`     | O(n log_d n)    |
//!
//! # Example
//!
//! ```rust
//! use dary_heap::dary::DaryHeap;
//! use dary_heap::node::Node;
//!
//! let weights = [10, 20, 30, 5, 7, 9, 11, 13, 15, 17];
//! let mut heap = DaryHeap::from_nodes(3, weights.iter().map(|&w| Node::new(w, w)));
//!
//! assert_eq!(heap.peek_node().map(|n| n.weight), Some(5));
//! assert_eq!(heap.pop_node().map(|n| n.value), Some(5));
//! assert_eq!(heap.peek_node().map(|n| n.weight), Some(7));
//! assert_eq!(heap.len(), 9);
//! assert!(heap.contains(&15));
//! assert!(!heap.contains(&151));
//! ```

use std::fmt;

use crate::config::{clamp_degree, BuildStrategy, HeapConfig, MIN_DEGREE};
use crate::node::Node;
use crate::traits::{Heap, HeapError, Weighted};

/// A min-heap with a configurable branching factor
///
/// Entries are ordered by [`Weighted::weight`]; entries with equal weights come
/// out in an unspecified order. The heap owns its entries and hands them back
/// by value when they are removed.
#[derive(Debug, Clone)]
pub struct DaryHeap<N> {
    /// Implicit tree in level order
    data: Vec<N>,
    /// Branching factor, always >= 2
    degree: usize,
}

impl<N: Weighted> DaryHeap<N> {
    /// Creates an empty heap with the given branching factor
    ///
    /// Degrees below 2 are clamped to 2.
    pub fn new(degree: usize) -> Self {
        DaryHeap {
            data: Vec::new(),
            degree: clamp_degree(degree),
        }
    }

    /// Creates an empty heap that can hold `capacity` nodes without reallocating
    pub fn with_capacity(degree: usize, capacity: usize) -> Self {
        DaryHeap {
            data: Vec::with_capacity(capacity),
            degree: clamp_degree(degree),
        }
    }

    /// Builds a heap from `nodes` by inserting them one at a time
    ///
    /// # Time Complexity
    /// O(n log_d n)
    pub fn from_nodes<I>(degree: usize, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        Self::with_config(HeapConfig::new(degree), nodes)
    }

    /// Builds a heap from `nodes` bottom-up, sinking every internal node
    ///
    /// # Time Complexity
    /// O(n)
    pub fn heapify(degree: usize, nodes: Vec<N>) -> Self {
        let mut heap = DaryHeap {
            data: nodes,
            degree: clamp_degree(degree),
        };
        heap.rebuild();
        heap
    }

    /// Builds a heap according to `config`, loading `nodes` with the configured strategy
    pub fn with_config<I>(config: HeapConfig, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut heap = Self::with_capacity(config.degree(), config.capacity());
        match config.strategy() {
            BuildStrategy::Insertion => heap.extend(nodes),
            BuildStrategy::Heapify => {
                heap.data.extend(nodes);
                heap.rebuild();
            }
        }
        log::debug!(
            "built d-ary heap: degree={}, strategy={:?}, nodes={}",
            heap.degree,
            config.strategy(),
            heap.data.len()
        );
        heap
    }

    /// The branching factor
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the number of nodes in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of nodes the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Releases unused backing storage
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Removes every node
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Inserts a node and swims it up to its place
    ///
    /// # Time Complexity
    /// O(log_d n)
    pub fn push_node(&mut self, node: N) {
        self.data.push(node);
        let last = self.data.len() - 1;
        self.swim(last);
    }

    /// Returns the minimum node without removing it
    ///
    /// Returns `None` when the heap is empty.
    #[inline]
    pub fn peek_node(&self) -> Option<&N> {
        self.data.first()
    }

    /// Returns the minimum node, or [`HeapError::Empty`]
    pub fn try_peek(&self) -> Result<&N, HeapError> {
        self.peek_node().ok_or_else(|| {
            log::trace!("peek on empty heap");
            HeapError::Empty
        })
    }

    /// Removes and returns the minimum node
    ///
    /// Returns `None` when the heap is empty; draining a heap is not an error.
    pub fn pop_node(&mut self) -> Option<N> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Removes and returns the node stored at `index`
    ///
    /// The last node is moved into the hole and then sunk or swum, whichever
    /// restores the heap property.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn remove_at(&mut self, index: usize) -> N {
        let len = self.data.len();
        assert!(
            index < len,
            "remove_at index {} out of bounds for heap of length {}",
            index,
            len
        );

        let removed = self.data.swap_remove(index);

        // Removing the last slot leaves nothing to repair
        if index < self.data.len() && !self.sink(index) {
            self.swim(index);
        }

        removed
    }

    /// Removes and returns the node stored at `index`, or
    /// [`HeapError::IndexOutOfBounds`]
    pub fn try_remove_at(&mut self, index: usize) -> Result<N, HeapError> {
        let len = self.data.len();
        if index >= len {
            log::trace!("remove_at({}) rejected, len={}", index, len);
            return Err(HeapError::IndexOutOfBounds { index, len });
        }
        Ok(self.remove_at(index))
    }

    /// Returns the storage index of the first node matching `predicate`
    ///
    /// This is a linear scan over storage order.
    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&N) -> bool,
    {
        self.data.iter().position(predicate)
    }

    /// Iterates over the nodes in storage order (not sorted order)
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.data.iter()
    }

    /// The nodes in storage order (not sorted order)
    pub fn as_slice(&self) -> &[N] {
        &self.data
    }

    /// Consumes the heap, returning its storage unchanged
    pub fn into_vec(self) -> Vec<N> {
        self.data
    }

    /// Consumes the heap, returning its nodes sorted by ascending weight
    pub fn into_sorted_vec(mut self) -> Vec<N> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(node) = self.pop_node() {
            sorted.push(node);
        }
        sorted
    }

    /// Checks the heap property: no node is lighter than its parent
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[self.parent(i)].weight() <= self.data[i].weight())
    }

    /// Index of the parent of `index` (which must not be the root)
    #[inline]
    fn parent(&self, index: usize) -> usize {
        (index - 1) / self.degree
    }

    /// Index of the first child of `index`
    #[inline]
    fn first_child(&self, index: usize) -> usize {
        index.saturating_mul(self.degree).saturating_add(1)
    }

    /// Restores the heap property over the whole storage
    fn rebuild(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        let last_parent = self.parent(len - 1);
        for index in (0..=last_parent).rev() {
            self.sink(index);
        }
    }

    /// Moves the node at `index` up while it is lighter than its parent
    ///
    /// Returns whether the node moved.
    fn swim(&mut self, mut index: usize) -> bool {
        let mut moved = false;
        while index > 0 {
            let parent = self.parent(index);
            if self.data[index].weight() < self.data[parent].weight() {
                self.data.swap(index, parent);
                index = parent;
                moved = true;
            } else {
                break;
            }
        }
        moved
    }

    /// Moves the node at `index` down while some child is lighter
    ///
    /// Returns whether the node moved.
    fn sink(&mut self, mut index: usize) -> bool {
        let len = self.data.len();
        let mut moved = false;
        loop {
            let first = self.first_child(index);
            if first >= len {
                break;
            }
            let end = first.saturating_add(self.degree).min(len);

            let mut smallest = first;
            for child in first + 1..end {
                if self.data[child].weight() < self.data[smallest].weight() {
                    smallest = child;
                }
            }

            if self.data[smallest].weight() < self.data[index].weight() {
                self.data.swap(index, smallest);
                index = smallest;
                moved = true;
            } else {
                break;
            }
        }
        moved
    }
}

impl<V: PartialEq, W: Ord> DaryHeap<Node<V, W>> {
    /// Returns the storage index of a node carrying `value`
    ///
    /// # Time Complexity
    /// O(n): there is no value-to-index map.
    pub fn find(&self, value: &V) -> Option<usize> {
        self.position(|node| node.value == *value)
    }

    /// Returns true if some node carries `value`
    ///
    /// # Time Complexity
    /// O(n)
    pub fn contains(&self, value: &V) -> bool {
        self.find(value).is_some()
    }
}

impl<T, P: Ord> Heap<T, P> for DaryHeap<Node<T, P>> {
    fn new() -> Self {
        DaryHeap::new(MIN_DEGREE)
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.push_node(Node::new(item, priority));
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.peek_node().map(|node| (&node.weight, &node.value))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        self.pop_node().map(Node::into_parts)
    }

    fn merge(&mut self, other: Self) {
        // Appending and rebuilding is O(n + m), cheaper than m pushes
        self.data.extend(other.data);
        self.rebuild();
    }
}

impl<N: Weighted> Extend<N> for DaryHeap<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for node in iter {
            self.push_node(node);
        }
    }
}

impl<N: Weighted> FromIterator<N> for DaryHeap<N> {
    /// Collects into a binary heap
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        DaryHeap::from_nodes(MIN_DEGREE, iter)
    }
}

impl<N: Weighted> Default for DaryHeap<N> {
    fn default() -> Self {
        DaryHeap::new(MIN_DEGREE)
    }
}

impl<N: fmt::Display> fmt::Display for DaryHeap<N> {
    /// Dumps the nodes in storage order, one per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, node) in self.data.iter().enumerate() {
            writeln!(f, "{}: {}", index, node)?;
        }
        Ok(())
    }
}
