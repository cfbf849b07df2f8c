//! Common traits for heap data structures
//!
//! This module provides the shared vocabulary of the crate:
//!
//! - [`Heap`]: Base trait for min-heaps storing (priority, item) pairs
//! - [`Weighted`]: Capability of an entry that carries an ordering key
//! - [`HeapError`]: Errors returned by the checked heap operations
//!
//! The base [`Heap`] trait is compatible with Rust's standard heap API patterns,
//! so generic code (tests, the pathfinding module) can be written once against it.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    Empty,
    /// The index does not refer to a live element
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The number of live elements at the time of the call
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for heap of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// An entry that can be ordered by a weight.
///
/// The heap only ever compares weights; everything else about an entry is
/// opaque payload.
pub trait Weighted {
    /// The ordering key. Smaller weights are extracted first.
    type Weight: Ord;

    /// Returns the ordering key of this entry
    fn weight(&self) -> &Self::Weight;
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use dary_heap::Heap;
/// use dary_heap::dary::DaryHeap;
/// use dary_heap::node::Node;
///
/// let mut heap: DaryHeap<Node<&str, i32>> = Heap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log_d n) for a d-ary heap.
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(d log_d n) for a d-ary heap.
    fn pop(&mut self) -> Option<(P, T)>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}
