//! Construction settings for [`DaryHeap`](crate::dary::DaryHeap)
//!
//! A [`HeapConfig`] bundles the branching factor, the initial capacity and
//! the strategy used to load an initial batch of nodes.
//!
//! ```rust
//! use dary_heap::config::{BuildStrategy, HeapConfig};
//!
//! let config = HeapConfig::new(4)
//!     .with_capacity(1024)
//!     .with_strategy(BuildStrategy::Heapify);
//! assert_eq!(config.degree(), 4);
//!
//! // Degrees below two are clamped
//! assert_eq!(HeapConfig::new(0).degree(), 2);
//! ```

/// The smallest supported branching factor
pub const MIN_DEGREE: usize = 2;

/// Clamps a requested branching factor to at least [`MIN_DEGREE`]
#[inline]
pub fn clamp_degree(degree: usize) -> usize {
    if degree < MIN_DEGREE {
        log::debug!("clamping heap degree {} to {}", degree, MIN_DEGREE);
        MIN_DEGREE
    } else {
        degree
    }
}

/// How an initial batch of nodes is loaded into a heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildStrategy {
    /// Push every node in turn, swimming each one: O(n log_d n)
    #[default]
    Insertion,
    /// Take the batch as-is and sink every internal node bottom-up: O(n)
    Heapify,
}

/// Construction settings for a d-ary heap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    degree: usize,
    capacity: usize,
    strategy: BuildStrategy,
}

impl HeapConfig {
    /// Settings for a heap with the given branching factor (clamped to at least 2)
    pub fn new(degree: usize) -> Self {
        HeapConfig {
            degree: clamp_degree(degree),
            capacity: 0,
            strategy: BuildStrategy::Insertion,
        }
    }

    /// Settings for a binary heap built bottom-up
    pub fn binary() -> Self {
        HeapConfig::new(MIN_DEGREE).with_strategy(BuildStrategy::Heapify)
    }

    /// Sets the branching factor (clamped to at least 2)
    pub fn with_degree(mut self, degree: usize) -> Self {
        self.degree = clamp_degree(degree);
        self
    }

    /// Reserves room for at least `capacity` nodes up front
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets how an initial batch of nodes is loaded
    pub fn with_strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The branching factor
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The initial capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The build strategy
    pub fn strategy(&self) -> BuildStrategy {
        self.strategy
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        HeapConfig::new(MIN_DEGREE)
    }
}
