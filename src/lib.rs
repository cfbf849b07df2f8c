//! D-ary Heaps for Rust
//!
//! This crate provides a min-heap priority queue with a configurable branching
//! factor `d >= 2`. With `d = 2` it is the classic binary heap; larger `d` gives
//! shallower trees, trading cheaper inserts for more comparisons on removal.
//!
//! # Features
//!
//! - **[`DaryHeap`](dary::DaryHeap)**: O(log_d n) insert, O(d log_d n) delete-min and
//!   arbitrary removal, O(1) peek, O(n) bottom-up construction
//! - **Pathfinding**: Dijkstra, A* and Prim's minimum spanning forest built on the heap
//!
//! # Example
//!
//! ```rust
//! use dary_heap::dary::DaryHeap;
//! use dary_heap::node::Node;
//!
//! let mut heap = DaryHeap::new(4);
//! heap.push_node(Node::new("item1", 5));
//! heap.push_node(Node::new("item2", 3));
//! assert_eq!(heap.peek_node(), Some(&Node::new("item2", 3)));
//! assert_eq!(heap.pop_node().map(|n| n.value), Some("item2"));
//! ```

pub mod config;
pub mod dary;
pub mod node;
pub mod pathfinding;
pub mod traits;

// Re-export the main types for convenience
pub use config::{BuildStrategy, HeapConfig};
pub use dary::DaryHeap;
pub use node::Node;
pub use traits::{Heap, HeapError, Weighted};
