//! Dijkstra's, A* and Prim's algorithms on top of [`DaryHeap`]
//!
//! The d-ary heap has no `decrease_key`. The searches here use lazy deletion
//! instead: when a shorter route to a node is found the node is pushed again
//! with its new priority, and outdated entries are skipped when they surface.
//! This makes the workload push-heavy, which is where a branching factor above
//! two pays off (pushes only swim through `log_d n` levels).
//!
//! Node states are mapped to dense indices with an `FxHashMap`; the heap only
//! stores those lightweight indices.
//!
//! # Example
//!
//! ```rust
//! use dary_heap::pathfinding::{SearchNode, dijkstra};
//!
//! // Node carries its goal coordinates
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         vec![
//!             (GridPos { x: self.x + 1, y: self.y, ..*self }, 1),
//!             (GridPos { x: self.x - 1, y: self.y, ..*self }, 1),
//!             (GridPos { x: self.x, y: self.y + 1, ..*self }, 1),
//!             (GridPos { x: self.x, y: self.y - 1, ..*self }, 1),
//!         ]
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//!
//! let result = dijkstra(&start, 4).unwrap();
//! assert_eq!(result.cost, 4); // Manhattan distance
//! assert_eq!(result.path.len(), 5);
//! ```

use std::hash::Hash;
use std::ops::Add;

use rustc_hash::FxHashMap;

use crate::dary::DaryHeap;
use crate::node::Node;

/// Trait for types that can be used as costs in pathfinding algorithms.
///
/// This requires the type to be orderable, copyable, and support addition.
/// `Default` must be the zero cost.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Trait for nodes in a search graph.
///
/// The node carries all context needed to generate its successors and to
/// decide whether it is a goal.
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Trait for nodes that can provide a heuristic estimate for A* search.
///
/// The heuristic must be admissible (never overestimate the true cost)
/// for A* to find optimal paths.
pub trait AStarNode: SearchNode {
    /// Returns a heuristic estimate of the cost from this node to any goal.
    fn heuristic(&self) -> Self::Cost;
}

/// Result of a successful pathfinding search.
#[derive(Debug, Clone)]
pub struct PathResult<N: SearchNode> {
    /// The path from start to goal (inclusive)
    pub path: Vec<N>,
    /// Total cost of the path
    pub cost: N::Cost,
}

type NodeIndex = usize;

/// A queued visit of a node, at the cost known when it was queued
#[derive(Debug, Clone, Copy)]
struct Visit<C> {
    index: NodeIndex,
    g_score: C,
}

struct Entry<N: SearchNode> {
    node: N,
    g_score: N::Cost,
    came_from: Option<NodeIndex>,
    closed: bool,
}

/// Open/closed bookkeeping for one search
struct Search<N: SearchNode> {
    entries: Vec<Entry<N>>,
    index_of: FxHashMap<N, NodeIndex>,
    open: DaryHeap<Node<Visit<N::Cost>, N::Cost>>,
    settled: usize,
    stale: usize,
}

impl<N: SearchNode> Search<N> {
    fn new(degree: usize) -> Self {
        Search {
            entries: Vec::new(),
            index_of: FxHashMap::default(),
            open: DaryHeap::new(degree),
            settled: 0,
            stale: 0,
        }
    }

    /// Records a route to `node`; queues it if the route is an improvement
    fn relax<F>(&mut self, node: N, g_score: N::Cost, came_from: Option<NodeIndex>, heuristic: &F)
    where
        F: Fn(&N) -> N::Cost,
    {
        let index = match self.index_of.get(&node) {
            Some(&index) => {
                let entry = &mut self.entries[index];
                if entry.closed || g_score >= entry.g_score {
                    return;
                }
                entry.g_score = g_score;
                entry.came_from = came_from;
                index
            }
            None => {
                let index = self.entries.len();
                self.index_of.insert(node.clone(), index);
                self.entries.push(Entry {
                    node,
                    g_score,
                    came_from,
                    closed: false,
                });
                index
            }
        };

        let f_score = g_score + heuristic(&self.entries[index].node);
        self.open.push_node(Node::new(Visit { index, g_score }, f_score));
    }

    fn reconstruct_path(&self, mut current: NodeIndex) -> Vec<N> {
        let mut path = vec![self.entries[current].node.clone()];
        while let Some(prev) = self.entries[current].came_from {
            path.push(self.entries[prev].node.clone());
            current = prev;
        }
        path.reverse();
        path
    }

    fn run<F>(mut self, start: &N, heuristic: F) -> Option<PathResult<N>>
    where
        F: Fn(&N) -> N::Cost,
    {
        self.relax(start.clone(), N::Cost::default(), None, &heuristic);

        while let Some(Node { value: visit, .. }) = self.open.pop_node() {
            let entry = &mut self.entries[visit.index];
            if entry.closed || visit.g_score > entry.g_score {
                self.stale += 1;
                continue;
            }
            entry.closed = true;
            self.settled += 1;

            if entry.node.is_goal() {
                log::debug!(
                    "search reached goal: settled={}, stale={}",
                    self.settled,
                    self.stale
                );
                return Some(PathResult {
                    path: self.reconstruct_path(visit.index),
                    cost: visit.g_score,
                });
            }

            for (successor, edge_cost) in entry.node.successors() {
                self.relax(
                    successor,
                    visit.g_score + edge_cost,
                    Some(visit.index),
                    &heuristic,
                );
            }
        }

        log::debug!(
            "search exhausted without reaching a goal: settled={}, stale={}",
            self.settled,
            self.stale
        );
        None
    }
}

/// Runs Dijkstra's algorithm from `start` until `is_goal()` returns true.
///
/// `degree` is the branching factor of the open-set heap (clamped to at least 2).
///
/// # Returns
/// - `Some(PathResult)` with the cheapest path if a goal is reachable
/// - `None` if no goal is reachable
pub fn dijkstra<N: SearchNode>(start: &N, degree: usize) -> Option<PathResult<N>> {
    Search::new(degree).run(start, |_| N::Cost::default())
}

/// Runs A* search from `start` until `is_goal()` returns true.
///
/// Uses the node's `heuristic()` method to guide the search. With an
/// admissible and consistent heuristic the returned path is optimal.
pub fn astar<N: AStarNode>(start: &N, degree: usize) -> Option<PathResult<N>> {
    Search::new(degree).run(start, N::heuristic)
}

/// A minimum spanning forest of an undirected graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest<W> {
    /// Chosen edges as `(from, to, weight)`, in the order they were added
    pub edges: Vec<(usize, usize, W)>,
    /// Sum of the chosen edge weights
    pub total_weight: W,
    /// Number of connected components (trees in the forest)
    pub components: usize,
}

/// Computes a minimum spanning forest with Prim's algorithm.
///
/// Vertices are `0..vertex_count`; `edges` are undirected `(u, v, weight)`
/// triples. Each component gets its own tree, so a disconnected graph yields
/// a forest rather than failing.
///
/// # Panics
/// Panics if an edge names a vertex `>= vertex_count`.
pub fn prim<W: Cost>(vertex_count: usize, edges: &[(usize, usize, W)], degree: usize) -> SpanningForest<W> {
    let mut adjacency: Vec<Vec<(usize, W)>> = vec![Vec::new(); vertex_count];
    for &(u, v, weight) in edges {
        assert!(
            u < vertex_count && v < vertex_count,
            "edge ({}, {}) out of range for {} vertices",
            u,
            v,
            vertex_count
        );
        adjacency[u].push((v, weight));
        adjacency[v].push((u, weight));
    }

    let mut in_tree = vec![false; vertex_count];
    let mut frontier: DaryHeap<Node<(usize, usize), W>> = DaryHeap::new(degree);
    let mut forest = SpanningForest {
        edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
        total_weight: W::default(),
        components: 0,
    };

    for root in 0..vertex_count {
        if in_tree[root] {
            continue;
        }
        forest.components += 1;
        in_tree[root] = true;
        for &(to, weight) in &adjacency[root] {
            frontier.push_node(Node::new((root, to), weight));
        }

        while let Some(Node { value: (from, to), weight }) = frontier.pop_node() {
            if in_tree[to] {
                continue;
            }
            in_tree[to] = true;
            forest.edges.push((from, to, weight));
            forest.total_weight = forest.total_weight + weight;
            for &(next, next_weight) in &adjacency[to] {
                if !in_tree[next] {
                    frontier.push_node(Node::new((to, next), next_weight));
                }
            }
        }
    }

    log::debug!(
        "spanning forest: vertices={}, edges={}, components={}",
        vertex_count,
        forest.edges.len(),
        forest.components
    );
    forest
}
