//! Tests for the pathfinding algorithms built on the d-ary heap
//!
//! Tests cover:
//! - Basic functionality across heap degrees
//! - Edge cases (start is goal, unreachable goals, cycles)
//! - Correctness (optimal paths when cheaper routes are discovered late)
//! - Prim's spanning forest against a brute-force check

use dary_heap::pathfinding::{astar, dijkstra, prim, AStarNode, SearchNode};

const DEGREES: [usize; 4] = [2, 3, 4, 8];

// ============================================================================
// Test Node Types
// ============================================================================

/// Grid position for 2D pathfinding with walls - carries goal coordinates
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct Grid2D {
    x: i32,
    y: i32,
    goal_x: i32,
    goal_y: i32,
}

const WIDTH: i32 = 10;
const HEIGHT: i32 = 10;

fn is_wall(x: i32, y: i32) -> bool {
    // A vertical wall at x = 5 with a gap at y = 9
    x == 5 && y < 9
}

impl Grid2D {
    fn new(x: i32, y: i32, goal_x: i32, goal_y: i32) -> Self {
        Grid2D { x, y, goal_x, goal_y }
    }
}

impl SearchNode for Grid2D {
    type Cost = u32;

    fn successors(&self) -> Vec<(Self, u32)> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .filter(|&(x, y)| x >= 0 && y >= 0 && x < WIDTH && y < HEIGHT && !is_wall(x, y))
            .map(|(x, y)| (Grid2D::new(x, y, self.goal_x, self.goal_y), 1))
            .collect()
    }

    fn is_goal(&self) -> bool {
        self.x == self.goal_x && self.y == self.goal_y
    }
}

impl AStarNode for Grid2D {
    fn heuristic(&self) -> u32 {
        ((self.x - self.goal_x).abs() + (self.y - self.goal_y).abs()) as u32
    }
}

/// Explicit weighted digraph: vertex id plus a shared goal
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct Vertex {
    id: usize,
    goal: usize,
}

// 0 -> 1 (10), 0 -> 2 (1), 2 -> 3 (1), 3 -> 1 (1), 1 -> 4 (1), 4 -> 0 (1)
const EDGES: [(usize, usize, u64); 6] = [(0, 1, 10), (0, 2, 1), (2, 3, 1), (3, 1, 1), (1, 4, 1), (4, 0, 1)];

impl SearchNode for Vertex {
    type Cost = u64;

    fn successors(&self) -> Vec<(Self, u64)> {
        EDGES
            .iter()
            .filter(|(from, _, _)| *from == self.id)
            .map(|&(_, to, cost)| (Vertex { id: to, goal: self.goal }, cost))
            .collect()
    }

    fn is_goal(&self) -> bool {
        self.id == self.goal
    }
}

// ============================================================================
// Dijkstra / A*
// ============================================================================

#[test]
fn test_grid_detour_all_degrees() {
    for degree in DEGREES {
        let start = Grid2D::new(0, 0, 9, 0);
        let result = dijkstra(&start, degree).unwrap();
        // Down to the gap at y = 9, across, and back up
        assert_eq!(result.cost, 9 + 9 + 9);
        assert_eq!(result.path.len() as u32, result.cost + 1);
        assert_eq!(result.path.first(), Some(&start));
        assert!(result.path.last().unwrap().is_goal());
        assert!(result.path.iter().all(|p| !is_wall(p.x, p.y)));
    }
}

#[test]
fn test_astar_matches_dijkstra() {
    for degree in DEGREES {
        for (gx, gy) in [(9, 0), (4, 4), (9, 9), (0, 0), (6, 3)] {
            let start = Grid2D::new(0, 0, gx, gy);
            let d = dijkstra(&start, degree).unwrap();
            let a = astar(&start, degree).unwrap();
            assert_eq!(d.cost, a.cost, "goal ({}, {})", gx, gy);
        }
    }
}

#[test]
fn test_late_cheaper_route_wins() {
    // The direct edge 0 -> 1 costs 10; the route through 2 and 3 costs 3
    for degree in DEGREES {
        let result = dijkstra(&Vertex { id: 0, goal: 1 }, degree).unwrap();
        assert_eq!(result.cost, 3);
        assert_eq!(
            result.path.iter().map(|v| v.id).collect::<Vec<_>>(),
            vec![0, 2, 3, 1]
        );
    }
}

#[test]
fn test_cycle_unreachable_goal() {
    // Vertex 5 has no incoming edges; the cycle must not loop forever
    assert!(dijkstra(&Vertex { id: 0, goal: 5 }, 3).is_none());
}

#[test]
fn test_start_is_goal() {
    let start = Grid2D::new(3, 3, 3, 3);
    let result = astar(&start, 2).unwrap();
    assert_eq!(result.cost, 0);
    assert_eq!(result.path, vec![start]);
}

#[test]
fn test_low_degree_is_clamped() {
    let start = Grid2D::new(0, 0, 2, 2);
    assert_eq!(dijkstra(&start, 0).unwrap().cost, 4);
    assert_eq!(dijkstra(&start, 1).unwrap().cost, 4);
}

// ============================================================================
// Prim
// ============================================================================

/// Smallest spanning tree weight by trying every edge subset (tiny graphs only)
fn brute_force_mst(vertex_count: usize, edges: &[(usize, usize, u32)]) -> u32 {
    fn find(parent: &mut [usize], x: usize) -> usize {
        if parent[x] != x {
            let next = parent[x];
            let root = find(parent, next);
            parent[x] = root;
        }
        parent[x]
    }

    let mut best = u32::MAX;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != vertex_count - 1 {
            continue;
        }
        let mut parent: Vec<usize> = (0..vertex_count).collect();
        let mut total = 0;
        let mut acyclic = true;
        for (i, &(u, v, w)) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
            if ru == rv {
                acyclic = false;
                break;
            }
            parent[ru] = rv;
            total += w;
        }
        if acyclic {
            best = best.min(total);
        }
    }
    best
}

#[test]
fn test_prim_matches_brute_force() {
    let edges = [
        (0, 1, 4),
        (0, 2, 3),
        (1, 2, 1),
        (1, 3, 2),
        (2, 3, 4),
        (3, 4, 2),
        (4, 5, 6),
        (3, 5, 7),
        (2, 5, 9),
    ];
    let expected = brute_force_mst(6, &edges);
    for degree in DEGREES {
        let forest = prim(6, &edges, degree);
        assert_eq!(forest.components, 1);
        assert_eq!(forest.edges.len(), 5);
        assert_eq!(forest.total_weight, expected);
        let sum: u32 = forest.edges.iter().map(|&(_, _, w)| w).sum();
        assert_eq!(sum, forest.total_weight);
    }
}

#[test]
fn test_prim_isolated_vertices() {
    let forest = prim(5, &[(1, 2, 3u32)], 4);
    assert_eq!(forest.components, 4);
    assert_eq!(forest.edges, vec![(1, 2, 3)]);
    assert_eq!(forest.total_weight, 3);
}

#[test]
fn test_prim_parallel_edges_and_self_loops() {
    let forest = prim(2, &[(0, 1, 9u32), (0, 1, 2), (1, 1, 0)], 2);
    assert_eq!(forest.edges, vec![(0, 1, 2)]);
    assert_eq!(forest.total_weight, 2);
}
