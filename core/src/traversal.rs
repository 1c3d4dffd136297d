use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use tracing::{debug, trace};

use crate::graph::Graph;

/// Returned by [`degrees_of_separation`] when the two vertices are not
/// related: either one is missing from the graph or no path joins them.
pub const NO_RELATION: i64 = -1;

/// A vertex found during BFS neighborhood traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborResult<T> {
    pub vertex: T,
    pub distance: u32,
}

/// Result of a neighborhood traversal.
#[derive(Debug)]
pub struct TraversalResult<T> {
    /// Reached vertices in discovery order, start excluded.
    pub neighbors: Vec<NeighborResult<T>>,
    pub nodes_visited: usize,
}

/// Out-degree of a single vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeResult<T> {
    pub vertex: T,
    pub degree: usize,
}

/// Minimum number of arcs from `start` to `end`, or [`NO_RELATION`].
///
/// Equal endpoints give 0 without consulting the graph, so this holds even
/// for vertices that were never added. An unknown endpoint and an
/// unreachable one both give [`NO_RELATION`].
pub fn degrees_of_separation<T>(graph: &Graph<T>, start: &T, end: &T) -> i64
where
    T: Eq + Hash + Clone,
{
    separation(graph, start, end).map_or(NO_RELATION, i64::from)
}

/// Minimum number of arcs from `start` to `end` using unweighted BFS.
///
/// Returns None if either vertex is missing or `end` is unreachable.
/// Successors are expanded in arc insertion order and the search stops as
/// soon as `end` is discovered.
pub fn separation<T>(graph: &Graph<T>, start: &T, end: &T) -> Option<u32>
where
    T: Eq + Hash + Clone,
{
    if start == end {
        return Some(0);
    }
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }

    // distance doubles as the visited set
    let mut distance: HashMap<&T, u32> = HashMap::new();
    let mut queue: VecDeque<&T> = VecDeque::new();

    distance.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let next = distance[current] + 1;

        for neighbor in graph.neighbors(current) {
            if distance.contains_key(neighbor) {
                continue;
            }
            distance.insert(neighbor, next);

            if neighbor == end {
                debug!(distance = next, visited = distance.len(), "separation found");
                return Some(next);
            }

            queue.push_back(neighbor);
        }
    }

    trace!(visited = distance.len(), "separation search exhausted");
    None
}

/// Shortest path from `start` to `end`, both endpoints included.
///
/// Uses the same search as [`separation`], recording the parent of each
/// discovered vertex, so `path.len() - 1` always equals the separation.
/// `start == end` yields a single-vertex path even for an unknown vertex.
pub fn shortest_path<T>(graph: &Graph<T>, start: &T, end: &T) -> Option<Vec<T>>
where
    T: Eq + Hash + Clone,
{
    if start == end {
        return Some(vec![start.clone()]);
    }
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }

    // Sentinel: start's parent is itself
    let mut parent: HashMap<&T, &T> = HashMap::new();
    let mut queue: VecDeque<&T> = VecDeque::new();

    parent.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(current) {
            if parent.contains_key(neighbor) {
                continue;
            }
            parent.insert(neighbor, current);

            if neighbor == end {
                return Some(reconstruct_path(&parent, start, end));
            }

            queue.push_back(neighbor);
        }
    }

    None
}

fn reconstruct_path<T>(parent: &HashMap<&T, &T>, start: &T, end: &T) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut path = vec![end.clone()];
    let mut current = end;

    while current != start {
        current = parent[current];
        path.push(current.clone());
    }

    path.reverse();
    path
}

/// BFS neighborhood: every vertex reachable from `start` within `max_depth`
/// arcs, at its minimum distance.
pub fn bfs_neighborhood<T>(graph: &Graph<T>, start: &T, max_depth: u32) -> TraversalResult<T>
where
    T: Eq + Hash + Clone,
{
    if !graph.contains(start) {
        return TraversalResult {
            neighbors: Vec::new(),
            nodes_visited: 0,
        };
    }

    let mut distance: HashMap<&T, u32> = HashMap::new();
    let mut queue: VecDeque<(&T, u32)> = VecDeque::new();
    let mut neighbors = Vec::new();

    distance.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for neighbor in graph.neighbors(current) {
            if !distance.contains_key(neighbor) {
                distance.insert(neighbor, depth + 1);
                neighbors.push(NeighborResult {
                    vertex: neighbor.clone(),
                    distance: depth + 1,
                });
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    TraversalResult {
        neighbors,
        nodes_visited: distance.len(),
    }
}

/// Vertices ranked by out-degree, highest first. Ties keep insertion order.
/// `top_n == 0` returns every vertex.
pub fn degree_centrality<T>(graph: &Graph<T>, top_n: usize) -> Vec<DegreeResult<T>>
where
    T: Eq + Hash + Clone,
{
    let mut results: Vec<DegreeResult<T>> = graph
        .vertices()
        .map(|v| DegreeResult {
            vertex: v.clone(),
            degree: graph.degree(v),
        })
        .collect();

    results.sort_by(|a, b| b.degree.cmp(&a.degree));

    if top_n > 0 {
        results.truncate(top_n);
    }
    results
}
