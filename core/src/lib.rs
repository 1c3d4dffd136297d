//! degrees-core: In-memory friendship graph and separation queries.
//!
//! A pure Rust library that maintains a directed adjacency list over any
//! hashable vertex type and answers breadth-first "degrees of separation"
//! queries against it. Undirected friendships are stored as a pair of arcs.
//!
//! Used by the `degrees` command-line driver and the `degrees-bench`
//! benchmark binary, but has no I/O of its own.

mod graph;
mod traversal;

pub use graph::Graph;
pub use traversal::{
    bfs_neighborhood, degree_centrality, degrees_of_separation, separation, shortest_path,
    DegreeResult, NeighborResult, TraversalResult, NO_RELATION,
};
