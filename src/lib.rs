//! Textbook graph algorithms over a shared adjacency-list representation.
//!
//! The [`Graph`] type holds vertex payloads, ordered adjacency lists and a
//! sparse edge-weight map. Everything else consumes it: depth-first and
//! breadth-first traversal engines ([`Dfs`], [`Bfs`]), Kosaraju strongly
//! connected components, Kruskal minimum spanning trees and Bellman-Ford
//! shortest paths. [`FlowGraph`] extends the same representation with
//! per-edge capacity/flow bookkeeping for Edmonds-Karp maximum flow.
//!
//! All algorithms are single-threaded and synchronous. Results are plain
//! per-vertex arrays or edge lists; no global state is kept between calls.

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{bellman_ford, edmonds_karp, kosaraju, kruskal};
pub use graph::{Bfs, Dfs, Edge, FlowGraph, Graph, ShortestPaths, VertexState};
