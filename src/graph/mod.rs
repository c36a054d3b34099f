//! Adjacency-list graphs and the algorithms that run over them.

pub mod bellman_ford;
pub mod bfs;
pub mod core;
pub mod dfs;
pub mod edmonds_karp;
pub mod flow;
pub mod kosaraju;
pub mod kruskal;

pub use bellman_ford::ShortestPaths;
pub use bfs::Bfs;
pub use core::{Edge, Graph};
pub use dfs::{Dfs, VertexState};
pub use flow::FlowGraph;
