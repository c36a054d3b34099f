use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by graph construction and the algorithms.
///
/// Each variant is surfaced to the immediate caller; nothing in the crate
/// retries or recovers silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex index outside `[0, n_vertices)` was passed at construction
    /// or as an algorithm argument.
    #[error("vertex index {0} is out of range")]
    InvalidVertex(usize),

    /// A weight lookup on an edge that carries no weight entry.
    #[error("no weight recorded for edge ({from}, {to})")]
    MissingEdge { from: usize, to: usize },

    /// An operation that is undefined for the given graph, such as
    /// transposing an undirected graph.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal traversal invariant broken: a vertex was exited before it
    /// was entered. Indicates a bug in the caller's use of [`crate::Dfs`],
    /// not a property of the graph.
    #[error("tried to exit vertex {0} before entering it")]
    ProtocolViolation(usize),

    /// A targeted breadth-first search drained its queue without reaching
    /// the requested vertex.
    #[error("vertex {0} is unreachable from the search source")]
    VertexUnreachable(usize),

    /// Bellman-Ford found an edge that can still be relaxed after `n - 1`
    /// passes; a negative cycle is reachable from the source.
    #[error("negative cycle detected on edge ({from}, {to})")]
    NegativeCycle { from: usize, to: usize },

    /// A flow update would leave the `[0, capacity]` range on an edge.
    #[error("flow update on edge ({from}, {to}) leaves the [0, capacity] range")]
    CapacityExceeded { from: usize, to: usize },
}
