use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::graph::core::Graph;
use crate::graph::dfs::VertexState;

/// Breadth-first search over a [`Graph`], recording hop distance and the
/// predecessor on a shortest-hop path per vertex.
///
/// `level` and `parent` are `None` for vertices the search never reached;
/// the source keeps `parent = None` as well.
///
/// # Examples
/// ```
/// use corgraph::{Bfs, Graph};
///
/// let graph: Graph<usize> = Graph::directed((0..4).collect(), [(0, 1), (0, 2), (1, 3)]).unwrap();
/// let bfs = Bfs::new(&graph).search(0);
/// assert_eq!(bfs.level(), &[Some(0), Some(1), Some(1), Some(2)]);
/// assert_eq!(bfs.parent()[3], Some(1));
/// ```
#[derive(Debug)]
pub struct Bfs<'a, V, W> {
    graph: &'a Graph<V, W>,
    state: Vec<VertexState>,
    level: Vec<Option<usize>>,
    parent: Vec<Option<usize>>,
}

impl<'a, V, W> Bfs<'a, V, W> {
    pub fn new(graph: &'a Graph<V, W>) -> Self {
        let n = graph.n_vertices();
        Self {
            graph,
            state: vec![VertexState::Unseen; n],
            level: vec![None; n],
            parent: vec![None; n],
        }
    }

    /// Full level-order traversal from `source`. Never fails; vertices
    /// unreachable from the source simply keep `level = None`.
    ///
    /// # Panics
    /// Panics if `source >= n_vertices`.
    pub fn search(mut self, source: usize) -> Self {
        self.run(source, None);
        self
    }

    /// Traversal from `source` that stops as soon as `target` is
    /// discovered, leaving the rest of the queue undrained. Used by the
    /// max-flow augmenting-path search.
    ///
    /// # Returns
    /// * `Err(Error::VertexUnreachable)` if the queue empties before
    ///   `target` is found
    ///
    /// # Panics
    /// Panics if `source` or `target` is out of range.
    pub fn search_to(mut self, source: usize, target: usize) -> Result<Self> {
        if self.run(source, Some(target)) {
            Ok(self)
        } else {
            Err(Error::VertexUnreachable(target))
        }
    }

    /// Returns whether `target` was reached (always `false` when no
    /// target was requested).
    fn run(&mut self, source: usize, target: Option<usize>) -> bool {
        self.state[source] = VertexState::Visited;
        self.level[source] = Some(0);
        if target == Some(source) {
            return true;
        }
        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            let depth = self.level[v];
            for &next in self.graph.neighbors(v) {
                if self.state[next] == VertexState::Unseen {
                    self.state[next] = VertexState::Visited;
                    self.parent[next] = Some(v);
                    self.level[next] = depth.map(|d| d + 1);
                    if target == Some(next) {
                        return true;
                    }
                    queue.push_back(next);
                }
            }
            self.state[v] = VertexState::Finished;
        }
        false
    }

    pub fn state(&self) -> &[VertexState] {
        &self.state
    }

    /// Hop distance from the source per vertex; `None` if unreached.
    pub fn level(&self) -> &[Option<usize>] {
        &self.level
    }

    /// Predecessor on a shortest-hop path; `None` for the source and for
    /// unreached vertices.
    pub fn parent(&self) -> &[Option<usize>] {
        &self.parent
    }
}
