use crate::error::{Error, Result};
use crate::graph::core::Graph;

/// Per-vertex traversal state shared by [`Dfs`] and [`crate::Bfs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexState {
    Unseen,
    Visited,
    Finished,
}

/// Depth-first search over a [`Graph`], recording entry and exit
/// timestamps per vertex.
///
/// Timestamps come from a single step counter shared across the whole run,
/// starting at 1: every visited vertex satisfies `entered < exited`, and
/// over a full search the stamps form a permutation of `1..=2n`.
///
/// The traversal uses an explicit stack with a neighbor cursor per frame,
/// so large graphs cannot overflow the call stack; the entry/exit order is
/// identical to the naive recursive formulation.
///
/// # Examples
/// ```
/// use corgraph::{Dfs, Graph};
///
/// let graph: Graph<usize> = Graph::directed((0..3).collect(), [(0, 1), (1, 2)]).unwrap();
/// let dfs = Dfs::new(&graph).search().unwrap();
/// assert_eq!(dfs.entered(), &[Some(1), Some(2), Some(3)]);
/// assert_eq!(dfs.exited(), &[Some(6), Some(5), Some(4)]);
/// ```
#[derive(Debug)]
pub struct Dfs<'a, V, W> {
    graph: &'a Graph<V, W>,
    state: Vec<VertexState>,
    entered: Vec<Option<usize>>,
    exited: Vec<Option<usize>>,
    step: usize,
}

impl<'a, V, W> Dfs<'a, V, W> {
    pub fn new(graph: &'a Graph<V, W>) -> Self {
        let n = graph.n_vertices();
        Self {
            graph,
            state: vec![VertexState::Unseen; n],
            entered: vec![None; n],
            exited: vec![None; n],
            step: 1,
        }
    }

    /// Visits every vertex in index order, producing a forest of DFS
    /// trees. Returns `self` so results can be read off directly.
    pub fn search(mut self) -> Result<Self> {
        for v in 0..self.graph.n_vertices() {
            self.visit(v)?;
        }
        Ok(self)
    }

    /// Like [`Dfs::search`], but visits roots in the caller-supplied
    /// order. Vertices already finished are skipped.
    pub fn search_in_order(mut self, order: &[usize]) -> Result<Self> {
        for &v in order {
            self.visit(v)?;
        }
        Ok(self)
    }

    /// Explores the tree rooted at `start` and returns the vertices it
    /// discovered, in entry order. Returns an empty list if `start` was
    /// already seen.
    ///
    /// # Panics
    /// Panics if `start >= n_vertices`.
    pub fn visit(&mut self, start: usize) -> Result<Vec<usize>> {
        let mut tree = Vec::new();
        if self.state[start] != VertexState::Unseen {
            return Ok(tree);
        }
        self.enter(start);
        tree.push(start);
        // Frame: (vertex, index of the next neighbor to consider).
        let mut stack = vec![(start, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (v, cursor) = *frame;
            let neighbors = self.graph.neighbors(v);
            if cursor < neighbors.len() {
                frame.1 += 1;
                let next = neighbors[cursor];
                if self.state[next] == VertexState::Unseen {
                    self.enter(next);
                    tree.push(next);
                    stack.push((next, 0));
                }
            } else {
                stack.pop();
                self.exit(v)?;
            }
        }
        Ok(tree)
    }

    fn enter(&mut self, v: usize) {
        self.state[v] = VertexState::Visited;
        self.entered[v] = Some(self.step);
        self.step += 1;
    }

    fn exit(&mut self, v: usize) -> Result<()> {
        match self.state[v] {
            VertexState::Unseen => Err(Error::ProtocolViolation(v)),
            VertexState::Visited => {
                self.state[v] = VertexState::Finished;
                self.exited[v] = Some(self.step);
                self.step += 1;
                Ok(())
            }
            VertexState::Finished => Ok(()),
        }
    }

    pub fn state(&self) -> &[VertexState] {
        &self.state
    }

    /// 1-based entry step per vertex; `None` if never visited.
    pub fn entered(&self) -> &[Option<usize>] {
        &self.entered
    }

    /// 1-based exit step per vertex; `None` if never finished.
    pub fn exited(&self) -> &[Option<usize>] {
        &self.exited
    }
}
