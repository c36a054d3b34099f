use std::cmp::Ordering;

use log::trace;

use crate::graph::core::Graph;

/// Disjoint-set structure used to detect cycles while growing the tree.
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Initializes `n` singleton sets, one per vertex.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Representative of the set containing `x`, with path compression.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    /// Unites the sets containing `x` and `y`. Returns `true` if they
    /// were disjoint. The lower-numbered root wins.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        if rx < ry {
            self.parent[ry] = rx;
        } else {
            self.parent[rx] = ry;
        }
        true
    }
}

/// Kruskal's algorithm for a minimum spanning tree of a weighted graph.
///
/// Only weighted edges are candidates; an edge with no weight entry is
/// never consulted. Candidates are sorted by `(weight, from, to)`, which
/// makes tie-breaking deterministic, and scanned once, joining components
/// through a union-find until `n - 1` edges are selected or the
/// candidates run out. On a disconnected graph the result is a minimum
/// spanning forest.
///
/// Each selected edge is reported once as a `(from, to, weight)` triple,
/// regardless of the graph's directedness flag.
///
/// # Examples
/// ```
/// use corgraph::{graph::kruskal, Graph};
///
/// let graph: Graph<usize> =
///     Graph::undirected((0..3).collect(), [(0, 1, 4.0), (0, 2, 2.0), (1, 2, 1.0)]).unwrap();
/// let tree = kruskal::minimum_spanning_tree(&graph);
/// assert_eq!(tree, vec![(1, 2, 1.0), (0, 2, 2.0)]);
/// ```
///
/// # Complexity
/// * Time: O(E log E) for the sort, effectively O(E α(V)) after
/// * Space: O(V + E)
pub fn minimum_spanning_tree<V, W>(graph: &Graph<V, W>) -> Vec<(usize, usize, W)>
where
    W: Copy + PartialOrd,
{
    let mut edges = graph.weighted_edges();
    edges.sort_by(|a, b| {
        a.2.partial_cmp(&b.2)
            .unwrap_or(Ordering::Equal)
            .then_with(|| (a.0, a.1).cmp(&(b.0, b.1)))
    });

    let n = graph.n_vertices();
    let mut sets = UnionFind::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));

    for (from, to, weight) in edges {
        if sets.union(from, to) {
            trace!("kruskal: taking edge ({from}, {to})");
            tree.push((from, to, weight));
            if tree.len() == n.saturating_sub(1) {
                break;
            }
        } else {
            trace!("kruskal: skipping edge ({from}, {to}), same component");
        }
    }
    tree
}
