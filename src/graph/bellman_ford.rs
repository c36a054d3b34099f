use log::debug;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::graph::core::Graph;

/// Single-source shortest-path result: per-vertex distance and the
/// predecessor on a shortest path. Both are `None` for vertices the
/// source cannot reach; the source itself has distance zero and no
/// parent.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    pub distance: Vec<Option<W>>,
    pub parent: Vec<Option<usize>>,
}

/// Bellman-Ford single-source shortest paths with negative-cycle
/// detection.
///
/// Runs `n - 1` relaxation passes over every edge in vertex-then-adjacency
/// order, then one more scan: any edge still relaxable at that point
/// proves a negative cycle reachable from the source.
///
/// Every adjacency edge must carry a weight; an unweighted edge fails
/// with [`Error::MissingEdge`].
///
/// # Returns
/// * `Ok(paths)` - converged distances and parents
/// * `Err(Error::InvalidVertex)` - `source` out of range
/// * `Err(Error::NegativeCycle)` - names one still-relaxable edge
///
/// # Examples
/// ```
/// use corgraph::{graph::bellman_ford, Graph};
///
/// let graph: Graph<usize> =
///     Graph::directed((0..3).collect(), [(0, 1, 4.0), (1, 2, -1.0), (0, 2, 5.0)]).unwrap();
/// let paths = bellman_ford::shortest_paths(&graph, 0).unwrap();
/// assert_eq!(paths.distance[2], Some(3.0));
/// assert_eq!(paths.parent[2], Some(1));
/// ```
///
/// # Complexity
/// * Time: O(V * E)
/// * Space: O(V)
pub fn shortest_paths<V, W>(graph: &Graph<V, W>, source: usize) -> Result<ShortestPaths<W>>
where
    W: Copy + PartialOrd + Zero,
{
    let n = graph.n_vertices();
    if source >= n {
        return Err(Error::InvalidVertex(source));
    }
    if !graph.has_negative_weights() {
        // TODO: route non-negative graphs through Dijkstra once a binary
        // heap queue lands; Bellman-Ford stays correct in the meantime.
        debug!("no negative weights present, Bellman-Ford used anyway");
    }

    let mut paths = ShortestPaths {
        distance: vec![None; n],
        parent: vec![None; n],
    };
    paths.distance[source] = Some(W::zero());

    for _ in 1..n {
        for from in 0..n {
            for &to in graph.neighbors(from) {
                let weight = graph.weight(from, to)?;
                relax(from, to, weight, &mut paths);
            }
        }
    }

    // One extra scan: convergence means no edge can improve any further.
    for from in 0..n {
        let Some(from_dist) = paths.distance[from] else {
            continue;
        };
        for &to in graph.neighbors(from) {
            let weight = graph.weight(from, to)?;
            let candidate = from_dist + weight;
            if paths.distance[to].map_or(true, |d| candidate < d) {
                return Err(Error::NegativeCycle { from, to });
            }
        }
    }

    Ok(paths)
}

fn relax<W>(from: usize, to: usize, weight: W, paths: &mut ShortestPaths<W>)
where
    W: Copy + PartialOrd + Zero,
{
    let Some(from_dist) = paths.distance[from] else {
        return;
    };
    let candidate = from_dist + weight;
    if paths.distance[to].map_or(true, |d| candidate < d) {
        paths.distance[to] = Some(candidate);
        paths.parent[to] = Some(from);
    }
}
