use std::ops::Sub;

use log::debug;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::graph::bfs::Bfs;
use crate::graph::core::Graph;
use crate::graph::flow::FlowGraph;

/// Edmonds-Karp maximum flow: breadth-first augmentation until the sink
/// becomes unreachable in the residual network.
///
/// Each round derives the residual network from the current flow
/// assignment, finds a shortest augmenting path with an early-exit BFS,
/// computes the bottleneck (minimum residual capacity along the path) and
/// applies it to the original network. When the targeted BFS fails, the
/// accumulated [`FlowGraph::max_flow`] is maximal.
///
/// Termination follows from the standard O(V * E) bound on the number of
/// augmentations for integer capacities; no iteration cap is imposed.
///
/// # Examples
/// ```
/// use corgraph::{graph::edmonds_karp, FlowGraph};
///
/// let mut network: FlowGraph<usize, i32> = FlowGraph::new(
///     (0..4).collect(),
///     [(0, 1, 3), (1, 3, 2), (0, 2, 2), (2, 3, 4)],
///     0,
///     3,
/// )
/// .unwrap();
/// assert_eq!(edmonds_karp::max_flow(&mut network).unwrap(), 4);
/// ```
///
/// # Complexity
/// * Time: O(V * E^2)
/// * Space: O(V + E) per residual network
pub fn max_flow<V, W>(network: &mut FlowGraph<V, W>) -> Result<W>
where
    V: Clone,
    W: Copy + PartialOrd + Zero + Sub<Output = W>,
{
    let source = network.source();
    let sink = network.sink();
    loop {
        let residual = network.residual_network()?;
        let bfs = match Bfs::new(&residual).search_to(source, sink) {
            Ok(bfs) => bfs,
            Err(Error::VertexUnreachable(_)) => break,
            Err(err) => return Err(err),
        };
        let (path, bottleneck) = augmenting_path(&residual, &bfs, source, sink)?;
        debug!("augmenting along a path of {} edges", path.len() - 1);
        for pair in path.windows(2) {
            push(network, pair[0], pair[1], bottleneck)?;
        }
    }
    Ok(network.max_flow())
}

/// Walks the BFS parent chain back from the sink, collecting the path in
/// source-to-sink order together with its bottleneck capacity.
fn augmenting_path<V, W>(
    residual: &Graph<V, W>,
    bfs: &Bfs<'_, V, W>,
    source: usize,
    sink: usize,
) -> Result<(Vec<usize>, W)>
where
    W: Copy + PartialOrd,
{
    let mut path = vec![sink];
    let mut bottleneck: Option<W> = None;
    let mut current = sink;
    while current != source {
        let parent = bfs.parent()[current].ok_or(Error::VertexUnreachable(sink))?;
        let capacity = residual.weight(parent, current)?;
        if bottleneck.map_or(true, |b| capacity < b) {
            bottleneck = Some(capacity);
        }
        path.push(parent);
        current = parent;
    }
    path.reverse();
    let bottleneck = bottleneck.ok_or(Error::VertexUnreachable(sink))?;
    Ok((path, bottleneck))
}

/// Applies `delta` units along one path step. The residual edge
/// `(from, to)` may be backed by remaining capacity on the real edge
/// `(from, to)`, by cancellable flow on the real edge `(to, from)`, or by
/// both when the pair is antiparallel; forward capacity is consumed
/// first and the remainder withdrawn from the reverse edge.
fn push<V, W>(network: &mut FlowGraph<V, W>, from: usize, to: usize, delta: W) -> Result<()>
where
    W: Copy + PartialOrd + Zero + Sub<Output = W>,
{
    if !network.has_edge(from, to) {
        return network.cancel_flow(to, from, delta);
    }
    let room = network.capacity(from, to)? - network.flow(from, to)?;
    let forward = if delta < room { delta } else { room };
    if forward > W::zero() {
        network.add_flow(from, to, forward)?;
    }
    let rest = delta - forward;
    if rest > W::zero() {
        network.cancel_flow(to, from, rest)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn network(
        n: usize,
        edges: &[(usize, usize, i32)],
        source: usize,
        sink: usize,
    ) -> FlowGraph<usize, i32> {
        FlowGraph::new((0..n).collect(), edges.iter().copied(), source, sink).unwrap()
    }

    // Capacity bounds on every edge, conservation at interior vertices,
    // and source outflow == sink inflow == reported max flow.
    fn verify_flow(network: &FlowGraph<usize, i32>, expected: i32) {
        let n = network.n_vertices();
        let mut net_out = vec![0i32; n];
        for (from, to, capacity, flow) in network.edges() {
            assert!(flow >= 0 && flow <= capacity, "edge ({from}, {to})");
            net_out[from] += flow;
            net_out[to] -= flow;
        }
        for v in 0..n {
            if v == network.source() || v == network.sink() {
                continue;
            }
            assert_eq!(net_out[v], 0, "conservation broken at vertex {}", v);
        }
        assert_eq!(net_out[network.source()], expected);
        assert_eq!(net_out[network.sink()], -expected);
        assert_eq!(network.max_flow(), expected);
    }

    // Max-flow/min-cut certificate: the finished residual network admits
    // no source-to-sink path.
    fn verify_no_augmenting_path(network: &FlowGraph<usize, i32>) {
        let residual = network.residual_network().unwrap();
        assert!(Bfs::new(&residual)
            .search_to(network.source(), network.sink())
            .is_err());
    }

    #[test]
    fn test_max_flow_clr_fig_26_1() {
        let mut network = network(
            6,
            &[
                (0, 1, 16),
                (0, 2, 13),
                (1, 2, 10),
                (1, 3, 12),
                (2, 1, 4),
                (2, 4, 14),
                (3, 2, 9),
                (3, 5, 20),
                (4, 3, 7),
                (4, 5, 4),
            ],
            0,
            5,
        );
        assert_eq!(max_flow(&mut network).unwrap(), 23);
        verify_flow(&network, 23);
        verify_no_augmenting_path(&network);
    }

    #[test]
    fn test_max_flow_bottleneck_on_single_path() {
        let mut network = network(5, &[(0, 1, 10), (0, 2, 10), (1, 2, 4), (1, 3, 8), (2, 3, 9), (3, 4, 10)], 0, 4);
        assert_eq!(max_flow(&mut network).unwrap(), 10);
        verify_flow(&network, 10);
    }

    #[test]
    fn test_max_flow_no_path() {
        let mut network = network(4, &[(0, 1, 10), (2, 3, 10)], 0, 3);
        assert_eq!(max_flow(&mut network).unwrap(), 0);
        verify_flow(&network, 0);
    }

    #[test]
    fn test_max_flow_sink_only_reached_by_cancellation_path() {
        // First augmentation saturates 0-1-2-3; the remaining unit must
        // route 0-5-2 and then undo flow on (1, 2) to free 1-4-3.
        let mut network = network(
            6,
            &[
                (0, 1, 1),
                (1, 2, 1),
                (2, 3, 1),
                (1, 4, 1),
                (4, 3, 1),
                (0, 5, 1),
                (5, 2, 1),
            ],
            0,
            3,
        );
        assert_eq!(max_flow(&mut network).unwrap(), 2);
        verify_flow(&network, 2);
        verify_no_augmenting_path(&network);
    }

    #[test]
    fn test_max_flow_parallel_and_antiparallel_edges() {
        let mut network = network(4, &[(0, 1, 5), (1, 0, 5), (1, 2, 3), (2, 1, 2), (2, 3, 4), (1, 3, 1)], 0, 3);
        assert_eq!(max_flow(&mut network).unwrap(), 4);
        verify_flow(&network, 4);
    }

    #[test]
    fn test_max_flow_random_networks_are_consistent() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let n = 8;
            let mut edges = Vec::new();
            for _ in 0..20 {
                let from = rng.gen_range(0..n);
                let to = rng.gen_range(0..n);
                if from != to {
                    edges.push((from, to, rng.gen_range(1..10)));
                }
            }
            let mut network =
                FlowGraph::new((0..n).collect(), edges.iter().copied(), 0, n - 1).unwrap();
            let value = max_flow(&mut network).unwrap();
            assert!(value >= 0);
            verify_flow(&network, value);
            verify_no_augmenting_path(&network);
        }
    }
}
