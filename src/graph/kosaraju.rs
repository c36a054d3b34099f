use std::cmp::Reverse;

use crate::error::Result;
use crate::graph::core::Graph;
use crate::graph::dfs::Dfs;

/// Computes the strongly connected components of a directed graph with
/// Kosaraju's two-pass algorithm.
///
/// Pass one runs a full DFS in index order; vertices are then sorted by
/// descending finish time and a second DFS runs over the transposed graph
/// in that order. Each tree of the second pass is one component. Together
/// the components partition the vertex set exactly once.
///
/// # Returns
/// * `Ok(components)` - each component is a list of vertex indices in
///   discovery order; components appear in pass-two root order
/// * `Err(Error::InvalidInput)` - if the graph is undirected
///
/// # Examples
/// ```
/// use corgraph::{graph::kosaraju, Graph};
///
/// let graph: Graph<usize> =
///     Graph::directed((0..4).collect(), [(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]).unwrap();
/// let components = kosaraju::strongly_connected_components(&graph).unwrap();
/// assert_eq!(components.len(), 2);
/// ```
///
/// # Complexity
/// * Time: O(V + E)
/// * Space: O(V + E) for the transposed graph
pub fn strongly_connected_components<V, W>(graph: &Graph<V, W>) -> Result<Vec<Vec<usize>>>
where
    V: Clone,
    W: Copy,
{
    let first = Dfs::new(graph).search()?;

    let mut order: Vec<usize> = (0..graph.n_vertices()).collect();
    order.sort_by_key(|&v| Reverse(first.exited()[v]));

    let transposed = graph.transpose()?;
    let mut second = Dfs::new(&transposed);

    let mut components = Vec::new();
    for &v in &order {
        let tree = second.visit(v)?;
        if !tree.is_empty() {
            components.push(tree);
        }
    }
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::bfs::Bfs;

    fn graph(n: usize, edges: &[(usize, usize)]) -> Graph<usize> {
        Graph::directed((0..n).collect(), edges.iter().copied()).unwrap()
    }

    // Every vertex must land in exactly one component.
    fn verify_partition(n: usize, components: &[Vec<usize>]) {
        let mut seen = vec![false; n];
        let mut count = 0;
        for component in components {
            for &v in component {
                assert!(!seen[v], "vertex {} appears in two components", v);
                seen[v] = true;
                count += 1;
            }
        }
        assert_eq!(count, n, "not every vertex was placed in a component");
    }

    fn reaches(graph: &Graph<usize>, from: usize, to: usize) -> bool {
        Bfs::new(graph).search(from).level()[to].is_some()
    }

    // Mutual reachability inside components, none across them.
    fn verify_components(graph: &Graph<usize>, components: &[Vec<usize>]) {
        for component in components {
            let root = component[0];
            for &v in component {
                assert!(reaches(graph, root, v) && reaches(graph, v, root));
            }
        }
        for (i, a) in components.iter().enumerate() {
            for b in components.iter().skip(i + 1) {
                let (u, v) = (a[0], b[0]);
                assert!(
                    !(reaches(graph, u, v) && reaches(graph, v, u)),
                    "components containing {} and {} are mergeable",
                    u,
                    v
                );
            }
        }
    }

    fn normalized(components: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let mut out: Vec<Vec<usize>> = components
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.sort_unstable();
                c
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_scc_clr_fig_23_4() {
        let graph = graph(
            6,
            &[
                (0, 1),
                (0, 3),
                (1, 4),
                (2, 4),
                (2, 5),
                (3, 1),
                (4, 3),
                (5, 5),
            ],
        );
        let components = strongly_connected_components(&graph).unwrap();
        verify_partition(6, &components);
        verify_components(&graph, &components);
        assert_eq!(
            normalized(&components),
            vec![vec![0], vec![1, 3, 4], vec![2], vec![5]]
        );
    }

    #[test]
    fn test_scc_single_cycle() {
        let graph = graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(components.len(), 1);
        verify_partition(4, &components);
    }

    #[test]
    fn test_scc_dag_is_all_singletons() {
        let graph = graph(4, &[(0, 1), (1, 2), (1, 3)]);
        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(components.len(), 4);
        verify_partition(4, &components);
    }

    #[test]
    fn test_scc_no_edges() {
        let graph = graph(3, &[]);
        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(components.len(), 3);
        verify_partition(3, &components);
    }

    #[test]
    fn test_scc_rejects_undirected() {
        let graph: Graph<usize> = Graph::undirected((0..2).collect(), [(0, 1)]).unwrap();
        assert!(strongly_connected_components(&graph).is_err());
    }

    #[test]
    fn test_scc_two_cycles_with_bridge() {
        let graph = graph(
            8,
            &[
                (0, 1),
                (1, 2),
                (2, 0),
                (2, 3),
                (3, 4),
                (4, 5),
                (5, 3),
                (6, 7),
            ],
        );
        let components = strongly_connected_components(&graph).unwrap();
        verify_partition(8, &components);
        verify_components(&graph, &components);
        assert_eq!(
            normalized(&components),
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6], vec![7]]
        );
    }
}
