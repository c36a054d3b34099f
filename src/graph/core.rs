use std::collections::HashMap;

use num_traits::Zero;

use crate::error::{Error, Result};

/// A single input edge: endpoints plus an optional weight.
///
/// Conversions exist from `(usize, usize)` pairs and `(usize, usize, W)`
/// triples so edge lists can be written as plain tuples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W = f64> {
    pub from: usize,
    pub to: usize,
    pub weight: Option<W>,
}

impl<W> Edge<W> {
    /// An unweighted edge `from -> to`.
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            weight: None,
        }
    }

    /// A weighted edge `from -> to`.
    pub fn weighted(from: usize, to: usize, weight: W) -> Self {
        Self {
            from,
            to,
            weight: Some(weight),
        }
    }
}

impl<W> From<(usize, usize)> for Edge<W> {
    fn from((from, to): (usize, usize)) -> Self {
        Edge::new(from, to)
    }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((from, to, weight): (usize, usize, W)) -> Self {
        Edge::weighted(from, to, weight)
    }
}

/// Adjacency-list representation of a directed or undirected graph with
/// optional edge weights.
///
/// Vertex payloads of type `V` are indexed densely by `0..n_vertices`.
/// Neighbor lists keep insertion order and preserve duplicate edges.
/// Weights live in a sparse map keyed by `(from, to)`; an edge with no
/// entry is "unweighted" and is rejected by weight-requiring algorithms.
///
/// The shape is fixed at construction: there is no way to add or remove
/// edges afterwards. Every edge endpoint is validated eagerly, so all
/// indices stored in the adjacency lists are in range.
///
/// # Examples
/// ```
/// use corgraph::Graph;
///
/// let graph: Graph<&str> = Graph::directed(vec!["a", "b", "c"], [(0, 1), (1, 2)]).unwrap();
/// assert_eq!(graph.neighbors(0), &[1]);
/// assert_eq!(graph.neighbors(2), &[]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V, W = f64> {
    vertices: Vec<V>,
    adjacency: Vec<Vec<usize>>,
    weights: HashMap<(usize, usize), W>,
    undirected: bool,
    has_negative_weights: bool,
}

impl<V, W> Graph<V, W> {
    /// Builds a directed graph from vertex payloads and an edge list.
    ///
    /// # Returns
    /// * `Ok(graph)` on success
    /// * `Err(Error::InvalidVertex)` if any edge endpoint is out of range
    pub fn directed<E, I>(vertices: Vec<V>, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
        W: Copy + PartialOrd + Zero,
    {
        Self::build(vertices, edges, false)
    }

    /// Builds an undirected graph: every edge `(u, v)` is mirrored as
    /// `(v, u)`, along with its weight entry if it has one.
    pub fn undirected<E, I>(vertices: Vec<V>, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
        W: Copy + PartialOrd + Zero,
    {
        Self::build(vertices, edges, true)
    }

    fn build<E, I>(vertices: Vec<V>, edges: I, undirected: bool) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
        W: Copy + PartialOrd + Zero,
    {
        let n = vertices.len();
        let mut graph = Self {
            vertices,
            adjacency: vec![Vec::new(); n],
            weights: HashMap::new(),
            undirected,
            has_negative_weights: false,
        };
        for edge in edges {
            let Edge { from, to, weight } = edge.into();
            graph.insert_edge(from, to, weight)?;
            if undirected {
                graph.insert_edge(to, from, weight)?;
            }
        }
        Ok(graph)
    }

    fn insert_edge(&mut self, from: usize, to: usize, weight: Option<W>) -> Result<()>
    where
        W: Copy + PartialOrd + Zero,
    {
        let n = self.vertices.len();
        if from >= n {
            return Err(Error::InvalidVertex(from));
        }
        if to >= n {
            return Err(Error::InvalidVertex(to));
        }
        self.adjacency[from].push(to);
        if let Some(w) = weight {
            if w < W::zero() {
                self.has_negative_weights = true;
            }
            self.weights.insert((from, to), w);
        }
        Ok(())
    }

    /// Number of vertices.
    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Payload of the vertex at `idx`, or `None` if out of range.
    pub fn vertex(&self, idx: usize) -> Option<&V> {
        self.vertices.get(idx)
    }

    /// All vertex payloads in index order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Neighbor indices of `v` in insertion order, duplicates included.
    ///
    /// # Panics
    /// Panics if `v >= n_vertices()`; construction guarantees every stored
    /// index is valid, so only caller-supplied indices can be out of range.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Whether the graph was built with mirrored edges.
    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    /// Whether any recorded weight is negative.
    pub fn has_negative_weights(&self) -> bool {
        self.has_negative_weights
    }

    /// The recorded weight of edge `(from, to)`.
    ///
    /// # Returns
    /// * `Err(Error::MissingEdge)` if the edge has no weight entry
    pub fn weight(&self, from: usize, to: usize) -> Result<W>
    where
        W: Copy,
    {
        self.weights
            .get(&(from, to))
            .copied()
            .ok_or(Error::MissingEdge { from, to })
    }

    /// Every weighted edge as a `(from, to, weight)` triple.
    ///
    /// On undirected graphs each edge is reported once, oriented with
    /// `from <= to`. Order is unspecified; callers that need determinism
    /// must sort.
    pub fn weighted_edges(&self) -> Vec<(usize, usize, W)>
    where
        W: Copy,
    {
        let mut edges = Vec::with_capacity(self.weights.len());
        for (&(from, to), &weight) in &self.weights {
            if self.undirected && from > to {
                continue;
            }
            edges.push((from, to, weight));
        }
        edges
    }

    /// A new graph with every edge reversed. Weights follow their edges.
    ///
    /// # Returns
    /// * `Err(Error::InvalidInput)` on undirected graphs, where the
    ///   transpose is meaningless
    pub fn transpose(&self) -> Result<Self>
    where
        V: Clone,
        W: Copy,
    {
        if self.undirected {
            return Err(Error::InvalidInput(
                "transpose of an undirected graph is undefined".to_string(),
            ));
        }
        let n = self.vertices.len();
        let mut adjacency = vec![Vec::new(); n];
        for (from, neighbors) in self.adjacency.iter().enumerate() {
            for &to in neighbors {
                adjacency[to].push(from);
            }
        }
        let mut weights = HashMap::with_capacity(self.weights.len());
        for (&(from, to), &weight) in &self.weights {
            weights.insert((to, from), weight);
        }
        Ok(Self {
            vertices: self.vertices.clone(),
            adjacency,
            weights,
            undirected: false,
            has_negative_weights: self.has_negative_weights,
        })
    }
}
