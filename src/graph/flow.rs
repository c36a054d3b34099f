use std::collections::HashMap;
use std::ops::Sub;

use num_traits::Zero;

use crate::error::{Error, Result};
use crate::graph::core::Graph;

#[derive(Debug, Clone, Copy, PartialEq)]
struct FlowEdge<W> {
    capacity: W,
    flow: W,
}

/// A directed capacity/flow network: the flow-carrying counterpart of
/// [`Graph`].
///
/// Each edge tracks a `capacity`/`flow` pair with the invariant
/// `0 <= flow <= capacity`. Flow starts at zero everywhere; the only
/// mutation the type allows is the incremental bookkeeping of
/// [`FlowGraph::add_flow`] and [`FlowGraph::cancel_flow`], which the
/// max-flow loop drives. A running total of flow delivered to the sink
/// is kept in [`FlowGraph::max_flow`].
///
/// # Examples
/// ```
/// use corgraph::FlowGraph;
///
/// let mut network: FlowGraph<usize, i32> =
///     FlowGraph::new((0..3).collect(), [(0, 1, 4), (1, 2, 3)], 0, 2).unwrap();
/// network.add_flow(0, 1, 3).unwrap();
/// network.add_flow(1, 2, 3).unwrap();
/// assert_eq!(network.max_flow(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct FlowGraph<V, W = f64> {
    vertices: Vec<V>,
    adjacency: Vec<Vec<usize>>,
    edges: HashMap<(usize, usize), FlowEdge<W>>,
    source: usize,
    sink: usize,
    max_flow: W,
}

impl<V, W> FlowGraph<V, W>
where
    W: Copy + PartialOrd + Zero + Sub<Output = W>,
{
    /// Builds a flow network from `(from, to, capacity)` triples.
    ///
    /// # Returns
    /// * `Err(Error::InvalidVertex)` - out-of-range endpoint, source or sink
    /// * `Err(Error::InvalidInput)` - negative capacity, or source == sink
    pub fn new<I>(vertices: Vec<V>, edges: I, source: usize, sink: usize) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let n = vertices.len();
        if source >= n {
            return Err(Error::InvalidVertex(source));
        }
        if sink >= n {
            return Err(Error::InvalidVertex(sink));
        }
        if source == sink {
            return Err(Error::InvalidInput(
                "source and sink must be distinct".to_string(),
            ));
        }
        let mut network = Self {
            vertices,
            adjacency: vec![Vec::new(); n],
            edges: HashMap::new(),
            source,
            sink,
            max_flow: W::zero(),
        };
        for (from, to, capacity) in edges {
            if from >= n {
                return Err(Error::InvalidVertex(from));
            }
            if to >= n {
                return Err(Error::InvalidVertex(to));
            }
            if capacity < W::zero() {
                return Err(Error::InvalidInput(format!(
                    "negative capacity on edge ({from}, {to})"
                )));
            }
            let previous = network.edges.insert(
                (from, to),
                FlowEdge {
                    capacity,
                    flow: W::zero(),
                },
            );
            // A repeated (from, to) triple replaces the earlier capacity;
            // the adjacency list keeps a single entry either way.
            if previous.is_none() {
                network.adjacency[from].push(to);
            }
        }
        Ok(network)
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Total flow delivered to the sink so far.
    pub fn max_flow(&self) -> W {
        self.max_flow
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges.contains_key(&(from, to))
    }

    pub fn capacity(&self, from: usize, to: usize) -> Result<W> {
        self.edges
            .get(&(from, to))
            .map(|e| e.capacity)
            .ok_or(Error::MissingEdge { from, to })
    }

    pub fn flow(&self, from: usize, to: usize) -> Result<W> {
        self.edges
            .get(&(from, to))
            .map(|e| e.flow)
            .ok_or(Error::MissingEdge { from, to })
    }

    /// Every edge as `(from, to, capacity, flow)`, in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W, W)> + '_ {
        self.edges
            .iter()
            .map(|(&(from, to), e)| (from, to, e.capacity, e.flow))
    }

    /// Increases the flow on edge `(from, to)` by `delta`, counting it
    /// toward [`FlowGraph::max_flow`] when `to` is the sink.
    ///
    /// # Returns
    /// * `Err(Error::MissingEdge)` - no such edge
    /// * `Err(Error::CapacityExceeded)` - the increase would pass capacity
    pub fn add_flow(&mut self, from: usize, to: usize, delta: W) -> Result<()> {
        let sink = self.sink;
        let edge = self
            .edges
            .get_mut(&(from, to))
            .ok_or(Error::MissingEdge { from, to })?;
        let next = edge.flow + delta;
        if edge.capacity < next {
            return Err(Error::CapacityExceeded { from, to });
        }
        edge.flow = next;
        if to == sink {
            self.max_flow = self.max_flow + delta;
        }
        Ok(())
    }

    /// Decreases the flow on edge `(from, to)` by `delta`. This is the
    /// cancellation half of augmentation: pushing along a residual
    /// back-edge `(to, from)` means withdrawing flow here. Cancelling an
    /// outflow of the sink raises net delivery, so it counts toward
    /// [`FlowGraph::max_flow`] when `from` is the sink.
    ///
    /// # Returns
    /// * `Err(Error::MissingEdge)` - no such edge
    /// * `Err(Error::CapacityExceeded)` - the decrease would drop below zero
    pub fn cancel_flow(&mut self, from: usize, to: usize, delta: W) -> Result<()> {
        let sink = self.sink;
        let edge = self
            .edges
            .get_mut(&(from, to))
            .ok_or(Error::MissingEdge { from, to })?;
        if edge.flow < delta {
            return Err(Error::CapacityExceeded { from, to });
        }
        edge.flow = edge.flow - delta;
        if from == sink {
            self.max_flow = self.max_flow + delta;
        }
        Ok(())
    }

    /// Derives the residual network as a plain weighted [`Graph`].
    ///
    /// Each edge contributes its remaining capacity forward
    /// (`capacity - flow`, when positive) and its current flow backward
    /// (when positive). Where a forward residual and a back-edge land on
    /// the same vertex pair, their capacities are summed into a single
    /// edge, since the weight map holds one entry per pair.
    pub fn residual_network(&self) -> Result<Graph<V, W>>
    where
        V: Clone,
    {
        let mut residuals: HashMap<(usize, usize), W> = HashMap::with_capacity(self.edges.len());
        for (&(from, to), edge) in &self.edges {
            let remaining = edge.capacity - edge.flow;
            if remaining > W::zero() {
                let slot = residuals.entry((from, to)).or_insert_with(W::zero);
                *slot = *slot + remaining;
            }
            if edge.flow > W::zero() {
                let slot = residuals.entry((to, from)).or_insert_with(W::zero);
                *slot = *slot + edge.flow;
            }
        }
        let edges: Vec<(usize, usize, W)> = residuals
            .into_iter()
            .map(|((from, to), weight)| (from, to, weight))
            .collect();
        Graph::directed(self.vertices.clone(), edges)
    }
}
