use crate::graph::node::{Node, NodeId};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;

/// A directed graph in adjacency-list form, keyed by string identifiers.
///
/// Nodes live in an owned arena and are interned by identifier: calling
/// [`get_or_create_node`] with the same identifier always yields the same
/// [`NodeId`], which is what keeps per-node bookkeeping (neighbor maps,
/// path data) consistent. That method is the only way nodes enter the
/// registry; there is no removal operation.
///
/// [`get_or_create_node`]: DirectedGraph::get_or_create_node
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Node arena, indexed by NodeId
    nodes: Vec<Node<W>>,

    /// Interning table: identifier -> handle into the arena
    index: HashMap<String, NodeId>,
}

/// Summary statistics for a graph, as produced by [`DirectedGraph::report`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphReport {
    /// Number of nodes in the graph
    pub nodes: usize,

    /// Number of directed edges in the graph
    pub edges: usize,

    /// Average out-degree (edges / nodes); NaN for the empty graph
    pub average_degree: f64,
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph has:")?;
        writeln!(f, "{} nodes.", self.nodes)?;
        writeln!(f, "{} edges.", self.edges)?;
        write!(f, "Average degree {}", self.average_degree)
    }
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph.
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Returns the handle for the node with identifier `id`, creating and
    /// registering a new empty node if none exists yet.
    pub fn get_or_create_node(&mut self, id: &str) -> NodeId {
        if let Some(&existing) = self.index.get(id) {
            return existing;
        }
        let handle = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id));
        self.index.insert(id.to_string(), handle);
        handle
    }

    /// Returns the handle for the node with identifier `id`, if it exists.
    pub fn find_node(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// Returns the node behind a handle, or `None` for a handle this graph
    /// never issued.
    pub fn node(&self, id: NodeId) -> Option<&Node<W>> {
        self.nodes.get(id.0)
    }

    /// Adds a directed edge from `orig` to `dest` with the given weight,
    /// overwriting the weight if the edge already exists. The reverse edge is
    /// not added; both handles are assumed to have been issued by this graph
    /// (a handle from another graph silently addresses whatever node shares
    /// its index, or nothing).
    pub fn add_edge(&mut self, orig: NodeId, dest: NodeId, weight: W) {
        if let Some(node) = self.nodes.get_mut(orig.0) {
            node.add_neighbor(dest, weight);
        }
    }

    /// Returns an iterator over all `(handle, node)` pairs in the graph.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<W>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i), n))
    }

    /// Returns an iterator over the outgoing edges of `node` as
    /// `(neighbor, weight)` pairs. Unknown handles yield an empty iterator.
    pub fn outgoing(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        match self.nodes.get(node.0) {
            Some(n) => Box::new(n.neighbors().iter().map(|(&v, &w)| (v, w))),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.degree()).sum()
    }

    /// Returns true if there is an edge from `orig` to `dest`.
    pub fn has_edge(&self, orig: NodeId, dest: NodeId) -> bool {
        self.nodes
            .get(orig.0)
            .is_some_and(|n| n.neighbors().contains_key(&dest))
    }

    /// Gets the weight of the edge from `orig` to `dest`, if it exists.
    pub fn edge_weight(&self, orig: NodeId, dest: NodeId) -> Option<W> {
        self.nodes.get(orig.0)?.neighbors().get(&dest).copied()
    }

    /// Validate that the graph doesn't have negative weights.
    pub fn validate_non_negative(&self) -> bool {
        self.nodes
            .iter()
            .all(|n| n.neighbors().values().all(|&w| w >= W::zero()))
    }

    /// Computes node count, directed edge count, and average out-degree.
    /// The average is IEEE NaN when the graph is empty.
    pub fn report(&self) -> GraphReport {
        let nodes = self.node_count();
        let edges = self.edge_count();
        GraphReport {
            nodes,
            edges,
            average_degree: edges as f64 / nodes as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_is_memoized() {
        let mut g: DirectedGraph<f64> = DirectedGraph::new();
        let a1 = g.get_or_create_node("A");
        let b = g.get_or_create_node("B");
        let a2 = g.get_or_create_node("A");
        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.node(a1).unwrap().id(), "A");
    }

    #[test]
    fn add_edge_overwrites_weight() {
        let mut g: DirectedGraph<f64> = DirectedGraph::new();
        let a = g.get_or_create_node("A");
        let b = g.get_or_create_node("B");
        g.add_edge(a, b, 5.0);
        g.add_edge(a, b, 3.0);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weight(a, b), Some(3.0));
    }

    #[test]
    fn edges_are_directed() {
        let mut g: DirectedGraph<f64> = DirectedGraph::new();
        let a = g.get_or_create_node("A");
        let b = g.get_or_create_node("B");
        g.add_edge(a, b, 5.0);
        assert!(g.has_edge(a, b));
        assert!(!g.has_edge(b, a));
        assert_eq!(g.edge_weight(b, a), None);
    }

    #[test]
    fn report_counts_nodes_and_edges() {
        let mut g: DirectedGraph<f64> = DirectedGraph::new();
        let a = g.get_or_create_node("A");
        let b = g.get_or_create_node("B");
        let c = g.get_or_create_node("C");
        g.add_edge(a, b, 1.0);
        g.add_edge(a, c, 2.0);
        g.add_edge(b, c, 3.0);
        let report = g.report();
        assert_eq!(report.nodes, 3);
        assert_eq!(report.edges, 3);
        assert_eq!(report.average_degree, 1.0);
        let rendered = report.to_string();
        assert!(rendered.contains("3 nodes."));
        assert!(rendered.contains("3 edges."));
    }

    #[test]
    fn empty_report_has_nan_average() {
        let g: DirectedGraph<f64> = DirectedGraph::new();
        let report = g.report();
        assert_eq!(report.nodes, 0);
        assert_eq!(report.edges, 0);
        assert!(report.average_degree.is_nan());
    }

    #[test]
    fn outgoing_is_empty_for_foreign_handle() {
        let g: DirectedGraph<f64> = DirectedGraph::new();
        assert_eq!(g.outgoing(NodeId(7)).count(), 0);
        assert!(g.node(NodeId(7)).is_none());
    }

    #[test]
    fn validate_non_negative_flags_negative_edges() {
        let mut g: DirectedGraph<f64> = DirectedGraph::new();
        let a = g.get_or_create_node("A");
        let b = g.get_or_create_node("B");
        g.add_edge(a, b, 1.0);
        assert!(g.validate_non_negative());
        g.add_edge(a, b, -1.0);
        assert!(!g.validate_non_negative());
    }
}
