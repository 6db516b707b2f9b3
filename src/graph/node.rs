use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// Lightweight handle to a node owned by a [`DirectedGraph`].
///
/// Handles are arena indices issued by `get_or_create_node` and are only
/// meaningful for the graph that issued them. All external references to
/// nodes go through `NodeId`s rather than aliased references.
///
/// [`DirectedGraph`]: crate::graph::DirectedGraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the underlying arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex in an adjacency-list graph: a unique string identifier plus a
/// map from each neighbor to the weight of the directed edge to it.
///
/// Nodes are created exclusively by `DirectedGraph::get_or_create_node`,
/// which guarantees at most one `Node` per identifier within a graph.
#[derive(Debug, Clone)]
pub struct Node<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Unique identifier for this node
    id: String,

    /// Outgoing edges: neighbor -> weight of the edge to that neighbor
    neighbors: HashMap<NodeId, W>,
}

impl<W> Node<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a node with the given identifier and no neighbors.
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            neighbors: HashMap::new(),
        }
    }

    /// Returns this node's unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the map from each neighbor to the weight of the edge to it.
    pub fn neighbors(&self) -> &HashMap<NodeId, W> {
        &self.neighbors
    }

    /// Adds a directed edge to `neighbor` with the given weight, overwriting
    /// the weight if the edge already exists. The weight is stored as given;
    /// negative or zero weights are an algorithm-level concern, not enforced
    /// here.
    pub(crate) fn add_neighbor(&mut self, neighbor: NodeId, weight: W) {
        self.neighbors.insert(neighbor, weight);
    }

    /// Returns the number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Two nodes are equal if their unique identifiers are equal, independent of
/// their neighbor maps.
impl<W> PartialEq for Node<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<W> Eq for Node<W> where W: Float + Zero + Debug + Copy {}

impl<W> Hash for Node<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<W> fmt::Display for Node<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_neighbor_map() {
        let mut a: Node<f64> = Node::new("SEA");
        let b: Node<f64> = Node::new("SEA");
        a.add_neighbor(NodeId(1), 2.5);
        assert_eq!(a, b);
    }

    #[test]
    fn add_neighbor_overwrites() {
        let mut n: Node<f64> = Node::new("SEA");
        n.add_neighbor(NodeId(1), 5.0);
        n.add_neighbor(NodeId(1), 3.0);
        assert_eq!(n.degree(), 1);
        assert_eq!(n.neighbors()[&NodeId(1)], 3.0);
    }
}
