//! Flightpath - Single-Source Shortest Paths over String-Identified Graphs
//!
//! This library computes single-source shortest paths with Dijkstra's
//! algorithm over weighted directed graphs whose vertices are keyed by opaque
//! string identifiers (airport codes, route names, any unique label).
//!
//! The graph interns each identifier exactly once and hands out lightweight
//! [`NodeId`] handles; the algorithm drives a decrease-key binary heap, so a
//! node's frontier priority is lowered in place rather than re-inserted.
//!
//! ```
//! use flightpath::{Dijkstra, DirectedGraph, ShortestPathAlgorithm};
//!
//! let mut graph: DirectedGraph<f64> = DirectedGraph::new();
//! let a = graph.get_or_create_node("A");
//! let b = graph.get_or_create_node("B");
//! let c = graph.get_or_create_node("C");
//! graph.add_edge(a, b, 5.0);
//! graph.add_edge(a, c, 1.0);
//! graph.add_edge(c, b, 2.0);
//!
//! let paths = Dijkstra::new().compute(&graph, a).unwrap();
//! assert_eq!(paths.shortest_path_length(b), 3.0);
//! assert_eq!(paths.shortest_path(b), Some(vec![a, c, b]));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPaths};
pub use data_structures::IndexedHeap;
/// Re-export main types for convenient use
pub use graph::directed::{DirectedGraph, GraphReport};
pub use graph::node::{Node, NodeId};
pub use io::{BasicReader, Db1bReader, GraphReader};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("item is already present in the priority queue")]
    DuplicateItem,

    #[error("item is not present in the priority queue")]
    AbsentItem,

    #[error("new priority is greater than the item's current priority")]
    PriorityIncrease,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("required column missing from header: {0}")]
    MissingColumn(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
