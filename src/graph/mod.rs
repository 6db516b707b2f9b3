pub mod directed;
pub mod generators;
pub mod node;

pub use directed::{DirectedGraph, GraphReport};
pub use node::{Node, NodeId};
