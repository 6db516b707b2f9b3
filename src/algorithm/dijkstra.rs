use log::debug;
use num_traits::{Float, Zero};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::traits::PathData;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPaths};
use crate::data_structures::IndexedHeap;
use crate::graph::{DirectedGraph, NodeId};
use crate::Result;

/// Dijkstra's single-source shortest paths algorithm.
///
/// The frontier is an [`IndexedHeap`], so a node discovered via a longer
/// path has its priority lowered in place when a shorter one appears. A
/// node leaves the frontier exactly once; extraction finalizes its
/// distance, which is optimal for graphs with non-negative edge weights.
/// Negative weights are not checked and produce the classical wrong
/// answers without crashing; this is a documented limitation, not a
/// supported input.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance.
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute(&self, graph: &DirectedGraph<W>, origin: NodeId) -> Result<ShortestPaths<W>> {
        debug!(
            "computing shortest paths from {} over {} nodes / {} edges",
            origin,
            graph.node_count(),
            graph.edge_count()
        );

        let mut paths: HashMap<NodeId, PathData<W>> = HashMap::new();
        let mut frontier: IndexedHeap<NodeId, W> = IndexedHeap::new();

        paths.insert(
            origin,
            PathData {
                distance: W::zero(),
                previous: None,
            },
        );
        frontier.insert(origin, W::zero())?;

        while !frontier.is_empty() {
            // Extraction finalizes this node: its distance is optimal and
            // it never re-enters the frontier.
            let (finalized, distance) = frontier.extract_min()?;

            for (neighbor, weight) in graph.outgoing(finalized) {
                let candidate = distance + weight;
                match paths.entry(neighbor) {
                    Entry::Vacant(slot) => {
                        slot.insert(PathData {
                            distance: candidate,
                            previous: Some(finalized),
                        });
                        frontier.insert(neighbor, candidate)?;
                    }
                    Entry::Occupied(mut slot) => {
                        let data = slot.get_mut();
                        // Strictly shorter only; ties keep the first
                        // discovered path.
                        if candidate < data.distance {
                            data.distance = candidate;
                            data.previous = Some(finalized);
                            frontier.decrease_priority(&neighbor, candidate)?;
                        }
                    }
                }
            }
        }

        debug!("finalized {} reachable nodes", paths.len());

        Ok(ShortestPaths { origin, paths })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(graph: &DirectedGraph<f64>, origin: NodeId) -> ShortestPaths<f64> {
        Dijkstra::new().compute(graph, origin).unwrap()
    }

    #[test]
    fn origin_has_zero_distance_and_single_node_path() {
        let mut g: DirectedGraph<f64> = DirectedGraph::new();
        let a = g.get_or_create_node("A");
        let b = g.get_or_create_node("B");
        g.add_edge(a, b, 5.0);

        let sp = compute(&g, a);
        assert_eq!(sp.shortest_path_length(a), 0.0);
        assert_eq!(sp.shortest_path(a), Some(vec![a]));
        assert_eq!(sp.origin(), a);
    }

    #[test]
    fn unreachable_node_is_infinite_and_pathless() {
        let mut g: DirectedGraph<f64> = DirectedGraph::new();
        let a = g.get_or_create_node("A");
        let b = g.get_or_create_node("B");
        g.add_edge(a, b, 5.0); // only edge, A -> B

        let sp = compute(&g, b);
        assert_eq!(sp.shortest_path_length(a), f64::INFINITY);
        assert_eq!(sp.shortest_path(a), None);
    }

    #[test]
    fn detour_beats_direct_edge() {
        let mut g: DirectedGraph<f64> = DirectedGraph::new();
        let a = g.get_or_create_node("A");
        let b = g.get_or_create_node("B");
        let c = g.get_or_create_node("C");
        g.add_edge(a, b, 5.0);
        g.add_edge(a, c, 1.0);
        g.add_edge(c, b, 2.0);

        let sp = compute(&g, a);
        assert_eq!(sp.shortest_path_length(b), 3.0);
        assert_eq!(sp.shortest_path(b), Some(vec![a, c, b]));
    }

    #[test]
    fn foreign_origin_yields_vacuous_result() {
        let mut g: DirectedGraph<f64> = DirectedGraph::new();
        let a = g.get_or_create_node("A");
        let b = g.get_or_create_node("B");
        g.add_edge(a, b, 1.0);

        let foreign = NodeId(99);
        let sp = compute(&g, foreign);
        assert_eq!(sp.shortest_path_length(foreign), 0.0);
        assert_eq!(sp.shortest_path(foreign), Some(vec![foreign]));
        assert_eq!(sp.shortest_path_length(a), f64::INFINITY);
    }
}
