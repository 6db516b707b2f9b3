use crate::graph::{DirectedGraph, NodeId};
use crate::Result;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// Per-node record of the best known path from the origin: cumulative
/// distance plus the predecessor on that path (`None` for the origin).
/// One record exists per node discovered during a computation; nodes with
/// no record are implicitly at infinite distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PathData<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) distance: W,
    pub(crate) previous: Option<NodeId>,
}

/// Result of one shortest-paths computation: the distance and predecessor
/// of every node reachable from the origin. Results are a plain value; a
/// later computation produces a new `ShortestPaths` rather than mutating
/// this one.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) origin: NodeId,
    pub(crate) paths: HashMap<NodeId, PathData<W>>,
}

impl<W> ShortestPaths<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The origin node this computation started from.
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Returns the nodes reachable from the origin, the origin included.
    pub fn reachable(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.paths.keys().copied()
    }

    /// Returns the length of the shortest path from the origin to
    /// `destination`, or positive infinity if no path exists. Unreachable
    /// is a sentinel, not an error.
    pub fn shortest_path_length(&self, destination: NodeId) -> W {
        match self.paths.get(&destination) {
            Some(data) => data.distance,
            None => W::infinity(),
        }
    }

    /// Returns the predecessor of `destination` on its shortest path, if
    /// `destination` was reached and is not the origin.
    pub fn predecessor(&self, destination: NodeId) -> Option<NodeId> {
        self.paths.get(&destination).and_then(|data| data.previous)
    }

    /// Returns the nodes along the shortest path from the origin to
    /// `destination`, origin first. If `destination` is the origin, the
    /// path is the single-element sequence `[origin]`. Returns `None` if
    /// `destination` was never reached.
    pub fn shortest_path(&self, destination: NodeId) -> Option<Vec<NodeId>> {
        self.paths.get(&destination)?;

        let mut path = vec![destination];
        let mut current = destination;
        while let Some(previous) = self.paths.get(&current).and_then(|data| data.previous) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms over a
/// [`DirectedGraph`].
pub trait ShortestPathAlgorithm<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes shortest paths from `origin` to every reachable node.
    ///
    /// `origin` need not belong to `graph`: a foreign handle simply yields
    /// a result covering the vacuous reachable set `{origin}`.
    fn compute(&self, graph: &DirectedGraph<W>, origin: NodeId) -> Result<ShortestPaths<W>>;

    /// Returns the name of the algorithm.
    fn name(&self) -> &'static str;
}
