//! File-format readers that build a [`DirectedGraph`] from flight data.
//!
//! Readers are graph-builder collaborators: they call `get_or_create_node`
//! for every identifier they encounter and `add_edge` for every weighted
//! relation, so later rows for the same (origin, dest) pair overwrite the
//! earlier weight.

pub mod basic;
pub mod db1b;

pub use basic::BasicReader;
pub use db1b::Db1bReader;

use crate::graph::DirectedGraph;
use crate::Result;
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A source of graph data. Implementations read one input format and
/// produce a fully populated graph before any shortest-paths computation.
pub trait GraphReader {
    /// Reads the whole input and returns the graph it describes.
    fn read(&mut self, input: &mut dyn BufRead) -> Result<DirectedGraph<f64>>;

    /// Opens `path` and reads it with [`read`](GraphReader::read).
    fn read_path(&mut self, path: &Path) -> Result<DirectedGraph<f64>> {
        let mut reader = BufReader::new(File::open(path)?);
        self.read(&mut reader)
    }
}

/// Logs a summary of a freshly loaded graph and warns if it carries
/// negative weights, which Dijkstra's algorithm does not support.
pub(crate) fn log_loaded(graph: &DirectedGraph<f64>) {
    let report = graph.report();
    info!(
        "loaded graph: {} nodes, {} edges, average degree {:.2}",
        report.nodes, report.edges, report.average_degree
    );
    if !graph.validate_non_negative() {
        warn!("graph contains negative edge weights; shortest paths over it are undefined");
    }
}

/// Strips surrounding double quotes, as found in DB1B CSV fields.
pub(crate) fn strip_quotes(field: &str) -> &str {
    field.trim_matches('"')
}
