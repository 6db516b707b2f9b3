use crate::graph::DirectedGraph;
use crate::io::{log_loaded, strip_quotes, GraphReader};
use crate::{Error, Result};
use std::collections::HashMap;
use std::io::BufRead;

/// Reader for the DB1B airline origin-and-destination CSV format. The
/// first line is a header; the `origin`, `dest`, and `distance` columns
/// are located by their (lowercased, unquoted) header names, so column
/// order does not matter. Repeated (origin, dest) rows overwrite the
/// recorded distance.
#[derive(Debug, Default)]
pub struct Db1bReader;

/// Maps a required column name to its index in a header line.
fn required_column(key: &HashMap<String, usize>, name: &str) -> Result<usize> {
    key.get(name)
        .copied()
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

impl Db1bReader {
    pub fn new() -> Self {
        Db1bReader
    }

    /// Builds the column-name-to-index map from the CSV header line.
    fn parse_header(header: &str) -> HashMap<String, usize> {
        header
            .split(',')
            .enumerate()
            .map(|(i, name)| (strip_quotes(name.trim()).to_lowercase(), i))
            .collect()
    }
}

impl GraphReader for Db1bReader {
    fn read(&mut self, input: &mut dyn BufRead) -> Result<DirectedGraph<f64>> {
        let mut lines = input.lines();
        let header = match lines.next() {
            Some(line) => line?,
            None => return Ok(DirectedGraph::new()),
        };

        let key = Self::parse_header(&header);
        let origin_col = required_column(&key, "origin")?;
        let dest_col = required_column(&key, "dest")?;
        let distance_col = required_column(&key, "distance")?;

        let mut graph = DirectedGraph::new();

        for (number, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            // header was line 1
            let line_number = number + 2;

            let fields: Vec<&str> = line.split(',').collect();
            let field = |col: usize, name: &str| -> Result<&str> {
                fields
                    .get(col)
                    .map(|f| strip_quotes(f.trim()))
                    .ok_or_else(|| Error::MalformedLine {
                        line: line_number,
                        reason: format!("missing {} field", name),
                    })
            };

            let orig_code = field(origin_col, "origin")?;
            let dest_code = field(dest_col, "dest")?;
            let miles = field(distance_col, "distance")?
                .parse::<f64>()
                .map_err(|e| Error::MalformedLine {
                    line: line_number,
                    reason: format!("bad distance: {}", e),
                })?;

            let orig = graph.get_or_create_node(orig_code);
            let dest = graph.get_or_create_node(dest_code);
            graph.add_edge(orig, dest, miles);
        }

        log_loaded(&graph);
        Ok(graph)
    }
}
