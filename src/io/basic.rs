use crate::graph::DirectedGraph;
use crate::io::{log_loaded, GraphReader};
use crate::{Error, Result};
use std::io::BufRead;

/// Reader for whitespace-delimited flight data. Each non-empty line must
/// contain `ORIG DEST DISTANCE`; anything after the third field is
/// ignored.
#[derive(Debug, Default)]
pub struct BasicReader;

impl BasicReader {
    pub fn new() -> Self {
        BasicReader
    }
}

impl GraphReader for BasicReader {
    fn read(&mut self, input: &mut dyn BufRead) -> Result<DirectedGraph<f64>> {
        let mut graph = DirectedGraph::new();

        for (number, line) in input.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let line_number = number + 1;

            let mut fields = line.split_whitespace();
            let orig_code = fields.next().ok_or_else(|| Error::MalformedLine {
                line: line_number,
                reason: "missing origin".to_string(),
            })?;
            let dest_code = fields.next().ok_or_else(|| Error::MalformedLine {
                line: line_number,
                reason: "missing destination".to_string(),
            })?;
            let distance = fields
                .next()
                .ok_or_else(|| Error::MalformedLine {
                    line: line_number,
                    reason: "missing distance".to_string(),
                })?
                .parse::<f64>()
                .map_err(|e| Error::MalformedLine {
                    line: line_number,
                    reason: format!("bad distance: {}", e),
                })?;

            let orig = graph.get_or_create_node(orig_code);
            let dest = graph.get_or_create_node(dest_code);
            graph.add_edge(orig, dest, distance);
        }

        log_loaded(&graph);
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_lines_and_ignores_trailing_fields() {
        let data = "SEA PDX 129.5 extra junk\nPDX SFO 550\n\n";
        let graph = BasicReader::new().read(&mut Cursor::new(data)).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        let sea = graph.find_node("SEA").unwrap();
        let pdx = graph.find_node("PDX").unwrap();
        assert_eq!(graph.edge_weight(sea, pdx), Some(129.5));
    }

    #[test]
    fn short_line_is_an_error() {
        let data = "SEA PDX 100\nSEA SFO\n";
        let err = BasicReader::new().read(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn bad_distance_is_an_error() {
        let data = "SEA PDX far\n";
        let err = BasicReader::new().read(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 1, .. }));
    }
}
