//! Text format for batches of graphs.
//!
//! ```text
//! U 3
//! 0 1 1
//! 1 0 1
//! 1 1 0
//!
//! D 2
//! 0 1
//! 1 0
//! ```
//!
//! Each graph is a header `D|U <vertices>` followed by one line per matrix
//! row. Blank lines between graphs are ignored. Loading stops at the first
//! malformed line; everything read before it is kept.

use core::fmt;
use std::path::Path;

use crate::graph::{Graph, Orientation};

/// Graphs read from a text source, plus the reason reading stopped early.
#[derive(Debug)]
pub struct GraphFile {
    /// Every graph completed before the first error, in file order.
    ///
    /// Graphs with structural defects are still included; check
    /// [`Graph::is_valid`].
    pub graphs: Vec<Graph>,
    /// Why reading stopped, or `None` if the whole input was consumed.
    pub error: Option<ParseError>,
}

/// A malformed line in graph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with it.
    pub kind: ParseErrorKind,
}

/// The kinds of [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Header was not `D|U <vertices>`.
    BadHeader,
    /// Vertex count was not a positive integer.
    BadVertexCount,
    /// A matrix row had the wrong number of entries.
    RowLength {
        /// Entries required.
        expected: usize,
        /// Entries present.
        found: usize,
    },
    /// A matrix entry was not an integer.
    BadEntry(String),
    /// Input ended before the matrix was complete.
    Truncated {
        /// Rows required.
        expected: usize,
        /// Rows present.
        found: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::BadHeader => {
                f.write_str("first line of graph must have format 'D'|'U' TotalVertices")
            }
            ParseErrorKind::BadVertexCount => f.write_str("number of vertices must be positive"),
            ParseErrorKind::RowLength { expected, found } => {
                write!(f, "expected {expected} entries in row, found {found}")
            }
            ParseErrorKind::BadEntry(token) => write!(f, "invalid matrix entry {token:?}"),
            ParseErrorKind::Truncated { expected, found } => {
                write!(f, "input ended after {found} of {expected} rows")
            }
        }
    }
}

impl std::error::Error for ParseError {}

struct Pending {
    orientation: Orientation,
    vertices: usize,
    rows: Vec<Vec<i64>>,
}

/// Parses every graph in `text`.
pub fn parse_graphs(text: &str) -> GraphFile {
    let mut graphs = Vec::new();
    let mut pending: Option<Pending> = None;
    let mut last_line = 0;

    for (idx, line) in text.lines().enumerate() {
        last_line = idx + 1;

        let Some(p) = pending.as_mut() else {
            if line.trim().is_empty() {
                continue;
            }
            match parse_header(line) {
                Ok((orientation, vertices)) => {
                    pending = Some(Pending {
                        orientation,
                        vertices,
                        rows: Vec::new(),
                    });
                }
                Err(kind) => return stop(graphs, ParseError { line: last_line, kind }),
            }
            continue;
        };

        match parse_row(line, p.vertices) {
            Ok(row) => p.rows.push(row),
            Err(kind) => return stop(graphs, ParseError { line: last_line, kind }),
        }
        if p.rows.len() == p.vertices {
            if let Some(done) = pending.take() {
                graphs.push(Graph::new(done.orientation, done.vertices, done.rows));
            }
        }
    }

    match pending {
        Some(p) => {
            let kind = ParseErrorKind::Truncated {
                expected: p.vertices,
                found: p.rows.len(),
            };
            stop(graphs, ParseError { line: last_line, kind })
        }
        None => GraphFile { graphs, error: None },
    }
}

fn stop(graphs: Vec<Graph>, err: ParseError) -> GraphFile {
    #[cfg(feature = "tracing")]
    tracing::warn!(%err, read = graphs.len(), "stopped reading graphs");
    GraphFile {
        graphs,
        error: Some(err),
    }
}

fn parse_header(line: &str) -> Result<(Orientation, usize), ParseErrorKind> {
    let mut fields = line.split_whitespace();
    let (Some(kind), Some(count), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ParseErrorKind::BadHeader);
    };
    let orientation = match kind {
        "D" => Orientation::Directed,
        "U" => Orientation::Undirected,
        _ => return Err(ParseErrorKind::BadHeader),
    };
    match count.parse::<usize>() {
        Ok(n) if n > 0 => Ok((orientation, n)),
        _ => Err(ParseErrorKind::BadVertexCount),
    }
}

fn parse_row(line: &str, expected: usize) -> Result<Vec<i64>, ParseErrorKind> {
    let row = line
        .split_whitespace()
        .map(|tok| tok.parse::<i64>().map_err(|_| ParseErrorKind::BadEntry(tok.to_owned())))
        .collect::<Result<Vec<_>, _>>()?;
    if row.len() != expected {
        return Err(ParseErrorKind::RowLength {
            expected,
            found: row.len(),
        });
    }
    Ok(row)
}

/// Reads and parses a graph file.
///
/// # Errors
/// Returns the I/O error if the file cannot be read. Format problems are
/// reported through [`GraphFile::error`].
pub fn read_graphs(path: impl AsRef<Path>) -> std::io::Result<GraphFile> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_graphs(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_several_graphs() {
        let text = "U 2\n0 1\n1 0\n\nD 3\n0 1 0\n0 0 1\n1 0 0\n";
        let file = parse_graphs(text);
        assert!(file.error.is_none());
        assert_eq!(file.graphs.len(), 2);
        assert_eq!(file.graphs[0].orientation(), Orientation::Undirected);
        assert_eq!(file.graphs[0].total_edges(), 1);
        assert_eq!(file.graphs[1].orientation(), Orientation::Directed);
        assert_eq!(file.graphs[1].total_edges(), 3);
    }

    #[test]
    fn last_graph_needs_no_trailing_line() {
        let file = parse_graphs("U 1\n0");
        assert!(file.error.is_none());
        assert_eq!(file.graphs.len(), 1);
    }

    #[test]
    fn keeps_structurally_invalid_graphs() {
        let file = parse_graphs("U 2\n0 1\n0 0\n");
        assert!(file.error.is_none());
        assert_eq!(file.graphs.len(), 1);
        assert!(!file.graphs[0].is_valid());
    }

    #[test]
    fn stops_at_bad_header() {
        let file = parse_graphs("U 1\n0\n\nX 2\n0 0\n0 0\n");
        assert_eq!(file.graphs.len(), 1);
        assert_eq!(
            file.error,
            Some(ParseError { line: 4, kind: ParseErrorKind::BadHeader })
        );

        let file = parse_graphs("U\n");
        assert_eq!(file.error.unwrap().kind, ParseErrorKind::BadHeader);
        let file = parse_graphs("U 0\n");
        assert_eq!(file.error.unwrap().kind, ParseErrorKind::BadVertexCount);
        let file = parse_graphs("U -3\n");
        assert_eq!(file.error.unwrap().kind, ParseErrorKind::BadVertexCount);
    }

    #[test]
    fn stops_at_bad_row() {
        let file = parse_graphs("U 2\n0 1\n1\n");
        assert!(file.graphs.is_empty());
        assert_eq!(
            file.error,
            Some(ParseError {
                line: 3,
                kind: ParseErrorKind::RowLength { expected: 2, found: 1 }
            })
        );

        let file = parse_graphs("U 2\n0 x\n");
        assert_eq!(file.error.unwrap().kind, ParseErrorKind::BadEntry("x".into()));
    }

    #[test]
    fn reports_truncation() {
        let file = parse_graphs("U 3\n0 1 1\n1 0 1\n");
        assert!(file.graphs.is_empty());
        let err = file.error.unwrap();
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ParseErrorKind::Truncated { expected: 3, found: 2 });
        assert_eq!(err.to_string(), "line 3: input ended after 2 of 3 rows");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_vertex_count_keeps_earlier_graphs() {
        let file = parse_graphs("U 1\n0\n\nU 18446744073709551615\n");
        assert_eq!(file.graphs.len(), 1);
        assert_eq!(
            file.error,
            Some(ParseError {
                line: 4,
                kind: ParseErrorKind::Truncated { expected: usize::MAX, found: 0 }
            })
        );

        let file = parse_graphs("U 1\n0\n\nU 18446744073709551615\n0\n");
        assert_eq!(file.graphs.len(), 1);
        assert_eq!(
            file.error.unwrap().kind,
            ParseErrorKind::RowLength { expected: usize::MAX, found: 1 }
        );
    }
}
