//! Node and edge list parsing.
//!
//! Node files hold one name per line. Edge files hold `from<TAB>to` pairs.
//! In both, blank lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph_store::{EdgeMode, GraphStore};

const COMMENT: char = '#';

/// One line of an edge file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    /// 1-based source line, 0 when built in memory.
    #[serde(skip)]
    pub line: u64,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            line: 0,
        }
    }
}

pub fn load_nodes<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut nodes = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }
        nodes.push(line);
    }
    Ok(nodes)
}

pub fn load_edges<R: Read>(mut reader: R) -> Result<Vec<EdgeRecord>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let newlines: Vec<usize> = data
        .iter()
        .enumerate()
        .filter_map(|(i, &b)| (b == b'\n').then_some(i))
        .collect();

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(COMMENT as u8))
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(data.as_slice());

    let mut record = StringRecord::new();
    let mut edges = Vec::new();
    while rdr.read_record(&mut record)? {
        let line = line_of(&newlines, rdr.position().byte());
        if record.len() != 2 {
            return Err(Error::MalformedEdge {
                line,
                content: record.iter().collect::<Vec<_>>().join("\t"),
            });
        }
        let mut edge: EdgeRecord = record.deserialize(None)?;
        edge.line = line;
        edges.push(edge);
    }
    Ok(edges)
}

/// 1-based line of the record whose last consumed byte precedes `end`.
///
/// The reader's own record position is taken before skipped comment and blank
/// lines, so lines are counted from the raw input instead.
fn line_of(newlines: &[usize], end: u64) -> u64 {
    let last = end.saturating_sub(1) as usize;
    newlines.partition_point(|&n| n < last) as u64 + 1
}

/// Declares every node in order, then every edge in order.
pub fn build_graph(nodes: &[String], edges: &[EdgeRecord], mode: EdgeMode) -> Result<GraphStore> {
    let mut store = GraphStore::new(mode);
    for name in nodes {
        store.add_node(name.as_str())?;
    }
    for edge in edges {
        let from = endpoint(&store, &edge.from, edge.line)?;
        let to = endpoint(&store, &edge.to, edge.line)?;
        store.add_edge(from, to)?;
    }
    debug!(
        vertices = store.vertex_count(),
        edges = store.edge_count(),
        mode = ?mode,
        "graph built"
    );
    Ok(store)
}

/// Reads both files and builds the graph.
pub fn load_graph(node_path: &Path, edge_path: &Path, mode: EdgeMode) -> Result<GraphStore> {
    let nodes = load_nodes(open(node_path)?).map_err(|e| e.at_path(node_path))?;
    let edges = load_edges(open(edge_path)?).map_err(|e| e.at_path(edge_path))?;
    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        node_file = %node_path.display(),
        edge_file = %edge_path.display(),
        "input files parsed"
    );
    build_graph(&nodes, &edges, mode)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::Io {
        source,
        path: path.to_path_buf(),
    })
}

fn endpoint(store: &GraphStore, name: &str, line: u64) -> Result<usize> {
    store.id_of(name).map_err(|_| Error::UnknownEdgeEndpoint {
        name: name.to_string(),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_store::Neighbors;

    #[test]
    fn test_load_nodes_skips_comments_and_blanks() {
        let data = "# articles\nAlpha\n\nBeta Gamma\n#Delta\nEpsilon\n";
        let nodes = load_nodes(data.as_bytes()).unwrap();
        assert_eq!(nodes, ["Alpha", "Beta Gamma", "Epsilon"]);
    }

    #[test]
    fn test_load_nodes_keeps_inner_hash() {
        let nodes = load_nodes("C#\n  #indented\n".as_bytes()).unwrap();
        assert_eq!(nodes, ["C#", "  #indented"]);
    }

    #[test]
    fn test_load_edges() {
        let data = "# links\nA\tB\n\nB\tC\n";
        let edges = load_edges(data.as_bytes()).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].from.as_str(), edges[0].to.as_str()), ("A", "B"));
        assert_eq!((edges[1].from.as_str(), edges[1].to.as_str()), ("B", "C"));
        assert_eq!(edges[0].line, 2);
        assert_eq!(edges[1].line, 4);
    }

    #[test]
    fn test_load_edges_crlf() {
        let edges = load_edges("A\tB\r\nB\tC\r\n".as_bytes()).unwrap();
        assert_eq!(
            edges,
            [
                EdgeRecord { line: 1, ..EdgeRecord::new("A", "B") },
                EdgeRecord { line: 2, ..EdgeRecord::new("B", "C") },
            ]
        );

        match load_edges("# links\r\nA\tB\r\n\r\nB\tC\r\nX Y Z\r\n".as_bytes()) {
            Err(Error::MalformedEdge { line, content }) => {
                assert_eq!(line, 5);
                assert_eq!(content, "X Y Z");
            }
            other => panic!("expected MalformedEdge, got {other:?}"),
        }
    }

    #[test]
    fn test_load_edges_last_line_without_newline() {
        let edges = load_edges("A\tB\n\nC\tD".as_bytes()).unwrap();
        assert_eq!(edges[1].line, 3);
        assert_eq!(edges[1].to, "D");
    }

    #[test]
    fn test_load_edges_keeps_quotes() {
        let edges = load_edges("\"Quoted\"\tPlain\n".as_bytes()).unwrap();
        assert_eq!(edges[0].from, "\"Quoted\"");
    }

    #[test]
    fn test_malformed_edge_line() {
        let data = "A\tB\nA B C\n";
        match load_edges(data.as_bytes()) {
            Err(Error::MalformedEdge { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "A B C");
            }
            other => panic!("expected MalformedEdge, got {other:?}"),
        }
        assert!(matches!(
            load_edges("A\tB\tC\n".as_bytes()),
            Err(Error::MalformedEdge { line: 1, .. })
        ));
    }

    #[test]
    fn test_build_graph() {
        let nodes = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let edges = vec![EdgeRecord::new("A", "B"), EdgeRecord::new("A", "C")];
        let store = build_graph(&nodes, &edges, EdgeMode::Directed).unwrap();
        assert_eq!(store.vertex_count(), 3);
        assert_eq!(store.neighbors(0), &[1, 2]);
    }

    #[test]
    fn test_build_graph_rejects_unknown_endpoint() {
        let nodes = vec!["A".to_string()];
        let mut edge = EdgeRecord::new("A", "Nowhere");
        edge.line = 7;
        match build_graph(&nodes, &[edge], EdgeMode::Directed) {
            Err(Error::UnknownEdgeEndpoint { name, line }) => {
                assert_eq!(name, "Nowhere");
                assert_eq!(line, 7);
            }
            other => panic!("expected UnknownEdgeEndpoint, got {other:?}"),
        }
    }

    #[test]
    fn test_build_graph_rejects_duplicate_node() {
        let nodes = vec!["A".to_string(), "A".to_string()];
        assert!(matches!(
            build_graph(&nodes, &[], EdgeMode::Directed),
            Err(Error::DuplicateNode { .. })
        ));
    }

    #[test]
    fn test_reader_failure_has_no_placeholder_path() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }
        assert!(matches!(load_nodes(Broken), Err(Error::Read(_))));
        assert!(matches!(load_edges(Broken), Err(Error::Read(_))));

        let path = Path::new("nodes.txt");
        match load_nodes(Broken).map_err(|e| e.at_path(path)) {
            Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let missing = Path::new("definitely/not/here.tsv");
        match load_graph(missing, missing, EdgeMode::Directed) {
            Err(Error::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
