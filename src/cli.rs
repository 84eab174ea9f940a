use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::graph_store::EdgeMode;
use crate::path_finder::{format_path, path_length, PathFinder};

/// Shortest link path between two articles, optionally through a third.
#[derive(Parser, Debug)]
#[command(name = "wikipath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File with one article name per line
    pub node_file: PathBuf,

    /// File with one tab-separated `from<TAB>to` link per line
    pub edge_file: PathBuf,

    /// Starting article
    pub start: String,

    /// End article, or the intermediate article when END is given
    pub end_or_via: String,

    /// End article when routing through an intermediate article
    pub end: Option<String>,

    /// Follow links in both directions
    #[arg(short, long, env = "WIKIPATH_UNDIRECTED")]
    pub undirected: bool,

    /// Log graph loading and searches to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// A resolved path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Direct { from: String, to: String },
    Via { from: String, via: String, to: String },
}

impl Cli {
    pub fn edge_mode(&self) -> EdgeMode {
        if self.undirected {
            EdgeMode::Undirected
        } else {
            EdgeMode::Directed
        }
    }

    pub fn query(&self) -> Query {
        match &self.end {
            None => Query::Direct {
                from: self.start.clone(),
                to: self.end_or_via.clone(),
            },
            Some(end) => Query::Via {
                from: self.start.clone(),
                via: self.end_or_via.clone(),
                to: end.clone(),
            },
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "wikipath=debug"
        } else {
            "warn"
        }
    }
}

/// Runs `query` and renders the text printed to stdout.
pub fn render_report(finder: &PathFinder<'_>, query: &Query) -> Result<String> {
    let report = match query {
        Query::Direct { from, to } => {
            let path = finder.shortest_path(from, to)?;
            if path.is_empty() {
                format!("No path found between {from} and {to}")
            } else {
                format!(
                    "Shortest path from {from} to {to}, length = {}\n{}",
                    path_length(&path),
                    format_path(&path)
                )
            }
        }
        Query::Via { from, via, to } => {
            let path = finder.shortest_path_via(from, via, to)?;
            if path.is_empty() {
                format!("No path found between {from} and {to} that passes through {via}")
            } else {
                format!(
                    "Shortest path from {from} to {to} through {via}, length = {}\n{}",
                    path_length(&path),
                    format_path(&path)
                )
            }
        }
    };
    Ok(report)
}
