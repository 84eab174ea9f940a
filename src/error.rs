use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no node named '{name}'")]
    NameNotFound { name: String },

    #[error("node '{name}' is already declared with id {existing}")]
    DuplicateNode { name: String, existing: usize },

    #[error("vertex id {id} is out of range (graph has {count} vertices)")]
    UnknownVertex { id: usize, count: usize },

    #[error("edge on line {line} refers to undeclared node '{name}'")]
    UnknownEdgeEndpoint { name: String, line: u64 },

    #[error("line {line} is not a tab-separated pair: {content:?}")]
    MalformedEdge { line: u64, content: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for a lookup failure on a queried name.
    pub fn is_name_not_found(&self) -> bool {
        matches!(self, Error::NameNotFound { .. })
    }

    /// Attaches `path` to a read error raised while reading an opened file.
    pub(crate) fn at_path(self, path: &Path) -> Self {
        match self {
            Error::Read(source) => Error::Io {
                source,
                path: path.to_path_buf(),
            },
            other => other,
        }
    }
}
