//! Shortest link paths between named nodes of an unweighted graph.
//!
//! A [`GraphStore`] is built once from a node list and an edge list (see
//! [`loader`]), then queried read-only through a [`PathFinder`].

pub mod cli;
pub mod error;
pub mod graph_store;
pub mod loader;
pub mod path_finder;

pub use error::{Error, Result};
pub use graph_store::{EdgeMode, GraphStore, Neighbors, VertexId};
pub use loader::{build_graph, load_edges, load_graph, load_nodes, EdgeRecord};
pub use path_finder::{format_path, path_length, PathFinder, NO_PATH};
