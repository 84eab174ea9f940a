use std::collections::HashMap;

use crate::error::{Error, Result};

/// Dense vertex identifier in `[0, vertex_count)`, assigned in declaration order.
pub type VertexId = usize;

/// How `add_edge` registers a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// Only `to` becomes a neighbor of `from`.
    #[default]
    Directed,
    /// Both endpoints become neighbors of each other.
    Undirected,
}

/// Adjacency source that breadth-first search can walk.
pub trait Neighbors {
    fn vertex_count(&self) -> usize;

    /// Neighbors of `id` in edge insertion order. Empty for unknown ids.
    fn neighbors(&self, id: VertexId) -> &[VertexId];
}

impl Neighbors for Vec<Vec<VertexId>> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Name/id mapping plus adjacency lists for an unweighted graph.
///
/// Built once by the loader and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    ids: HashMap<String, VertexId>,
    names: Vec<String>,
    adjacency: Vec<Vec<VertexId>>,
    mode: EdgeMode,
    edge_count: usize,
}

impl GraphStore {
    pub fn new(mode: EdgeMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> EdgeMode {
        self.mode
    }

    /// Registers `name` under the next free id.
    ///
    /// A name that is already present is rejected with [`Error::DuplicateNode`]
    /// and leaves the store untouched.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<VertexId> {
        let name = name.into();
        if let Some(&existing) = self.ids.get(&name) {
            return Err(Error::DuplicateNode { name, existing });
        }
        let id = self.names.len();
        self.ids.insert(name.clone(), id);
        self.names.push(name);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Registers `to` as reachable from `from` (and the reverse in undirected mode).
    /// Duplicate edges and self-loops are kept as given.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let count = self.vertex_count();
        for id in [from, to] {
            if id >= count {
                return Err(Error::UnknownVertex { id, count });
            }
        }
        self.adjacency[from].push(to);
        if self.mode == EdgeMode::Undirected && from != to {
            self.adjacency[to].push(from);
        }
        self.edge_count += 1;
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Number of `add_edge` calls that succeeded.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn name_of(&self, id: VertexId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn id_of(&self, name: &str) -> Result<VertexId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| Error::NameNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }
}

impl Neighbors for GraphStore {
    fn vertex_count(&self) -> usize {
        self.names.len()
    }

    fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
