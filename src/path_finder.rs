//! Fewest-edge path queries over a [`GraphStore`].
//!
//! Paths are returned as vertex names from source to destination. An empty
//! path means the destination is unreachable; lengths use [`NO_PATH`] for the
//! same outcome. Unknown names are errors, never an empty path.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::error::Result;
use crate::graph_store::{GraphStore, Neighbors, VertexId};

/// Length reported when no path exists.
pub const NO_PATH: i64 = -1;

const ARROW: &str = " --> ";

/// Breadth-first search from `start`, stopping as soon as `target` is discovered.
///
/// Returns the vertex ids of a shortest path `[start, .., target]`, or `None`
/// when the frontier runs dry first. Neighbor ids outside `[0, vertex_count)`
/// are ignored.
pub fn bfs_path<G: Neighbors + ?Sized>(
    graph: &G,
    start: VertexId,
    target: VertexId,
) -> Option<Vec<VertexId>> {
    if start == target {
        return Some(vec![start]);
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    // predecessors[v] is the vertex that discovered v; the start has none
    let mut predecessors: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    visited.insert(start);
    queue.push_back(start);

    let mut found = false;
    'search: while let Some(current) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if neighbor >= predecessors.len() {
                continue;
            }
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
                predecessors[neighbor] = Some(current);
                if neighbor == target {
                    found = true;
                    break 'search;
                }
            }
        }
    }
    debug!(start, target, visited = visited.len(), found, "bfs finished");

    if !found {
        return None;
    }
    let mut path = vec![target];
    let mut current = target;
    while let Some(previous) = predecessors[current] {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    Some(path)
}

/// Read-only query front end over a loaded graph.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    store: &'g GraphStore,
}

impl<'g> PathFinder<'g> {
    pub fn new(store: &'g GraphStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'g GraphStore {
        self.store
    }

    /// A shortest path from `from` to `to`. `[from]` when both are the same node.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<Vec<String>> {
        let start = self.store.id_of(from)?;
        let target = self.store.id_of(to)?;
        Ok(bfs_path(self.store, start, target)
            .map(|ids| self.names(&ids))
            .unwrap_or_default())
    }

    /// Edge count of [`shortest_path`](Self::shortest_path), or [`NO_PATH`].
    pub fn shortest_path_length(&self, from: &str, to: &str) -> Result<i64> {
        let path = self.shortest_path(from, to)?;
        Ok(path_length(&path))
    }

    /// Joins a shortest `from -> via` leg and a shortest `via -> to` leg.
    ///
    /// Each leg is independently shortest, so the result is minimal among paths
    /// that route through `via`. The `via` node appears once at the seam. Empty
    /// when either leg is missing.
    pub fn shortest_path_via(&self, from: &str, via: &str, to: &str) -> Result<Vec<String>> {
        let mut first = self.shortest_path(from, via)?;
        let second = self.shortest_path(via, to)?;
        if first.is_empty() || second.is_empty() {
            return Ok(Vec::new());
        }
        first.extend(second.into_iter().skip(1));
        Ok(first)
    }

    /// Sum of both leg lengths, or [`NO_PATH`] when either leg is missing.
    pub fn shortest_path_via_length(&self, from: &str, via: &str, to: &str) -> Result<i64> {
        let first = self.shortest_path_length(from, via)?;
        let second = self.shortest_path_length(via, to)?;
        if first == NO_PATH || second == NO_PATH {
            return Ok(NO_PATH);
        }
        Ok(first + second)
    }

    fn names(&self, ids: &[VertexId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.store.name_of(id))
            .map(str::to_string)
            .collect()
    }
}

/// Edges in `path`, or [`NO_PATH`] for the empty path.
pub fn path_length(path: &[String]) -> i64 {
    if path.is_empty() {
        NO_PATH
    } else {
        path.len() as i64 - 1
    }
}

/// Renders `A --> B --> C`. The empty path renders as an empty string.
pub fn format_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(ARROW)
}
