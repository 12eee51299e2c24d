//! Vertex selection sets

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An unordered set of selected vertex indices.
///
/// Iteration is always ascending, so the first selected vertex is the
/// lowest index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexSelection {
    vertices: BTreeSet<usize>,
}

impl VertexSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every vertex in `0..vertex_count`
    pub fn all(vertex_count: usize) -> Self {
        (0..vertex_count).collect()
    }

    /// Create a selection from vertex indices (duplicates are ignored)
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        indices.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Add a vertex, returning `false` if it was already selected
    pub fn insert(&mut self, vertex: usize) -> bool {
        self.vertices.insert(vertex)
    }

    /// Remove a vertex, returning `true` if it was selected
    pub fn remove(&mut self, vertex: usize) -> bool {
        self.vertices.remove(&vertex)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Lowest selected index
    pub fn first(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    /// Highest selected index
    pub fn last(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Selected vertices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().copied()
    }

    /// Map every selected index through `old_to_new`, e.g. after vertices
    /// were merged and the vertex array compacted.
    pub fn remapped(&self, old_to_new: &[usize]) -> Self {
        self.iter()
            .filter_map(|v| old_to_new.get(v).copied())
            .collect()
    }
}

impl FromIterator<usize> for VertexSelection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl Extend<usize> for VertexSelection {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.vertices.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_ascending() {
        let selection = VertexSelection::from_indices([7, 2, 9, 2, 4]);
        assert_eq!(selection.len(), 4);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![2, 4, 7, 9]);
        assert_eq!(selection.first(), Some(2));
        assert_eq!(selection.last(), Some(9));
    }

    #[test]
    fn test_insert_remove() {
        let mut selection = VertexSelection::new();
        assert!(selection.is_empty());
        assert!(selection.insert(3));
        assert!(!selection.insert(3));
        assert!(selection.contains(3));
        assert!(selection.remove(3));
        assert!(!selection.contains(3));
    }

    #[test]
    fn test_remapped_collapses_merged_vertices() {
        let selection = VertexSelection::from_indices([0, 1, 2, 3]);
        // 1 and 2 merged into 0, 3 shifted down
        let remapped = selection.remapped(&[0, 0, 0, 1]);
        assert_eq!(remapped.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_all() {
        let selection = VertexSelection::all(3);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
