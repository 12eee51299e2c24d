//! Vertex adjacency built from mesh connectivity

use crate::mesh::TriangleMesh;
use serde::{Deserialize, Serialize};

/// Per-vertex neighbor lists, sorted ascending and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexAdjacency {
    neighbors: Vec<Vec<usize>>,
}

impl VertexAdjacency {
    /// Build adjacency from every face edge and wire edge of the mesh.
    ///
    /// Edges referencing vertices outside the mesh are ignored; call
    /// [`TriangleMesh::validate`] first to reject them instead.
    pub fn from_mesh(mesh: &TriangleMesh) -> Self {
        let n = mesh.vertex_count();
        let mut neighbors = vec![Vec::new(); n];
        for (a, b) in mesh.unique_edges() {
            if a >= n || b >= n {
                continue;
            }
            neighbors[a].push(b);
            neighbors[b].push(a);
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }
        Self { neighbors }
    }

    /// Number of vertices covered
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if no vertices are covered
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbors of `v` in ascending order. Empty for unknown vertices.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.neighbors.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of neighbors of `v`
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Whether `a` and `b` share an edge
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }
}
