//! Mesh data structures and functionality

use crate::point::*;
use crate::{Error, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices, faces and loose (wire) edges
///
/// Wire edges are edges that do not belong to any face, e.g. the segments of
/// a polyline or an outline drawn in an editor. Face edges are implicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3d>,
    pub faces: Vec<[usize; 3]>,
    pub edges: Vec<[usize; 2]>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3d>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            edges: Vec::new(),
        }
    }

    /// Create a wire mesh from vertices and edges
    pub fn from_vertices_and_edges(vertices: Vec<Point3d>, edges: Vec<[usize; 2]>) -> Self {
        Self {
            vertices,
            faces: Vec::new(),
            edges,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of wire edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || (self.faces.is_empty() && self.edges.is_empty())
    }

    /// Add a vertex to the mesh
    pub fn add_vertex(&mut self, vertex: Point3d) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a face to the mesh
    pub fn add_face(&mut self, face: [usize; 3]) {
        self.faces.push(face);
    }

    /// Add a wire edge to the mesh
    pub fn add_edge(&mut self, edge: [usize; 2]) {
        self.edges.push(edge);
    }

    /// All distinct edges of the mesh (face edges and wire edges) as `(min, max)` pairs,
    /// sorted.
    pub fn unique_edges(&self) -> Vec<(usize, usize)> {
        let face_edges = self
            .faces
            .iter()
            .flat_map(|f| [(f[0], f[1]), (f[1], f[2]), (f[2], f[0])]);
        let wire_edges = self.edges.iter().map(|e| (e[0], e[1]));

        face_edges
            .chain(wire_edges)
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// Check that every face and edge references existing, distinct vertices
    pub fn validate(&self) -> Result<()> {
        let n = self.vertices.len();
        for (fi, face) in self.faces.iter().enumerate() {
            if let Some(&v) = face.iter().find(|&&v| v >= n) {
                return Err(Error::InvalidData(format!(
                    "Face {} references vertex {} but the mesh has {} vertices",
                    fi, v, n
                )));
            }
            if face[0] == face[1] || face[1] == face[2] || face[2] == face[0] {
                return Err(Error::InvalidData(format!("Face {} is degenerate", fi)));
            }
        }
        for (ei, edge) in self.edges.iter().enumerate() {
            if let Some(&v) = edge.iter().find(|&&v| v >= n) {
                return Err(Error::InvalidData(format!(
                    "Edge {} references vertex {} but the mesh has {} vertices",
                    ei, v, n
                )));
            }
            if edge[0] == edge[1] {
                return Err(Error::InvalidData(format!("Edge {} is degenerate", ei)));
            }
        }
        Ok(())
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
