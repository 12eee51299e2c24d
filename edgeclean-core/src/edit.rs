//! Editable mesh with cached adjacency and a vertex selection

use crate::adjacency::VertexAdjacency;
use crate::merge::{self, MergeReport};
use crate::mesh::TriangleMesh;
use crate::point::Point3d;
use crate::selection::VertexSelection;
use crate::traits::MeshGraph;
use crate::{Error, Result};

/// A mesh being edited: geometry, its adjacency, and the current selection.
///
/// Coordinates can be changed freely through [`MeshGraph`]; topology changes
/// go through methods that keep the adjacency and selection in sync.
#[derive(Debug, Clone)]
pub struct EditMesh {
    mesh: TriangleMesh,
    adjacency: VertexAdjacency,
    selection: VertexSelection,
}

impl EditMesh {
    /// Wrap a mesh for editing. Nothing is selected initially.
    pub fn new(mesh: TriangleMesh) -> Result<Self> {
        mesh.validate()?;
        let adjacency = VertexAdjacency::from_mesh(&mesh);
        Ok(Self {
            mesh,
            adjacency,
            selection: VertexSelection::new(),
        })
    }

    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// The currently selected vertices
    pub fn selected_vertices(&self) -> &VertexSelection {
        &self.selection
    }

    /// Add a vertex to the selection
    pub fn select(&mut self, vertex: usize) -> Result<()> {
        self.check_vertex(vertex)?;
        self.selection.insert(vertex);
        Ok(())
    }

    /// Replace the selection
    pub fn set_selection(&mut self, selection: VertexSelection) -> Result<()> {
        if let Some(v) = selection.last() {
            self.check_vertex(v)?;
        }
        self.selection = selection;
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.selection = VertexSelection::all(self.mesh.vertex_count());
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Merge coincident vertices among `vertices`, then rebuild adjacency and
    /// carry the selection over to the new vertex indices.
    pub fn merge_coincident(
        &mut self,
        vertices: &VertexSelection,
        distance: f64,
    ) -> Result<MergeReport> {
        let report = merge::merge_coincident(&mut self.mesh, vertices, distance)?;
        if report.removed > 0 {
            self.adjacency = VertexAdjacency::from_mesh(&self.mesh);
            self.selection = self.selection.remapped(&report.old_to_new);
        }
        Ok(report)
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.mesh.vertex_count() {
            return Err(Error::InvalidData(format!(
                "Vertex {} is out of range for a mesh with {} vertices",
                vertex,
                self.mesh.vertex_count()
            )));
        }
        Ok(())
    }
}

impl MeshGraph for EditMesh {
    fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency.neighbors(vertex)
    }

    fn coordinate(&self, vertex: usize) -> Point3d {
        self.mesh.vertices[vertex]
    }

    fn set_coordinate(&mut self, vertex: usize, position: Point3d) {
        self.mesh.vertices[vertex] = position;
    }

    fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency.are_adjacent(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_polyline(n: usize) -> TriangleMesh {
        let vertices = (0..n).map(|i| Point3d::new(i as f64, 0.0, 0.0)).collect();
        let edges = (1..n).map(|i| [i - 1, i]).collect();
        TriangleMesh::from_vertices_and_edges(vertices, edges)
    }

    #[test]
    fn test_graph_access() {
        let mut edit = EditMesh::new(make_polyline(4)).unwrap();
        assert_eq!(edit.vertex_count(), 4);
        assert_eq!(edit.neighbors(1), &[0, 2]);
        assert!(edit.are_adjacent(2, 3));
        edit.set_coordinate(3, Point3d::new(9.0, 9.0, 9.0));
        assert_eq!(edit.coordinate(3), Point3d::new(9.0, 9.0, 9.0));
    }

    #[test]
    fn test_selection_range_checked() {
        let mut edit = EditMesh::new(make_polyline(4)).unwrap();
        assert!(edit.select(3).is_ok());
        assert!(edit.select(4).is_err());
        assert!(edit
            .set_selection(VertexSelection::from_indices([0, 10]))
            .is_err());
        assert_eq!(edit.selected_vertices().len(), 1);
        edit.select_all();
        assert_eq!(edit.selected_vertices().len(), 4);
        edit.deselect_all();
        assert!(edit.selected_vertices().is_empty());
    }

    #[test]
    fn test_invalid_mesh_rejected() {
        let mut mesh = make_polyline(3);
        mesh.add_edge([1, 7]);
        assert!(EditMesh::new(mesh).is_err());
    }

    #[test]
    fn test_merge_refreshes_adjacency_and_selection() {
        let mut edit = EditMesh::new(make_polyline(4)).unwrap();
        edit.set_coordinate(1, Point3d::new(0.0, 0.0, 0.0));
        edit.select_all();
        let all = edit.selected_vertices().clone();
        let report = edit.merge_coincident(&all, 1e-4).unwrap();

        assert_eq!(report.removed, 1);
        assert_eq!(edit.vertex_count(), 3);
        assert_eq!(edit.neighbors(0), &[1]);
        assert_eq!(edit.neighbors(1), &[0, 2]);
        assert_eq!(
            edit.selected_vertices().iter().collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }
}
