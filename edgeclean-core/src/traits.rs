//! Core traits for edgeclean

use crate::point::Point3d;

/// Read/write access to a vertex graph embedded in 3D.
///
/// This is everything the clean-up algorithms need from a host mesh:
/// adjacency for ordering a selection and coordinates for measuring and
/// relocating vertices. Vertex identities are dense indices in
/// `0..vertex_count()`.
pub trait MeshGraph {
    /// Number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Vertices sharing an edge with `vertex`, in ascending order
    fn neighbors(&self, vertex: usize) -> &[usize];

    /// Position of `vertex`
    fn coordinate(&self, vertex: usize) -> Point3d;

    /// Move `vertex` to `position`
    fn set_coordinate(&mut self, vertex: usize, position: Point3d);

    /// Whether `a` and `b` share an edge
    fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }
}
