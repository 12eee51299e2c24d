//! Coincident vertex merging
//!
//! Merges vertices that share (nearly) the same position into one, remapping
//! faces and wire edges and compacting the vertex array. This is the step
//! that actually deletes vertices after an edge clean-up has moved them onto
//! their neighbors.

use crate::mesh::TriangleMesh;
use crate::point::Point3d;
use crate::selection::VertexSelection;
use crate::{Error, Result};
use rstar::primitives::GeomWithData;
use rstar::RTree;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default merge distance used after an edge clean-up
pub const DEFAULT_MERGE_DISTANCE: f64 = 1e-4;

/// Outcome of a merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Number of vertices removed from the mesh
    pub removed: usize,
    /// New index of every old vertex. Merged vertices map to the new index
    /// of the vertex they were merged into.
    pub old_to_new: Vec<usize>,
}

/// Merge vertices of `vertices` lying within `distance` of each other.
///
/// Each participating vertex is merged into the lowest-index earlier
/// participant within `distance`; vertices outside `vertices` are never
/// touched. Faces that lose a distinct corner and edges that collapse to a
/// point are removed, as are duplicates created by the merge.
///
/// # Complexity
///
/// O(k log k) in the number of participating vertices.
pub fn merge_coincident(
    mesh: &mut TriangleMesh,
    vertices: &VertexSelection,
    distance: f64,
) -> Result<MergeReport> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(Error::InvalidData(format!(
            "Merge distance must be a finite, non-negative number (got {})",
            distance
        )));
    }
    let n = mesh.vertex_count();
    if let Some(v) = vertices.iter().find(|&v| v >= n) {
        return Err(Error::InvalidData(format!(
            "Vertex {} is out of range for a mesh with {} vertices",
            v, n
        )));
    }

    let representative = find_representatives(&mesh.vertices, vertices, distance);

    let mut old_to_new = vec![0usize; n];
    let mut new_vertices: Vec<Point3d> = Vec::with_capacity(n);
    for v in 0..n {
        let rep = representative[v];
        if rep == v {
            old_to_new[v] = new_vertices.len();
            new_vertices.push(mesh.vertices[v]);
        } else {
            // representatives always precede the vertices merged into them
            old_to_new[v] = old_to_new[rep];
        }
    }
    let removed = n - new_vertices.len();

    if removed == 0 {
        return Ok(MergeReport { removed, old_to_new });
    }

    let mut seen_faces: HashSet<[usize; 3]> = HashSet::new();
    let mut face_edges: HashSet<(usize, usize)> = HashSet::new();
    let new_faces: Vec<[usize; 3]> = mesh
        .faces
        .iter()
        .map(|f| [old_to_new[f[0]], old_to_new[f[1]], old_to_new[f[2]]])
        .filter(|f| f[0] != f[1] && f[1] != f[2] && f[2] != f[0])
        .filter(|f| {
            let mut key = *f;
            key.sort_unstable();
            seen_faces.insert(key)
        })
        .inspect(|f| {
            for (a, b) in [(f[0], f[1]), (f[1], f[2]), (f[2], f[0])] {
                face_edges.insert((a.min(b), a.max(b)));
            }
        })
        .collect();

    let mut seen_edges: HashSet<(usize, usize)> = HashSet::new();
    let new_edges: Vec<[usize; 2]> = mesh
        .edges
        .iter()
        .map(|e| [old_to_new[e[0]], old_to_new[e[1]]])
        .filter(|e| e[0] != e[1])
        .filter(|e| {
            let key = (e[0].min(e[1]), e[0].max(e[1]));
            !face_edges.contains(&key) && seen_edges.insert(key)
        })
        .collect();

    log::debug!(
        "merged {} coincident vertices ({} faces, {} wire edges remain)",
        removed,
        new_faces.len(),
        new_edges.len()
    );

    mesh.vertices = new_vertices;
    mesh.faces = new_faces;
    mesh.edges = new_edges;

    Ok(MergeReport { removed, old_to_new })
}

/// For every vertex, the vertex it is merged into (itself if it is kept).
///
/// Kept vertices go into an R*-tree, so each lookup only visits the kept
/// vertices near the query point.
fn find_representatives(
    positions: &[Point3d],
    vertices: &VertexSelection,
    distance: f64,
) -> Vec<usize> {
    let mut representative: Vec<usize> = (0..positions.len()).collect();
    let mut kept: RTree<GeomWithData<[f64; 3], usize>> = RTree::new();
    let max_squared = distance * distance;

    for v in vertices.iter() {
        let p = positions[v];
        let query = [p.x, p.y, p.z];
        let target = kept
            .locate_within_distance(query, max_squared)
            .map(|k| k.data)
            .min();
        match target {
            Some(k) => representative[v] = k,
            None => kept.insert(GeomWithData::new(query, v)),
        }
    }

    representative
}
