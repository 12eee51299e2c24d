//! Detection of redundant vertices along an ordered path or loop
//!
//! A vertex is redundant when the edge leaving it has the same ratio
//! signature as the edge arriving at it, i.e. the path keeps its direction
//! through the vertex and the vertex does not contribute to the shape.

use crate::loop_order::OrderedLoop;
use crate::ratio::RatioSignature;
use edgeclean_core::MeshGraph;
use serde::{Deserialize, Serialize};

/// Positions of an [`OrderedLoop`] flagged as redundant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedundantSet {
    mask: Vec<bool>,
}

impl RedundantSet {
    /// A set over a loop of `len` vertices with nothing flagged
    pub fn empty(len: usize) -> Self {
        Self {
            mask: vec![false; len],
        }
    }

    pub(crate) fn from_mask(mask: Vec<bool>) -> Self {
        Self { mask }
    }

    /// Whether the vertex at `position` is redundant
    pub fn contains(&self, position: usize) -> bool {
        self.mask.get(position).copied().unwrap_or(false)
    }

    /// Number of redundant vertices
    pub fn count(&self) -> usize {
        self.mask.iter().filter(|&&r| r).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.mask.iter().any(|&r| r)
    }

    /// Redundant positions in ascending order
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, &r)| r.then_some(i))
    }

    /// Redundant vertex indices in path order
    pub fn vertices<'a>(&'a self, ordered: &'a OrderedLoop) -> impl Iterator<Item = usize> + 'a {
        self.positions().map(move |p| ordered.vertex(p))
    }

    fn mark(&mut self, position: usize) {
        self.mask[position] = true;
    }
}

/// Flag every vertex of `ordered` whose outgoing edge matches its incoming
/// edge within `tolerance`.
///
/// Open paths are walked from the first vertex to the end, so the two
/// endpoints are never flagged. Closed loops are walked once around starting
/// at the next-to-last vertex, which lets the vertices at the seam be
/// compared like any other.
pub fn find_redundant<G: MeshGraph + ?Sized>(
    graph: &G,
    ordered: &OrderedLoop,
    tolerance: f64,
) -> RedundantSet {
    let n = ordered.len();
    let mut redundant = RedundantSet::empty(n);
    if n < 3 {
        return redundant;
    }

    let signature_at = |position: usize| -> RatioSignature {
        let a = graph.coordinate(ordered.vertex(position));
        let b = graph.coordinate(ordered.vertex((position + 1) % n));
        RatioSignature::between(&a, &b)
    };

    let (start, steps) = if ordered.closed { (n - 2, n + 1) } else { (0, n - 1) };

    // The first step compares the seed edge with itself and starts the run at 1
    let mut last = signature_at(start);
    let mut run = 0usize;

    for step in 0..steps {
        let position = (start + step) % n;
        let current = signature_at(position);

        if current.matches(&last, tolerance) {
            run += 1;
            if run >= 2 {
                redundant.mark(position);
            }
        } else {
            run = 1;
        }

        last = current;
    }

    log::debug!(
        "{} of {} vertices redundant ({} path, tolerance {:e})",
        redundant.count(),
        n,
        if ordered.closed { "closed" } else { "open" },
        tolerance
    );

    redundant
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgeclean_core::{EditMesh, Point3d, TriangleMesh};

    fn make_path(points: &[(f64, f64, f64)], closed: bool) -> (EditMesh, OrderedLoop) {
        let n = points.len();
        let vertices = points.iter().map(|&(x, y, z)| Point3d::new(x, y, z)).collect();
        let mut edges: Vec<[usize; 2]> = (1..n).map(|i| [i - 1, i]).collect();
        if closed {
            edges.push([n - 1, 0]);
        }
        let mesh = EditMesh::new(TriangleMesh::from_vertices_and_edges(vertices, edges)).unwrap();
        let ordered = OrderedLoop {
            vertices: (0..n).collect(),
            closed,
        };
        (mesh, ordered)
    }

    fn redundant_positions(points: &[(f64, f64, f64)], closed: bool, tolerance: f64) -> Vec<usize> {
        let (mesh, ordered) = make_path(points, closed);
        find_redundant(&mesh, &ordered, tolerance).positions().collect()
    }

    #[test]
    fn test_collinear_open_path() {
        let points: Vec<_> = (0..5).map(|i| (i as f64, 0.0, 0.0)).collect();
        assert_eq!(redundant_positions(&points, false, 0.01), vec![1, 2, 3]);
    }

    #[test]
    fn test_uneven_spacing_is_still_redundant() {
        let points = [(0.0, 0.0, 0.0), (0.5, 1.0, 0.0), (2.0, 4.0, 0.0), (2.5, 5.0, 0.0)];
        assert_eq!(redundant_positions(&points, false, 0.0), vec![1, 2]);
    }

    #[test]
    fn test_corner_is_kept() {
        let points = [
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (2.0, 1.0, 0.0),
            (2.0, 2.0, 0.0),
        ];
        assert_eq!(redundant_positions(&points, false, 0.01), vec![1, 3]);
    }

    #[test]
    fn test_closed_square_with_midpoints() {
        let points = [
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (2.0, 1.0, 0.0),
            (2.0, 2.0, 0.0),
            (1.0, 2.0, 0.0),
            (0.0, 2.0, 0.0),
            (0.0, 1.0, 0.0),
        ];
        assert_eq!(redundant_positions(&points, true, 0.01), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_closed_seam_vertices_are_compared() {
        // Last and first vertex sit in the middle of straight sides
        let points = [
            (1.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (2.0, 2.0, 0.0),
            (0.0, 2.0, 0.0),
            (0.0, 0.0, 0.0),
        ];
        assert_eq!(redundant_positions(&points, true, 0.01), vec![0]);
    }

    #[test]
    fn test_short_paths() {
        assert!(redundant_positions(&[(0.0, 0.0, 0.0)], false, 1.0).is_empty());
        assert!(redundant_positions(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)], false, 1.0).is_empty());
    }

    #[test]
    fn test_tolerance_widens_matches() {
        let points = [(0.0, 0.0, 0.0), (1.0, 1.0, 0.0), (2.0, 2.1, 0.0), (3.0, 3.2, 0.0)];
        assert_eq!(redundant_positions(&points, false, 1e-9), vec![2]);
        assert_eq!(redundant_positions(&points, false, 0.2), vec![1, 2]);
    }

    #[test]
    fn test_vertices_follow_path_order() {
        let points: Vec<_> = (0..4).map(|i| (0.0, 0.0, i as f64)).collect();
        let (mesh, ordered) = make_path(&points, false);
        let redundant = find_redundant(&mesh, &ordered, 0.0);
        assert_eq!(redundant.vertices(&ordered).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(redundant.count(), 2);
        assert!(redundant.contains(1));
        assert!(!redundant.contains(3));
    }
}
