//! Point types and related functionality

use nalgebra::Point3;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// Per-axis absolute coordinate differences between two points
#[inline]
pub fn axis_deltas(a: &Point3d, b: &Point3d) -> [f64; 3] {
    [
        (a.x - b.x).abs(),
        (a.y - b.y).abs(),
        (a.z - b.z).abs(),
    ]
}

/// Manhattan (L1) distance between two points
#[inline]
pub fn manhattan_distance(a: &Point3d, b: &Point3d) -> f64 {
    axis_deltas(a, b).iter().sum()
}
