//! Directional ratio signatures of edges
//!
//! An edge's signature is the ratio of its extent along each axis to its
//! extent along the next axis (cyclically). Two edges pointing the same way
//! have the same signature regardless of their length, which makes it a
//! cheap "same direction" test for vertices along a path.

use edgeclean_core::{axis_deltas, Point3d};
use serde::{Deserialize, Serialize};

/// How a single ratio of a signature was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioKind {
    /// A true division of two axis extents.
    Divided,
    /// The denominator extent was zero; the ratio holds the sentinel 0.
    ZeroFallback,
}

/// Ratios `[d2/d0, d0/d1, d1/d2]` of the absolute per-axis extents of an
/// edge, together with how each was obtained.
///
/// A zero-denominator sentinel never compares equal to a true ratio of 0,
/// since [`RatioSignature::matches`] also compares kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioSignature {
    pub ratios: [f64; 3],
    pub kinds: [RatioKind; 3],
}

impl RatioSignature {
    /// Signature of the edge `a -> b`
    pub fn between(a: &Point3d, b: &Point3d) -> Self {
        let d = axis_deltas(a, b);
        let mut ratios = [0.0; 3];
        let mut kinds = [RatioKind::ZeroFallback; 3];

        // slot j covers offset k = j - 1 in {-1, 0, 1}
        for j in 0..3 {
            let num = d[(j + 2) % 3];
            let den = d[j];
            if den != 0.0 {
                ratios[j] = num / den;
                kinds[j] = RatioKind::Divided;
            }
        }

        Self { ratios, kinds }
    }

    /// Whether every ratio is within `tolerance` of `other`'s and every kind
    /// is the same.
    pub fn matches(&self, other: &Self, tolerance: f64) -> bool {
        self.kinds == other.kinds
            && self
                .ratios
                .iter()
                .zip(&other.ratios)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}
