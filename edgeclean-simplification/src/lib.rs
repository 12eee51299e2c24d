//! Edge loop clean-up algorithms
//!
//! This crate removes vertices that do not contribute to the shape of a
//! selected edge path or loop:
//! - Ordering an unordered selection into a path or loop
//! - Directional ratio signatures of edges
//! - Detection of redundant vertices along the path
//! - Collapsing redundant vertices onto their holding vertices

pub mod ratio;
pub mod loop_order;
pub mod redundancy;
pub mod collapse;
pub mod cleanup;

pub use ratio::*;
pub use loop_order::*;
pub use redundancy::*;
pub use collapse::*;
pub use cleanup::*;

use edgeclean_core::{MeshGraph, Result, VertexSelection};

/// Clean up redundant vertices along a selected path or loop
pub trait LoopCleaner {
    /// Move the redundant vertices of `selection` onto their holding vertices
    fn clean_loop<G: MeshGraph + ?Sized>(
        &self,
        graph: &mut G,
        selection: &VertexSelection,
    ) -> Result<CleanUpReport>;
}
