//! Core data structures and traits for edgeclean
//!
//! This crate provides the host side of an edge clean-up: a triangle mesh
//! with wire edges, vertex adjacency, vertex selections, the [`MeshGraph`]
//! trait the clean-up algorithms run against, and coincident vertex merging.

pub mod point;
pub mod mesh;
pub mod adjacency;
pub mod selection;
pub mod traits;
pub mod edit;
pub mod merge;
pub mod error;

pub use point::*;
pub use mesh::*;
pub use adjacency::*;
pub use selection::*;
pub use traits::*;
pub use edit::*;
pub use merge::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};

/// Common result type for edgeclean operations
pub type Result<T> = std::result::Result<T, Error>;

