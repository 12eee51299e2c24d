//! Basic usage example for edgeclean
//!
//! Builds a subdivided square outline in memory, selects it and removes the
//! vertices that do not contribute to its shape.

use edgeclean_core::{EditMesh, Point3d, TriangleMesh};
use edgeclean_simplification::clean_up;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("edgeclean Example");
    println!("=================");

    // Square of side 4 with a vertex every unit along the outline
    let corners = [
        Point3d::new(0.0, 0.0, 0.0),
        Point3d::new(4.0, 0.0, 0.0),
        Point3d::new(4.0, 4.0, 0.0),
        Point3d::new(0.0, 4.0, 0.0),
    ];
    let mut vertices = Vec::new();
    for side in 0..4 {
        let a = corners[side];
        let b = corners[(side + 1) % 4];
        for k in 0..4 {
            vertices.push(a + (b - a) * (k as f64 / 4.0));
        }
    }
    let n = vertices.len();
    let edges = (0..n).map(|i| [i, (i + 1) % n]).collect();

    let mut edit = EditMesh::new(TriangleMesh::from_vertices_and_edges(vertices, edges))?;
    edit.select_all();
    println!(
        "\nCreated outline with {} vertices and {} edges",
        edit.mesh().vertex_count(),
        edit.mesh().edge_count()
    );

    let outcome = clean_up(&mut edit, 1.0)?;

    println!("\nClean-up:");
    println!("- Closed loop: {}", outcome.report.closed());
    println!("- Redundant vertices: {:?}", outcome.report.redundant);
    println!("- Vertices removed by merge: {}", outcome.merge.removed);

    println!(
        "\nResult has {} vertices and {} edges:",
        edit.mesh().vertex_count(),
        edit.mesh().edge_count()
    );
    for v in &edit.mesh().vertices {
        println!("  ({}, {}, {})", v.x, v.y, v.z);
    }

    Ok(())
}
