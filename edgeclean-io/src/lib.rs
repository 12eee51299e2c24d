//! I/O operations for meshes
//!
//! This crate reads and writes meshes with wire edges so the edge clean-up
//! can be run on files. Wavefront OBJ is the supported format.

pub mod obj;

pub use obj::{ObjReader, ObjWriter};

use edgeclean_core::{Error, Result, TriangleMesh};
use std::path::Path;

/// Trait for reading meshes from files
pub trait MeshReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh>;
}

/// Trait for writing meshes to files
pub trait MeshWriter {
    fn write_mesh<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()>;
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
}

/// Auto-detect format and read mesh
pub fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("obj") => ObjReader::read_mesh(path),
        _ => Err(Error::UnsupportedFormat(format!(
            "Unsupported mesh format: {:?}",
            path.extension()
        ))),
    }
}

/// Auto-detect format and write mesh
pub fn write_mesh<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("obj") => ObjWriter::write_mesh(mesh, path),
        _ => Err(Error::UnsupportedFormat(format!(
            "Unsupported mesh format: {:?}",
            path.extension()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgeclean_core::Point3d;
    use std::fs;

    #[test]
    fn test_obj_mesh_roundtrip() {
        let temp_file = std::env::temp_dir().join("edgeclean_io_roundtrip.OBJ");

        let mesh = TriangleMesh::from_vertices_and_faces(
            vec![
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(1.0, 0.0, 0.0),
                Point3d::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );

        write_mesh(&mesh, &temp_file).unwrap();
        let loaded = read_mesh(&temp_file).unwrap();
        assert_eq!(loaded, mesh);

        let _ = fs::remove_file(&temp_file);
    }

    #[test]
    fn test_unsupported_format() {
        let mesh = TriangleMesh::new();
        assert!(matches!(
            write_mesh(&mesh, "mesh.ply"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            read_mesh("mesh"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("edgeclean_does_not_exist.obj");
        assert!(matches!(read_mesh(&path), Err(Error::Io(_))));
    }
}
