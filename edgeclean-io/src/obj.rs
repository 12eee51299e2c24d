//! Wavefront OBJ support
//!
//! Reads and writes the subset of OBJ an edge clean-up needs:
//! - `v x y z` vertex positions (extra components such as `w` are ignored)
//! - `f a b c ...` faces with optional `/vt/vn` suffixes, fan-triangulated
//! - `l a b ...` polylines, stored as wire edges
//!
//! Indices are 1-based; negative indices count back from the most recently
//! defined vertex. Comments and all other statements are skipped.

use crate::{MeshReader, MeshWriter};
use edgeclean_core::{Error, Point3d, Result, TriangleMesh};
use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// OBJ reader implementation
pub struct ObjReader;

impl ObjReader {
    /// Parse an OBJ document from any buffered reader
    pub fn parse<R: BufRead>(reader: R) -> Result<TriangleMesh> {
        let mut mesh = TriangleMesh::new();
        let mut skipped = 0usize;

        for (line_index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line_number = line_index + 1;
            let content = line.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let mut parts = content.split_whitespace();
            match parts.next() {
                Some("v") => {
                    let vertex = Self::parse_vertex(parts, line_number)?;
                    mesh.add_vertex(vertex);
                }
                Some("f") => {
                    let corners = Self::parse_indices(parts, mesh.vertex_count(), line_number)?;
                    if corners.len() < 3 {
                        return Err(Self::error(line_number, "face needs at least 3 vertices"));
                    }
                    for (&b, &c) in corners[1..].iter().tuple_windows() {
                        mesh.add_face([corners[0], b, c]);
                    }
                }
                Some("l") => {
                    let points = Self::parse_indices(parts, mesh.vertex_count(), line_number)?;
                    if points.len() < 2 {
                        return Err(Self::error(line_number, "line needs at least 2 vertices"));
                    }
                    for (&a, &b) in points.iter().tuple_windows() {
                        mesh.add_edge([a, b]);
                    }
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            log::debug!("skipped {} unsupported OBJ statements", skipped);
        }

        mesh.validate()?;
        log::info!(
            "read OBJ mesh: {} vertices, {} faces, {} wire edges",
            mesh.vertex_count(),
            mesh.face_count(),
            mesh.edge_count()
        );
        Ok(mesh)
    }

    fn parse_vertex<'a>(
        mut parts: impl Iterator<Item = &'a str>,
        line_number: usize,
    ) -> Result<Point3d> {
        let mut coordinate = [0.0f64; 3];
        for (axis, value) in coordinate.iter_mut().enumerate() {
            let token = parts.next().ok_or_else(|| {
                Self::error(line_number, "vertex needs x, y and z coordinates")
            })?;
            *value = token.parse::<f64>().map_err(|_| {
                Self::error(
                    line_number,
                    &format!("invalid coordinate '{}' for axis {}", token, axis),
                )
            })?;
        }
        Ok(Point3d::new(coordinate[0], coordinate[1], coordinate[2]))
    }

    /// Resolve the vertex references of an `f` or `l` statement to 0-based
    /// indices. Only the position index before the first `/` is used.
    fn parse_indices<'a>(
        parts: impl Iterator<Item = &'a str>,
        vertex_count: usize,
        line_number: usize,
    ) -> Result<Vec<usize>> {
        parts
            .map(|token| {
                let position = token.split('/').next().unwrap_or("");
                let index: i64 = position.parse().map_err(|_| {
                    Self::error(line_number, &format!("invalid vertex index '{}'", token))
                })?;
                Self::resolve_index(index, vertex_count).ok_or_else(|| {
                    Self::error(
                        line_number,
                        &format!(
                            "vertex index {} is out of range ({} vertices defined)",
                            index, vertex_count
                        ),
                    )
                })
            })
            .collect()
    }

    fn resolve_index(index: i64, vertex_count: usize) -> Option<usize> {
        match index {
            0 => None,
            i if i > 0 => Some(i as usize - 1),
            i => vertex_count.checked_sub(i.unsigned_abs() as usize),
        }
    }

    fn error(line_number: usize, message: &str) -> Error {
        Error::InvalidData(format!("OBJ line {}: {}", line_number, message))
    }
}

impl MeshReader for ObjReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }
}

/// OBJ writer implementation
pub struct ObjWriter;

impl ObjWriter {
    /// Write `mesh` as OBJ to any writer.
    ///
    /// Coordinates use Rust's shortest round-trip float formatting, so
    /// reading the output back yields bit-identical positions.
    pub fn write<W: Write>(mesh: &TriangleMesh, writer: &mut W) -> Result<()> {
        writeln!(
            writer,
            "# {} vertices, {} faces, {} wire edges",
            mesh.vertex_count(),
            mesh.face_count(),
            mesh.edge_count()
        )?;

        for v in &mesh.vertices {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for face in &mesh.faces {
            writeln!(writer, "f {}", face.iter().map(|i| i + 1).join(" "))?;
        }
        for edge in &mesh.edges {
            writeln!(writer, "l {} {}", edge[0] + 1, edge[1] + 1)?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl MeshWriter for ObjWriter {
    fn write_mesh<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write(mesh, &mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn parse(content: &str) -> Result<TriangleMesh> {
        ObjReader::parse(Cursor::new(content))
    }

    #[test]
    fn test_read_triangles() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
        assert!(mesh.edges.is_empty());
        assert_eq!(mesh.vertices[1], Point3d::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_quad_is_fan_triangulated() {
        let content = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1/1/1 2/2/1 3//1 4\n";
        let mesh = parse(content).unwrap();
        assert_eq!(mesh.faces, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_polyline_becomes_wire_edges() {
        let content = "v 0 0 0\nv 1 0 0\nv 2 0 0\nv 3 0 0\nl 1 2 3 4\n";
        let mesh = parse(content).unwrap();
        assert_eq!(mesh.edges, vec![[0, 1], [1, 2], [2, 3]]);
    }

    #[test]
    fn test_negative_indices() {
        let content = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\nv 5 5 5\nl -2 -1\n";
        let mesh = parse(content).unwrap();
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
        assert_eq!(mesh.edges, vec![[2, 3]]);
    }

    #[test]
    fn test_comments_and_unknown_statements() {
        let content = "# header\nmtllib a.mtl\no thing\nv 0 0 0 1.0 # w\nv 1 0 0\nvn 0 0 1\ns off\nl 1 2\n";
        let mesh = parse(content).unwrap();
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.edges, vec![[0, 1]]);
    }

    #[test]
    fn test_parse_errors_report_line() {
        let cases = [
            ("v 0 0\n", 1),
            ("v 0 0 0\nv a 0 0\n", 2),
            ("v 0 0 0\nv 1 0 0\n\nl 1\n", 4),
            ("v 0 0 0\nv 1 0 0\nf 1 2\n", 3),
            ("v 0 0 0\nl 1 0\n", 2),
            ("v 0 0 0\nl 1 -2\n", 2),
            ("v 0 0 0\nf 1 x 2\n", 2),
        ];
        for (content, line) in cases {
            match parse(content) {
                Err(Error::InvalidData(message)) => {
                    assert!(
                        message.starts_with(&format!("OBJ line {}:", line)),
                        "unexpected message: {}",
                        message
                    );
                }
                other => panic!("expected a parse error for {:?}, got {:?}", content, other),
            }
        }
    }

    #[test]
    fn test_forward_reference_out_of_range_is_rejected() {
        assert!(matches!(
            parse("v 0 0 0\nv 1 0 0\nl 1 3\n"),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_writer_output() {
        let mut mesh = TriangleMesh::from_vertices_and_faces(
            vec![
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(1.5, 0.0, 0.0),
                Point3d::new(0.0, -2.25, 0.1),
            ],
            vec![[0, 1, 2]],
        );
        mesh.add_edge([2, 0]);

        let mut out = Vec::new();
        ObjWriter::write(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let body: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(
            body,
            vec!["v 0 0 0", "v 1.5 0 0", "v 0 -2.25 0.1", "f 1 2 3", "l 3 1"]
        );
    }

    #[test]
    fn test_file_roundtrip() {
        let temp_file = std::env::temp_dir().join("edgeclean_obj_roundtrip.obj");
        let mesh = TriangleMesh::from_vertices_and_edges(
            vec![
                Point3d::new(0.1, 0.2, 0.3),
                Point3d::new(1.0 / 3.0, 1e-12, -7.0),
                Point3d::new(2.0, 2.0, 2.0),
            ],
            vec![[0, 1], [1, 2]],
        );

        ObjWriter::write_mesh(&mesh, &temp_file).unwrap();
        let loaded = ObjReader::read_mesh(&temp_file).unwrap();
        assert_eq!(loaded, mesh);

        let _ = fs::remove_file(&temp_file);
    }
}
