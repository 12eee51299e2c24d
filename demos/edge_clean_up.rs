//! Edge clean-up CLI
//!
//! Usage: edge_clean_up <INPUT> <OUTPUT> [--tolerance <PERCENT>] [--select <INDICES>]
//!
//! Reads an OBJ mesh, removes redundant vertices along the selected edge
//! path or loop and writes the result.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use itertools::Itertools;

use edgeclean_core::{EditMesh, VertexSelection, DEFAULT_MERGE_DISTANCE};
use edgeclean_simplification::EdgeCleanUp;

#[derive(Parser)]
#[command(name = "edge_clean_up")]
#[command(author, version, about = "Remove redundant vertices along an edge loop", long_about = None)]
struct Cli {
    /// Input mesh file
    input: PathBuf,

    /// Output mesh file
    output: PathBuf,

    /// Angle tolerance in percent (0 to 100)
    #[arg(short, long, default_value_t = 1.0)]
    tolerance: f64,

    /// Distance within which vertices are merged after the clean-up
    #[arg(long, default_value_t = DEFAULT_MERGE_DISTANCE)]
    merge_distance: f64,

    /// Vertices to clean up, as 0-based indices and ranges (e.g. "3,5-9")
    #[arg(short, long, conflicts_with = "select_wire")]
    select: Option<String>,

    /// Select every vertex used by a wire edge (OBJ `l` statement)
    #[arg(long)]
    select_wire: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mesh = edgeclean_io::read_mesh(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let original_count = mesh.vertex_count();

    let selection = if let Some(list) = &cli.select {
        parse_selection(list)?
    } else if cli.select_wire {
        mesh.edges.iter().flatten().copied().collect()
    } else {
        VertexSelection::all(mesh.vertex_count())
    };

    let mut edit = EditMesh::new(mesh).context("input mesh is invalid")?;
    edit.set_selection(selection)
        .context("selection does not fit the mesh")?;

    let cleaner = EdgeCleanUp::with_params(cli.tolerance, cli.merge_distance);
    let outcome = cleaner.apply(&mut edit).context("edge clean-up failed")?;

    let report = &outcome.report;
    println!(
        "{} path of {} vertices, tolerance {}% (ratio tolerance {})",
        if report.closed() { "Closed" } else { "Open" },
        report.ordered.len(),
        cli.tolerance,
        report.tolerance
    );
    if report.redundant.is_empty() {
        println!("No redundant vertices found");
    } else {
        println!(
            "Redundant vertices: {}",
            report.redundant.iter().join(", ")
        );
    }
    println!(
        "Vertices: {} -> {} ({} removed)",
        original_count,
        edit.mesh().vertex_count(),
        outcome.merge.removed
    );

    edgeclean_io::write_mesh(edit.mesh(), &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!("Saved to {}", cli.output.display());

    Ok(())
}

/// Parse "3,5-9" into {3, 5, 6, 7, 8, 9}
fn parse_selection(list: &str) -> anyhow::Result<VertexSelection> {
    let mut selection = VertexSelection::new();
    for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((start, end)) => {
                let start: usize = start
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid range start in '{}'", part))?;
                let end: usize = end
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid range end in '{}'", part))?;
                if end < start {
                    bail!("range '{}' is reversed", part);
                }
                selection.extend(start..=end);
            }
            None => {
                let index: usize = part
                    .parse()
                    .with_context(|| format!("invalid vertex index '{}'", part))?;
                selection.insert(index);
            }
        }
    }
    if selection.is_empty() {
        bail!("selection '{}' names no vertices", list);
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        let selection = parse_selection("3, 5-9,1").unwrap();
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 3, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_parse_selection_errors() {
        assert!(parse_selection("").is_err());
        assert!(parse_selection("a").is_err());
        assert!(parse_selection("9-5").is_err());
        assert!(parse_selection("-3").is_err());
    }
}
