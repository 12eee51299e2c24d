//! Moving redundant vertices onto their holding vertices
//!
//! Redundant vertices are not deleted here. Each one is moved onto the
//! nearest non-redundant ("holding") vertex before or after it along the
//! path, which leaves it coincident with that vertex so a subsequent
//! coincident merge removes it without changing the shape of the path.

use crate::loop_order::OrderedLoop;
use crate::redundancy::RedundantSet;
use edgeclean_core::{manhattan_distance, Error, MeshGraph, Point3d, Result};
use serde::{Deserialize, Serialize};

/// A planned move of a redundant vertex onto a holding vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Relocation {
    /// The redundant vertex being moved
    pub vertex: usize,
    /// The holding vertex it is moved onto
    pub holding: usize,
    /// The holding vertex's position, which becomes the vertex's position
    pub position: Point3d,
}

/// Nearest non-redundant position before and after every position,
/// wrapping around closed loops. Two linear passes over the mask.
struct HoldingTable {
    before: Vec<Option<usize>>,
    after: Vec<Option<usize>>,
}

impl HoldingTable {
    fn new(ordered: &OrderedLoop, redundant: &RedundantSet) -> Self {
        let n = ordered.len();
        let holding = |p: &usize| !redundant.contains(*p);
        let mut before = vec![None; n];
        let mut after = vec![None; n];

        // On a closed loop the scan enters position 0 from the last holding
        // vertex, and position n-1 from the first
        let mut last = if ordered.closed { (0..n).rev().find(holding) } else { None };
        for (p, slot) in before.iter_mut().enumerate() {
            *slot = last;
            if holding(&p) {
                last = Some(p);
            }
        }

        let mut last = if ordered.closed { (0..n).find(holding) } else { None };
        for (p, slot) in after.iter_mut().enumerate().rev() {
            *slot = last;
            if holding(&p) {
                last = Some(p);
            }
        }

        Self { before, after }
    }
}

/// Work out where every redundant vertex goes, without touching the graph.
///
/// Of the two holding vertices the one closer in Manhattan distance wins,
/// the one before on a tie. Fails with [`Error::NoHoldingVertex`] when a
/// closed loop has no non-redundant vertex at all.
pub fn plan_relocations<G: MeshGraph + ?Sized>(
    graph: &G,
    ordered: &OrderedLoop,
    redundant: &RedundantSet,
) -> Result<Vec<Relocation>> {
    let table = HoldingTable::new(ordered, redundant);
    let mut relocations = Vec::with_capacity(redundant.count());

    for position in redundant.positions() {
        let vertex = ordered.vertex(position);
        let origin = graph.coordinate(vertex);

        let holding = [table.before[position], table.after[position]]
            .into_iter()
            .flatten()
            .map(|p| ordered.vertex(p))
            // min_by keeps the first of equal elements, so "before" wins ties
            .min_by(|&a, &b| {
                let da = manhattan_distance(&origin, &graph.coordinate(a));
                let db = manhattan_distance(&origin, &graph.coordinate(b));
                da.total_cmp(&db)
            })
            .ok_or(Error::NoHoldingVertex { vertex })?;

        relocations.push(Relocation {
            vertex,
            holding,
            position: graph.coordinate(holding),
        });
    }

    Ok(relocations)
}

/// Write planned relocations into the graph
pub fn apply_relocations<G: MeshGraph + ?Sized>(graph: &mut G, relocations: &[Relocation]) {
    for relocation in relocations {
        graph.set_coordinate(relocation.vertex, relocation.position);
    }
}

/// Move every redundant vertex of `ordered` onto its nearest holding vertex.
///
/// Nothing is written unless every redundant vertex has a holding vertex.
pub fn collapse_redundant<G: MeshGraph + ?Sized>(
    graph: &mut G,
    ordered: &OrderedLoop,
    redundant: &RedundantSet,
) -> Result<Vec<Relocation>> {
    let relocations = plan_relocations(&*graph, ordered, redundant)?;
    apply_relocations(graph, &relocations);
    Ok(relocations)
}
