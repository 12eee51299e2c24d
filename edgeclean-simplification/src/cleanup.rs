//! Edge clean-up pipeline
//!
//! Orders the selection into a path or loop, finds redundant vertices along
//! it, moves them onto their holding vertices and, when run against an
//! [`EditMesh`], merges the now coincident vertices away.

use crate::collapse::{apply_relocations, plan_relocations, Relocation};
use crate::loop_order::{order_selection, OrderedLoop};
use crate::redundancy::find_redundant;
use crate::LoopCleaner;
use edgeclean_core::{
    EditMesh, Error, MergeReport, MeshGraph, Result, VertexSelection, DEFAULT_MERGE_DISTANCE,
};
use serde::{Deserialize, Serialize};

/// Map a user-facing tolerance percentage to the ratio tolerance.
///
/// The square makes small percentages very strict: 1% allows ratios to
/// differ by 0.01, 10% by 1.
pub fn tolerance_from_percent(percent: f64) -> f64 {
    (percent * 0.1).powi(2)
}

/// What an edge clean-up did to the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanUpReport {
    /// The selection in path order
    pub ordered: OrderedLoop,
    /// Redundant vertices in path order
    pub redundant: Vec<usize>,
    /// Coordinates written, one per redundant vertex
    pub relocations: Vec<Relocation>,
    /// Ratio tolerance used
    pub tolerance: f64,
}

impl CleanUpReport {
    /// Whether the selection forms a closed loop
    pub fn closed(&self) -> bool {
        self.ordered.closed
    }
}

/// Result of a full clean-up on an [`EditMesh`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanUpOutcome {
    pub report: CleanUpReport,
    pub merge: MergeReport,
}

/// Redundant vertex clean-up along a selected edge path or loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCleanUp {
    /// Angle tolerance in percent, 0 to 100
    pub tolerance_percent: f64,
    /// Distance within which vertices are merged afterwards
    pub merge_distance: f64,
}

impl Default for EdgeCleanUp {
    fn default() -> Self {
        Self {
            tolerance_percent: 1.0,
            merge_distance: DEFAULT_MERGE_DISTANCE,
        }
    }
}

impl EdgeCleanUp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(tolerance_percent: f64, merge_distance: f64) -> Self {
        Self {
            tolerance_percent,
            merge_distance,
        }
    }

    /// Ratio tolerance derived from [`Self::tolerance_percent`]
    pub fn tolerance(&self) -> f64 {
        tolerance_from_percent(self.tolerance_percent)
    }

    fn validate(&self) -> Result<()> {
        if !self.tolerance_percent.is_finite() || !(0.0..=100.0).contains(&self.tolerance_percent)
        {
            return Err(Error::InvalidData(format!(
                "Tolerance must be between 0 and 100 percent (got {})",
                self.tolerance_percent
            )));
        }
        if !self.merge_distance.is_finite() || self.merge_distance < 0.0 {
            return Err(Error::InvalidData(format!(
                "Merge distance must be a finite, non-negative number (got {})",
                self.merge_distance
            )));
        }
        Ok(())
    }

    /// Move the redundant vertices of `selection` onto their holding
    /// vertices. Vertices are not removed; see [`Self::apply`].
    ///
    /// Either every relocation is written or, on error, none is.
    pub fn run<G: MeshGraph + ?Sized>(
        &self,
        graph: &mut G,
        selection: &VertexSelection,
    ) -> Result<CleanUpReport> {
        let result = self.try_run(graph, selection);
        if let Err(e) = &result {
            log::error!("Edge clean-up failed: {}", e);
        }
        result
    }

    fn try_run<G: MeshGraph + ?Sized>(
        &self,
        graph: &mut G,
        selection: &VertexSelection,
    ) -> Result<CleanUpReport> {
        self.validate()?;
        let tolerance = self.tolerance();

        let ordered = order_selection(&*graph, selection)?;
        log::debug!(
            "ordered {} selected vertices into a {} path",
            ordered.len(),
            if ordered.closed { "closed" } else { "open" }
        );

        let redundant = find_redundant(&*graph, &ordered, tolerance);
        let relocations = plan_relocations(&*graph, &ordered, &redundant)?;
        apply_relocations(graph, &relocations);

        log::info!(
            "edge clean-up moved {} of {} vertices onto holding vertices",
            relocations.len(),
            ordered.len()
        );

        Ok(CleanUpReport {
            redundant: redundant.vertices(&ordered).collect(),
            ordered,
            relocations,
            tolerance,
        })
    }

    /// Clean up the current selection of `edit` and merge the redundant
    /// vertices into their holding vertices.
    ///
    /// The merge runs over the original selection; surviving selected
    /// vertices stay selected.
    pub fn apply(&self, edit: &mut EditMesh) -> Result<CleanUpOutcome> {
        let selection = edit.selected_vertices().clone();
        let report = self.run(edit, &selection)?;
        let merge = edit.merge_coincident(&selection, self.merge_distance)?;
        log::info!(
            "removed {} vertices, {} remain",
            merge.removed,
            edit.vertex_count()
        );
        Ok(CleanUpOutcome { report, merge })
    }
}

impl LoopCleaner for EdgeCleanUp {
    fn clean_loop<G: MeshGraph + ?Sized>(
        &self,
        graph: &mut G,
        selection: &VertexSelection,
    ) -> Result<CleanUpReport> {
        self.run(graph, selection)
    }
}

/// Clean up the current selection of `edit` with the default merge distance.
pub fn clean_up(edit: &mut EditMesh, tolerance_percent: f64) -> Result<CleanUpOutcome> {
    EdgeCleanUp::with_params(tolerance_percent, DEFAULT_MERGE_DISTANCE).apply(edit)
}
