//! Ordering an unordered vertex selection into a path or loop
//!
//! A selection is usable for an edge clean-up only if it forms a single
//! simple path or cycle in the mesh: every selected vertex has one (path
//! end) or two (interior / loop) selected neighbors. The ordering walks the
//! selection from its lowest-index vertex in both directions and stitches the
//! two walks together, so an open path comes out end to end no matter where
//! the seed sits on it.

use edgeclean_core::{Error, MeshGraph, Result, VertexSelection};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::iter;

/// Selected vertices in path order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedLoop {
    /// Vertex indices; consecutive entries share an edge
    pub vertices: Vec<usize>,
    /// Whether the last vertex connects back to the first
    pub closed: bool,
}

impl OrderedLoop {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at `position`
    pub fn vertex(&self, position: usize) -> usize {
        self.vertices[position]
    }

    /// Position of the vertex following `position`, wrapping for closed loops
    pub fn next_position(&self, position: usize) -> Option<usize> {
        let n = self.len();
        if position + 1 < n {
            Some(position + 1)
        } else if self.closed {
            Some(0)
        } else {
            None
        }
    }
}

/// Arrange `selection` into a single path or loop following `graph`'s edges.
///
/// Fails with [`Error::EmptySelection`] for an empty selection,
/// [`Error::MalformedSelection`] when a selected vertex has zero or more than
/// two selected neighbors, and [`Error::DisconnectedSelection`] when the
/// selection consists of more than one path or loop.
pub fn order_selection<G: MeshGraph + ?Sized>(
    graph: &G,
    selection: &VertexSelection,
) -> Result<OrderedLoop> {
    let seed = selection.first().ok_or(Error::EmptySelection)?;
    if let Some(v) = selection.last().filter(|&v| v >= graph.vertex_count()) {
        return Err(Error::InvalidData(format!(
            "Selected vertex {} is out of range for a graph with {} vertices",
            v,
            graph.vertex_count()
        )));
    }

    if selection.len() == 1 {
        return Ok(OrderedLoop {
            vertices: vec![seed],
            closed: false,
        });
    }

    for v in selection.iter() {
        let count = selected_neighbors(graph, selection, v).count();
        if !(1..=2).contains(&count) {
            return Err(Error::MalformedSelection {
                vertex: v,
                selected_neighbors: count,
            });
        }
    }

    let mut placed: HashSet<usize> = HashSet::with_capacity(selection.len());
    placed.insert(seed);
    let forward = walk(graph, selection, seed, &mut placed);
    // Only an open path seeded in its interior has anything left on this side
    let backward = walk(graph, selection, seed, &mut placed);

    let vertices: Vec<usize> = backward
        .into_iter()
        .rev()
        .chain(iter::once(seed))
        .chain(forward)
        .collect();

    if vertices.len() != selection.len() {
        return Err(Error::DisconnectedSelection {
            reached: vertices.len(),
            selected: selection.len(),
        });
    }

    let closed = vertices.len() >= 3 && graph.are_adjacent(vertices[0], vertices[vertices.len() - 1]);

    Ok(OrderedLoop { vertices, closed })
}

/// Neighbors of `vertex` that are part of the selection
fn selected_neighbors<'a, G: MeshGraph + ?Sized>(
    graph: &'a G,
    selection: &'a VertexSelection,
    vertex: usize,
) -> impl Iterator<Item = usize> + 'a {
    graph
        .neighbors(vertex)
        .iter()
        .copied()
        .filter(move |&u| selection.contains(u))
}

/// Follow unplaced selected neighbors from `start` until none is left.
fn walk<G: MeshGraph + ?Sized>(
    graph: &G,
    selection: &VertexSelection,
    start: usize,
    placed: &mut HashSet<usize>,
) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = start;
    loop {
        let next = selected_neighbors(graph, selection, current).find(|v| !placed.contains(v));
        match next {
            Some(next) => {
                placed.insert(next);
                path.push(next);
                current = next;
            }
            None => break,
        }
    }
    path
}
