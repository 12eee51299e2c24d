//! Error types for edgeclean

use thiserror::Error;

/// Main error type for edgeclean operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Selection is empty")]
    EmptySelection,

    #[error("Malformed selection: vertex {vertex} has {selected_neighbors} selected neighbors (expected 1 or 2)")]
    MalformedSelection {
        vertex: usize,
        selected_neighbors: usize,
    },

    #[error("Malformed selection: only {reached} of {selected} selected vertices form a connected path")]
    DisconnectedSelection { reached: usize, selected: usize },

    #[error("No holding vertex left for redundant vertex {vertex}: every vertex of the loop is redundant")]
    NoHoldingVertex { vertex: usize },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    /// True for selections that are not a single simple path or loop.
    pub fn is_malformed_selection(&self) -> bool {
        matches!(
            self,
            Error::MalformedSelection { .. } | Error::DisconnectedSelection { .. }
        )
    }
}

/// Result type alias for edgeclean operations
pub type Result<T> = std::result::Result<T, Error>;
