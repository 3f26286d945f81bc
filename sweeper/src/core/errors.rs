//! Validation failures raised by the draw engine.

use thiserror::Error;

/// Input collection named in an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Entrants,
    Picks,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entrants => f.write_str("entrants"),
            Self::Picks => f.write_str("picks"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("{collection} must not contain blank entries, found one at position {position}")]
    BlankEntry {
        collection: Collection,
        /// 1-based position in the input.
        position: usize,
    },

    #[error("entrants must be unique but found duplicates: {}", .0.join(", "))]
    DuplicateEntrants(Vec<String>),

    #[error("picks must be unique but found duplicates: {}", .0.join(", "))]
    DuplicatePicks(Vec<String>),

    #[error("there are not enough picks ({picks}) to give all entrants ({entrants}) a pick")]
    InsufficientPicks { picks: usize, entrants: usize },

    #[error("draw order must be one of 'entrants', 'picks', or 'shuffle', got '{0}'")]
    InvalidOrder(String),
}
