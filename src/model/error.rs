//! Errors raised when a model lookup cannot be satisfied.

use thiserror::Error;

use super::kind::EntityKind;

/// A model inconsistency.
///
/// Both variants indicate a defect in whatever produced the model; the
/// renderer never recovers from them.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An arena id that points past the end of its arena.
    #[error("dangling {kind} id #{index}")]
    Dangling { kind: EntityKind, index: u32 },

    /// An owner chain that did not reach a module or assembly in time.
    #[error("owner chain of type #{start} exceeds {limit} levels")]
    OwnerDepthExceeded { start: u32, limit: usize },
}

impl ModelError {
    /// Create a dangling-reference error.
    pub fn dangling(kind: EntityKind, index: u32) -> Self {
        Self::Dangling { kind, index }
    }

    /// Create an owner-depth error for the walk that started at `start`.
    pub fn owner_depth(start: u32, limit: usize) -> Self {
        Self::OwnerDepthExceeded { start, limit }
    }
}
