//! Error types for the lineage engine.

use crate::descriptor::SpriteId;
use thiserror::Error;

/// Top-level error type for the lineage engine.
#[derive(Debug, Error)]
pub enum LineageError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors during layout computation.
///
/// Both variants are invariant violations: breadth-first traversal places a
/// generation only after its parents, so a well-formed layout can never
/// trip them.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("group without a parent reference in generation {generation}")]
    DetachedGroup { generation: usize },

    #[error("parent {parent} missing from layout while placing generation {generation}")]
    MissingGroupParent { parent: SpriteId, generation: usize },
}
