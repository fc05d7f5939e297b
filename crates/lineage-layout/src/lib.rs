//! Generational tree layout for sprite lineage graphs.
//!
//! This crate turns a flat list of sprite descriptors into a positioned
//! tree: nodes are keyed by identity, grouped into breadth-first
//! generations, and assigned center points so that siblings and cousins
//! never overlap horizontally.
//!
//! # Architecture
//!
//! 1. **Arena building**: every descriptor becomes a [`LayoutNode`] hanging
//!    off its parent (or the synthetic root when it has none)
//! 2. **Generation collection**: breadth-first traversal splits the tree
//!    into generations of same-parent groups
//! 3. **Frontier placement**: each generation is laid out in a row,
//!    expanding left and right from its median group
//!
//! # Example
//!
//! ```ignore
//! use lineage_core::{Measures, SpriteDescriptor, Viewport};
//! use lineage_layout::compute_layout;
//!
//! let sprites = fetch_sprites()?;
//! let layout = compute_layout(&viewport, &Measures::default(), Some(&sprites))?;
//!
//! for node in layout.expect("sprites were present").nodes() {
//!     println!("{}: ({}, {})", node.id, node.x, node.y);
//! }
//! ```

mod compute;
mod frontier;
mod generations;
mod tree;

pub use compute::compute_layout;
pub use generations::{collect_generations, Generation, Group};
pub use tree::{Layout, LayoutNode};
