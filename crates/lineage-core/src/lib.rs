//! Core types and utilities for the lineage layout engine.
//!
//! This crate provides the foundational types used across the other
//! lineage-engine crates:
//! - Sprite identity and descriptor types (the raw input records)
//! - Geometry types (points, viewports, layout measures)
//! - Error types
//! - The display-name deduplication utility

pub mod descriptor;
pub mod errors;
pub mod geometry;
pub mod naming;

pub use descriptor::*;
pub use errors::*;
pub use geometry::*;
pub use naming::*;
