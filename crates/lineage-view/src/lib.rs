//! Pannable, zoomable viewport model over a lineage layout.
//!
//! [`Viz`] owns a logical coordinate window (the view box) mapped onto the
//! physical viewport, and exposes pan and zoom as pure state transitions.
//! The host wires pointer, wheel, and resize events into these transitions
//! and feeds the resulting state to its renderer; the actual screen to
//! layout coordinate conversion stays with the renderer, injected through
//! [`PointMapper`].

mod mapping;
mod viz;

pub use mapping::PointMapper;
pub use viz::{PointerTarget, ScreenInfo, ViewBox, Viz, MIN_ZOOM, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
