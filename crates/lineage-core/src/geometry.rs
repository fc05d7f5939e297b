//! Geometry value types shared by the layout and viewport crates.

use glam::DVec2;

/// A point in layout (or screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get the point as a vector.
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// Physical pixels available for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Layout constants for node boxes and the spacing between them.
///
/// `level_height` is derived: `node_height + 2 * delta_height`. Build a
/// `Measures` through [`Measures::new`] (or [`Default`]) so the derived
/// field stays consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measures {
    /// Width of a node box.
    pub node_width: f64,
    /// Height of a node box.
    pub node_height: f64,
    /// Horizontal half-gap between neighboring nodes.
    pub delta_width: f64,
    /// Vertical half-gap between generations.
    pub delta_height: f64,
    /// Vertical distance between consecutive generation rows.
    pub level_height: f64,
}

impl Measures {
    pub fn new(node_width: f64, node_height: f64, delta_width: f64, delta_height: f64) -> Self {
        Self {
            node_width,
            node_height,
            delta_width,
            delta_height,
            level_height: node_height + 2.0 * delta_height,
        }
    }
}

impl Default for Measures {
    fn default() -> Self {
        Self::new(100.0, 150.0, 25.0, 15.0)
    }
}
