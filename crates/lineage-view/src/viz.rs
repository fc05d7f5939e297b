//! Viewport state and its pure pan/zoom/resize transitions.

use lineage_core::{Measures, Point, Viewport};

/// Once zoomed out past this factor, further zooming out is rejected.
pub const MIN_ZOOM: f64 = 2.0;

/// Wheel-down zoom factor (zooms out).
pub const WHEEL_ZOOM_OUT: f64 = 1.05;

/// Wheel-up zoom factor (zooms in).
pub const WHEEL_ZOOM_IN: f64 = 0.95;

/// Horizontal chrome reserved next to the stage, in pixels.
const STAGE_GUTTER: f64 = 40.0;

/// Vertical chrome (menus, tabs) reserved above the tree, in pixels.
const CHROME_HEIGHT: f64 = 100.0;

/// Raw screen numbers the host reads from its environment.
///
/// Computing the stage's on-screen width (which depends on the host's
/// stage-size mode and fullscreen flag) is the host's business; the
/// viewport model only subtracts it, together with the fixed chrome, from
/// the window dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenInfo {
    pub window_width: f64,
    pub window_height: f64,
    pub stage_width: f64,
}

impl ScreenInfo {
    pub fn new(window_width: f64, window_height: f64, stage_width: f64) -> Self {
        Self {
            window_width,
            window_height,
            stage_width,
        }
    }

    /// Pixels left for drawing the tree once stage and chrome are taken.
    pub fn available(&self) -> Viewport {
        Viewport::new(
            self.window_width - self.stage_width - STAGE_GUTTER,
            self.window_height - CHROME_HEIGHT,
        )
    }
}

/// Logical coordinate window mapped onto the physical viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// What a pointer-down event actually hit.
///
/// Only presses on the drag surface itself start a pan; presses on a
/// child element (a sprite node) are the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Surface,
    Child,
}

/// The full viewport state.
///
/// Every transition is a pure function of the current state and one
/// input, returning the next state; the host swaps the whole value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viz {
    /// Physical pixels available for drawing.
    pub viewport: Viewport,
    /// Logical window rendered onto the viewport.
    pub view_box: ViewBox,
    /// Layout constants, shared with the layout engine.
    pub measures: Measures,
    /// Accumulated zoom factor, 1.0 at rest.
    pub zoom: f64,
    /// True between a surface press and its release.
    pub is_pointer_down: bool,
    /// Layout-space point of the last surface press.
    pub pointer_origin: Option<Point>,
}

impl Viz {
    /// Initial state for the given screen, with default measures.
    pub fn new(screen: &ScreenInfo) -> Self {
        Self::with_measures(screen, Measures::default())
    }

    /// Initial state with explicit measures: unzoomed, view box centered
    /// horizontally on the layout origin.
    pub fn with_measures(screen: &ScreenInfo, measures: Measures) -> Self {
        let viewport = screen.available();
        let view_box = ViewBox {
            x: -viewport.width / 2.0,
            y: 0.0,
            width: viewport.width,
            height: viewport.height,
        };
        Self {
            viewport,
            view_box,
            measures,
            zoom: 1.0,
            is_pointer_down: false,
            pointer_origin: None,
        }
    }

    /// React to a window or stage resize.
    ///
    /// Takes the freshly measured screen, rescales the view box dimensions
    /// by the current zoom, and leaves the pan position, zoom, and pointer
    /// state untouched.
    #[must_use]
    pub fn resized(&self, screen: &ScreenInfo) -> Self {
        let fresh = Self::with_measures(screen, self.measures);
        let mut next = self.clone();
        next.viewport = fresh.viewport;
        next.view_box.width = fresh.view_box.width * self.zoom;
        next.view_box.height = fresh.view_box.height * self.zoom;
        next
    }

    /// Begin a pan on a surface press. `point` is in layout coordinates.
    #[must_use]
    pub fn pointer_down(&self, point: Point, target: PointerTarget) -> Self {
        if target == PointerTarget::Child {
            return self.clone();
        }
        let mut next = self.clone();
        next.is_pointer_down = true;
        next.pointer_origin = Some(point);
        next
    }

    /// Pan with the pointer while it is held down.
    ///
    /// The press origin is deliberately not refreshed: each move measures
    /// the pointer against the original press point and applies the delta
    /// to the current view box, which has already absorbed earlier moves.
    #[must_use]
    pub fn pointer_moved(&self, point: Point) -> Self {
        if !self.is_pointer_down {
            return self.clone();
        }
        let Some(origin) = self.pointer_origin else {
            return self.clone();
        };
        let delta = point.as_dvec2() - origin.as_dvec2();
        let mut next = self.clone();
        next.view_box.x -= delta.x;
        next.view_box.y -= delta.y;
        next
    }

    /// End a pan.
    #[must_use]
    pub fn pointer_up(&self) -> Self {
        if !self.is_pointer_down {
            return self.clone();
        }
        let mut next = self.clone();
        next.is_pointer_down = false;
        next
    }

    /// Scale the view box around `anchor`, which stays fixed in layout
    /// space.
    ///
    /// Zooming further out is rejected once the accumulated zoom passes
    /// [`MIN_ZOOM`]; zooming in is never blocked.
    #[must_use]
    pub fn zoomed(&self, factor: f64, anchor: Point) -> Self {
        if self.zoom > MIN_ZOOM && factor > 1.0 {
            return self.clone();
        }
        let mut next = self.clone();
        next.zoom = self.zoom * factor;
        next.view_box.width = self.view_box.width * factor;
        next.view_box.height = self.view_box.height * factor;
        next.view_box.x = self.view_box.x * factor + anchor.x * (1.0 - factor);
        next.view_box.y = self.view_box.y * factor + anchor.y * (1.0 - factor);
        next
    }

    /// Map a wheel event to a zoom step around the pointer.
    #[must_use]
    pub fn wheel_to_zoom(&self, point: Point, delta_y: f64) -> Self {
        if delta_y > 0.0 {
            self.zoomed(WHEEL_ZOOM_OUT, point)
        } else {
            self.zoomed(WHEEL_ZOOM_IN, point)
        }
    }
}
