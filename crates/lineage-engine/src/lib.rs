//! Host-facing facade tying the lineage layout and viewport together.
//!
//! The host UI component owns one [`Engine`] per tree view and calls into
//! it from its lifecycle events:
//!
//! - a sprite-collection update notification → [`Engine::refresh_sprites`]
//! - a window resize → [`Engine::resize`]
//! - pointer and wheel events → [`Engine::pointer_down`],
//!   [`Engine::pointer_moved`], [`Engine::pointer_up`],
//!   [`Engine::wheel_to_zoom`] (or their `_raw` variants when the host
//!   prefers to hand over device coordinates plus its [`PointMapper`])
//!
//! After each call the host re-reads [`Engine::layout`] and
//! [`Engine::viz`] and redraws. The engine keeps the last computed layout
//! as an explicit value, replaced wholesale on every recomputation.

use lineage_core::{assign_unique_names, LineageError, Measures, Point, SpriteDescriptor};
use lineage_layout::{compute_layout, Layout};
use lineage_view::{PointMapper, PointerTarget, ScreenInfo, Viz};

/// Owner of the sprite collection, the computed layout, and the viewport
/// state.
#[derive(Debug)]
pub struct Engine {
    viz: Viz,
    sprites: Option<Vec<SpriteDescriptor>>,
    layout: Option<Layout>,
}

impl Engine {
    /// Engine for the given screen with default measures and no sprites
    /// loaded yet.
    pub fn new(screen: &ScreenInfo) -> Self {
        Self::with_measures(screen, Measures::default())
    }

    pub fn with_measures(screen: &ScreenInfo, measures: Measures) -> Self {
        Self {
            viz: Viz::with_measures(screen, measures),
            sprites: None,
            layout: None,
        }
    }

    /// Take in a fresh sprite collection (`None` while the fetch is still
    /// pending), deduplicate display names in place, and recompute the
    /// layout.
    pub fn refresh_sprites(
        &mut self,
        sprites: Option<Vec<SpriteDescriptor>>,
    ) -> Result<(), LineageError> {
        self.sprites = sprites.map(|mut sprites| {
            assign_unique_names(&mut sprites);
            sprites
        });
        self.recompute()
    }

    /// React to a window or stage resize: new viewport dimensions, view
    /// box rescaled by the current zoom, layout re-anchored to the new
    /// viewport.
    pub fn resize(&mut self, screen: &ScreenInfo) -> Result<(), LineageError> {
        self.viz = self.viz.resized(screen);
        self.recompute()
    }

    fn recompute(&mut self) -> Result<(), LineageError> {
        self.layout = compute_layout(
            &self.viz.viewport,
            &self.viz.measures,
            self.sprites.as_deref(),
        )?;
        log::debug!(
            "layout recomputed: {} nodes",
            self.layout.as_ref().map_or(0, Layout::len)
        );
        Ok(())
    }

    /// Surface press in layout coordinates.
    pub fn pointer_down(&mut self, point: Point, target: PointerTarget) {
        self.viz = self.viz.pointer_down(point, target);
    }

    /// Pointer move in layout coordinates.
    pub fn pointer_moved(&mut self, point: Point) {
        self.viz = self.viz.pointer_moved(point);
    }

    pub fn pointer_up(&mut self) {
        self.viz = self.viz.pointer_up();
    }

    /// Wheel event at a layout-space point.
    pub fn wheel_to_zoom(&mut self, point: Point, delta_y: f64) {
        self.viz = self.viz.wheel_to_zoom(point, delta_y);
    }

    /// Surface press in device coordinates, converted through the host's
    /// mapper.
    pub fn pointer_down_raw(
        &mut self,
        point: Point,
        target: PointerTarget,
        mapper: &impl PointMapper,
    ) {
        self.pointer_down(mapper.screen_to_layout(point), target);
    }

    /// Pointer move in device coordinates.
    pub fn pointer_moved_raw(&mut self, point: Point, mapper: &impl PointMapper) {
        self.pointer_moved(mapper.screen_to_layout(point));
    }

    /// Wheel event in device coordinates.
    pub fn wheel_to_zoom_raw(&mut self, point: Point, delta_y: f64, mapper: &impl PointMapper) {
        self.wheel_to_zoom(mapper.screen_to_layout(point), delta_y);
    }

    /// The last computed layout, or `None` while no collection has been
    /// loaded.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Current viewport state.
    pub fn viz(&self) -> &Viz {
        &self.viz
    }

    /// The deduplicated sprite collection, or `None` while unloaded.
    pub fn sprites(&self) -> Option<&[SpriteDescriptor]> {
        self.sprites.as_deref()
    }
}
