//! The screen-to-layout conversion seam.

use lineage_core::Point;

/// Converts raw device coordinates into layout space.
///
/// The rendering collaborator owns the live transform between the screen
/// and the view box (and with it the current zoom and pan), so it supplies
/// the conversion; the viewport model only ever consumes layout-space
/// points. Any `Fn(Point) -> Point` closure works as a mapper.
pub trait PointMapper {
    fn screen_to_layout(&self, point: Point) -> Point;
}

impl<F> PointMapper for F
where
    F: Fn(Point) -> Point,
{
    fn screen_to_layout(&self, point: Point) -> Point {
        self(point)
    }
}
