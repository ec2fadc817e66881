// File: crates/raster-render/src/geometry.rs
// Summary: Plot rectangle and world-to-screen mapping.

use crate::axis::Axis;
use crate::types::Insets;

/// Pixel rectangle inside which series are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotArea {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlotArea {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Surface of `width` x `height` minus `insets`.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        Self::from_ltrb(
            insets.left as i32,
            insets.top as i32,
            width - insets.right as i32,
            height - insets.bottom as i32,
        )
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Map a world-space point to pixels; y grows downwards on screen.
    pub fn to_screen(&self, x_axis: &Axis, y_axis: &Axis, x: f64, y: f64) -> (f32, f32) {
        let xspan = x_axis.span().max(1e-9);
        let yspan = y_axis.span().max(1e-9);
        let sx = self.left as f32 + ((x - x_axis.min) / xspan) as f32 * self.width() as f32;
        let sy = self.bottom as f32 - ((y - y_axis.min) / yspan) as f32 * self.height() as f32;
        (sx, sy)
    }
}
