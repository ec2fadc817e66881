// File: crates/raster-render/src/lib.rs
// Summary: Display collaborator entry point; exports the line chart presenter, result tables,
// axes, themes and render options.

pub mod types;
pub mod axis;
pub mod grid;
pub mod geometry;
pub mod theme;
pub mod table;
pub mod chart;
#[cfg(feature = "png")]
mod render;

pub use chart::{LineChart, RenderOptions};
pub use axis::Axis;
pub use geometry::PlotArea;
pub use table::ResultTable;
pub use theme::{Rgba, Theme};
