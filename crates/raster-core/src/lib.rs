// File: crates/raster-core/src/lib.rs
// Summary: Core library entry point; exports the segment model, both rasterizers, and the
// coordinator/session that drive a display collaborator.

pub mod types;
pub mod error;
pub mod input;
pub mod rasterizer;
pub mod line_equation;
pub mod dda;
pub mod coordinator;
pub mod session;

pub use types::{GridPoint, Mode, Point, PointSequence, Segment};
pub use error::RasterError;
pub use input::{Field, SegmentFields};
pub use rasterizer::{Rasterizer, MAX_POINTS};
pub use line_equation::LineEquationRasterizer;
pub use dda::DdaRasterizer;
pub use coordinator::{Coordinator, DisplayState, Presenter};
pub use session::Session;
