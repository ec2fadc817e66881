// File: crates/raster-core/src/rasterizer.rs
// Summary: Rasterizer trait shared by the basic and DDA strategies, plus mode dispatch.

use crate::dda::DdaRasterizer;
use crate::error::RasterError;
use crate::line_equation::LineEquationRasterizer;
use crate::types::{Mode, PointSequence, Segment};

/// Upper bound on points emitted by a single calculation.
pub const MAX_POINTS: usize = 1_000_000;

/// Turns a segment into an ordered point sequence. Implementations hold no state between calls.
pub trait Rasterizer {
    fn id(&self) -> &'static str;
    fn mode(&self) -> Mode;
    fn compute(&self, segment: &Segment) -> Result<PointSequence, RasterError>;
}

/// Rasterizer selected by `mode`.
pub fn for_mode(mode: Mode) -> &'static dyn Rasterizer {
    match mode {
        Mode::Basic => &LineEquationRasterizer,
        Mode::Dda => &DdaRasterizer,
    }
}

/// Guard against spans whose point count would exceed `MAX_POINTS`.
pub(crate) fn check_span(mode: Mode, span: f64) -> Result<(), RasterError> {
    if !span.is_finite() || span >= MAX_POINTS as f64 {
        return Err(RasterError::SpanTooLarge { mode, limit: MAX_POINTS });
    }
    Ok(())
}
