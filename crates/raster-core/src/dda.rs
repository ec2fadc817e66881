// File: crates/raster-core/src/dda.rs
// Summary: Digital Differential Analyzer stepping along the longer axis with rounded output.

use crate::error::RasterError;
use crate::rasterizer::{check_span, Rasterizer};
use crate::types::{GridPoint, Mode, PointSequence, Segment};

/// Incremental DDA.
///
/// steps = max(|dx|, |dy|); each iteration emits the rounded accumulated position and then
/// advances by (dx / steps, dy / steps). Exactly floor(steps) + 1 points are produced. Rounding is
/// half away from zero and is applied to the running real position, never to the increments.
#[derive(Clone, Copy, Debug, Default)]
pub struct DdaRasterizer;

impl DdaRasterizer {
    /// (steps, x increment, y increment), or `DegenerateSegment` when both endpoints coincide.
    pub fn increments(segment: &Segment) -> Result<(f64, f64, f64), RasterError> {
        let (dx, dy) = segment.delta();
        let steps = dx.abs().max(dy.abs());
        if steps == 0.0 {
            return Err(RasterError::DegenerateSegment {
                mode: Mode::Dda,
                reason: "zero-length segment (both endpoints coincide)",
            });
        }
        Ok((steps, dx / steps, dy / steps))
    }
}

impl Rasterizer for DdaRasterizer {
    fn id(&self) -> &'static str { "dda" }

    fn mode(&self) -> Mode { Mode::Dda }

    fn compute(&self, segment: &Segment) -> Result<PointSequence, RasterError> {
        let (steps, x_inc, y_inc) = Self::increments(segment)?;
        check_span(Mode::Dda, steps)?;
        for v in [segment.x1(), segment.y1(), segment.x2(), segment.y2()] {
            if GridPoint::try_round_from(v, 0.0).is_none() {
                return Err(RasterError::OutOfGridRange { mode: Mode::Dda, value: v });
            }
        }

        let count = steps.floor() as usize + 1;
        let mut points = Vec::with_capacity(count);
        let (mut x, mut y) = (segment.x1(), segment.y1());
        for _ in 0..count {
            // accumulated drift can still step past an endpoint that sits on the limit
            let p = GridPoint::try_round_from(x, y)
                .ok_or_else(|| RasterError::OutOfGridRange { mode: Mode::Dda, value: x.abs().max(y.abs()) })?;
            points.push(p);
            x += x_inc;
            y += y_inc;
        }
        log::debug!("dda {segment}: steps={steps} inc=({x_inc}, {y_inc}), {} points", points.len());
        Ok(PointSequence::Dda(points))
    }
}
