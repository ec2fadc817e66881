// File: crates/raster-core/src/line_equation.rs
// Summary: "Basic" rasterizer evaluating y = m·x + b at unit steps of x.

use crate::error::RasterError;
use crate::rasterizer::{check_span, Rasterizer, MAX_POINTS};
use crate::types::{Mode, Point, PointSequence, Segment};

/// Slope-intercept evaluation from x1 towards x2 in steps of exactly 1.0.
///
/// The step is always positive, so a segment with x1 > x2 yields an empty sequence rather than
/// an error. x is accumulated, so for a fractional x1 each sample only approximates x1 + k and
/// the drift can push the last one past x2: (0.84 -> 300.84) emits 300 samples, not 301. With a
/// whole-number x1 and moderate magnitudes the samples are exact and the count is
/// floor(x2 - x1) + 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineEquationRasterizer;

impl LineEquationRasterizer {
    /// Slope and intercept of the segment, or `DegenerateSegment` for a vertical one.
    pub fn slope_intercept(segment: &Segment) -> Result<(f64, f64), RasterError> {
        let (dx, dy) = segment.delta();
        if dx == 0.0 {
            return Err(RasterError::DegenerateSegment {
                mode: Mode::Basic,
                reason: "vertical segment (x1 == x2) has undefined slope",
            });
        }
        let m = dy / dx;
        let b = segment.y1() - m * segment.x1();
        Ok((m, b))
    }
}

impl Rasterizer for LineEquationRasterizer {
    fn id(&self) -> &'static str { "line_equation" }

    fn mode(&self) -> Mode { Mode::Basic }

    fn compute(&self, segment: &Segment) -> Result<PointSequence, RasterError> {
        let (m, b) = Self::slope_intercept(segment)?;
        let (x1, x2) = (segment.x1(), segment.x2());
        if x1 > x2 {
            log::debug!("basic {segment}: x1 > x2, no samples");
            return Ok(PointSequence::empty(Mode::Basic));
        }
        check_span(Mode::Basic, x2 - x1)?;

        let mut points = Vec::with_capacity((x2 - x1) as usize + 1);
        let mut x = x1;
        while x <= x2 {
            // x stops advancing once its magnitude swallows the unit step
            if points.len() >= MAX_POINTS {
                return Err(RasterError::SpanTooLarge { mode: Mode::Basic, limit: MAX_POINTS });
            }
            points.push(Point::new(x, m * x + b));
            x += 1.0;
        }
        log::debug!("basic {segment}: m={m} b={b}, {} points", points.len());
        Ok(PointSequence::Basic(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_intercept_of_diagonal() {
        let s = Segment::new(1.0, 3.0, 3.0, 7.0).unwrap();
        assert_eq!(LineEquationRasterizer::slope_intercept(&s).unwrap(), (2.0, 1.0));
    }

    #[test]
    fn fractional_span_stops_short_of_x2() {
        let s = Segment::new(0.0, 0.0, 2.5, 5.0).unwrap();
        let seq = LineEquationRasterizer.compute(&s).unwrap();
        let xs = seq.labels();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }
}
