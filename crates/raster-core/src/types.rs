// File: crates/raster-core/src/types.rs
// Summary: Shared value types: points, segments, mode selector and point sequences.

use std::fmt;
use std::str::FromStr;

use crate::error::RasterError;
use crate::input::Field;

/// Real-valued sample produced by the slope-intercept rasterizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer grid cell produced by the DDA rasterizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Round a real position to the nearest cell, ties away from zero.
    /// `None` when either rounded coordinate falls outside the `i64` range.
    pub fn try_round_from(x: f64, y: f64) -> Option<Self> {
        Some(Self { x: round_to_i64(x)?, y: round_to_i64(y)? })
    }
}

fn round_to_i64(v: f64) -> Option<i64> {
    // 2^63; i64::MAX itself is not representable as f64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let r = v.round();
    (r >= -LIMIT && r < LIMIT).then_some(r as i64)
}

/// Two endpoints of a line segment.
/// Contract: all four coordinates are finite (enforced by `Segment::new`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, RasterError> {
        for (field, v) in [(Field::X1, x1), (Field::Y1, y1), (Field::X2, x2), (Field::Y2, y2)] {
            if !v.is_finite() {
                return Err(RasterError::NonFiniteInput { field, value: v.to_string() });
            }
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    pub const fn x1(&self) -> f64 { self.x1 }
    pub const fn y1(&self) -> f64 { self.y1 }
    pub const fn x2(&self) -> f64 { self.x2 }
    pub const fn y2(&self) -> f64 { self.y2 }

    /// Signed displacement (x2 - x1, y2 - y1).
    pub fn delta(&self) -> (f64, f64) {
        (self.x2 - self.x1, self.y2 - self.y1)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) -> ({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Which rasterizer runs for a calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Basic,
    Dda,
}

impl Mode {
    /// Human-facing name of the result set.
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Basic => "Basic Line",
            Mode::Dda => "DDA",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Basic => "basic",
            Mode::Dda => "dda",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("basic") {
            Ok(Mode::Basic)
        } else if s.eq_ignore_ascii_case("dda") {
            Ok(Mode::Dda)
        } else {
            Err(format!("unknown mode '{s}' (expected 'basic' or 'dda')"))
        }
    }
}

/// Ordered output of one calculation. Generation order is significant.
#[derive(Clone, Debug, PartialEq)]
pub enum PointSequence {
    Basic(Vec<Point>),
    Dda(Vec<GridPoint>),
}

impl PointSequence {
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Basic => PointSequence::Basic(Vec::new()),
            Mode::Dda => PointSequence::Dda(Vec::new()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            PointSequence::Basic(_) => Mode::Basic,
            PointSequence::Dda(_) => Mode::Dda,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PointSequence::Basic(p) => p.len(),
            PointSequence::Dda(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_basic(&self) -> Option<&[Point]> {
        match self {
            PointSequence::Basic(p) => Some(p),
            PointSequence::Dda(_) => None,
        }
    }

    pub fn as_grid(&self) -> Option<&[GridPoint]> {
        match self {
            PointSequence::Dda(p) => Some(p),
            PointSequence::Basic(_) => None,
        }
    }

    /// All points widened to (f64, f64), in generation order.
    pub fn to_xy(&self) -> Vec<(f64, f64)> {
        match self {
            PointSequence::Basic(p) => p.iter().map(|p| (p.x, p.y)).collect(),
            PointSequence::Dda(p) => p.iter().map(|p| (p.x as f64, p.y as f64)).collect(),
        }
    }

    /// X values, used by the display as the label set.
    pub fn labels(&self) -> Vec<f64> {
        self.to_xy().into_iter().map(|(x, _)| x).collect()
    }

    /// Y values, used by the display as the data set.
    pub fn data(&self) -> Vec<f64> {
        self.to_xy().into_iter().map(|(_, y)| y).collect()
    }
}
