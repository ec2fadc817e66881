// File: crates/raster-render/src/axis.rs
// Summary: Axis model with title and visible range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(title: impl Into<String>, min: f64, max: f64) -> Self {
        Self { title: title.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 10.0)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Fit the range to `[lo, hi]`, padded by `margin` of the span on both sides.
    /// A zero-width range is widened to one unit so the axis never collapses.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        let (mut lo, mut hi) = (lo, hi);
        if (hi - lo).abs() < 1e-9 {
            lo -= 0.5;
            hi += 0.5;
        }
        let pad = (hi - lo) * margin.max(0.0);
        self.min = lo - pad;
        self.max = hi + pad;
    }
}
