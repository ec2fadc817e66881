// File: crates/raster-core/src/error.rs
// Summary: Error taxonomy for validation and rasterization failures.

use thiserror::Error;

use crate::input::Field;
use crate::types::Mode;

/// Every failure is terminal for the current calculation; nothing is retried and no partial
/// point sequence escapes.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RasterError {
    /// One or more of the four coordinate fields was left empty.
    #[error("Please fill in all fields. (missing: {})", field_list(.fields))]
    MissingInput { fields: Vec<Field> },

    /// A coordinate did not parse as a number, or parsed to NaN / infinity.
    #[error("{field} is not a finite number: {value:?}")]
    NonFiniteInput { field: Field, value: String },

    /// The algorithm's denominator is zero: vertical in basic mode, zero-length in DDA mode.
    #[error("degenerate segment in {mode} mode: {reason}")]
    DegenerateSegment { mode: Mode, reason: &'static str },

    /// The segment would produce more points than a single calculation is allowed to hold.
    #[error("segment spans too many points for {mode} mode (limit {limit})")]
    SpanTooLarge { mode: Mode, limit: usize },

    /// A rounded coordinate does not fit the integer grid.
    #[error("coordinate {value} is outside the integer grid in {mode} mode")]
    OutOfGridRange { mode: Mode, value: f64 },
}

impl RasterError {
    /// True for errors raised before any rasterizer ran.
    pub fn is_input_error(&self) -> bool {
        matches!(self, RasterError::MissingInput { .. } | RasterError::NonFiniteInput { .. })
    }
}

fn field_list(fields: &[Field]) -> String {
    fields.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
}
