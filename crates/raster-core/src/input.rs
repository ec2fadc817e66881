// File: crates/raster-core/src/input.rs
// Summary: Validation of the four raw coordinate fields into a `Segment`.

use std::fmt;

use crate::error::RasterError;
use crate::types::Segment;

/// One of the four coordinate fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    X1,
    Y1,
    X2,
    Y2,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::X1, Field::Y1, Field::X2, Field::Y2];

    pub const fn name(self) -> &'static str {
        match self {
            Field::X1 => "x1",
            Field::Y1 => "y1",
            Field::X2 => "x2",
            Field::Y2 => "y2",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw text of the four coordinate inputs, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentFields {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
}

impl SegmentFields {
    pub fn new(
        x1: impl Into<String>,
        y1: impl Into<String>,
        x2: impl Into<String>,
        y2: impl Into<String>,
    ) -> Self {
        Self { x1: x1.into(), y1: y1.into(), x2: x2.into(), y2: y2.into() }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::X1 => &self.x1,
            Field::Y1 => &self.y1,
            Field::X2 => &self.x2,
            Field::Y2 => &self.y2,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::X1 => &mut self.x1,
            Field::Y1 => &mut self.y1,
            Field::X2 => &mut self.x2,
            Field::Y2 => &mut self.y2,
        };
        *slot = value.into();
    }

    /// Fields that are empty or whitespace-only, in x1, y1, x2, y2 order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|&f| self.get(f).trim().is_empty()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate and convert into a `Segment`.
    ///
    /// Emptiness is checked for all fields before any parsing, so a form with both blank and
    /// malformed fields reports `MissingInput`.
    pub fn parse(&self) -> Result<Segment, RasterError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(RasterError::MissingInput { fields: missing });
        }
        let x1 = parse_coordinate(Field::X1, &self.x1)?;
        let y1 = parse_coordinate(Field::Y1, &self.y1)?;
        let x2 = parse_coordinate(Field::X2, &self.x2)?;
        let y2 = parse_coordinate(Field::Y2, &self.y2)?;
        Segment::new(x1, y1, x2, y2)
    }
}

fn parse_coordinate(field: Field, text: &str) -> Result<f64, RasterError> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RasterError::NonFiniteInput { field, value: text.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_counts_as_missing() {
        let f = SegmentFields::new(" ", "1", "", "2");
        assert_eq!(f.missing(), vec![Field::X1, Field::X2]);
        assert!(!f.is_complete());
    }

    #[test]
    fn parse_trims_surrounding_space() {
        let s = SegmentFields::new(" 1.5", "2 ", "3", "-4").parse().expect("valid");
        assert_eq!((s.x1(), s.y1(), s.x2(), s.y2()), (1.5, 2.0, 3.0, -4.0));
    }
}
