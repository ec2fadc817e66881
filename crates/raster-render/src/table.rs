// File: crates/raster-render/src/table.rs
// Summary: Tabular view of the last result, keyed by the mode that produced it.

use std::fmt;

use raster_core::{GridPoint, Mode, Point, PointSequence};

/// At most one result table is visible; which one is decided by the variant.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultTable {
    #[default]
    Hidden,
    Basic(Vec<Point>),
    Dda(Vec<GridPoint>),
}

impl ResultTable {
    pub fn from_points(points: &PointSequence) -> Self {
        match points {
            PointSequence::Basic(p) => ResultTable::Basic(p.clone()),
            PointSequence::Dda(p) => ResultTable::Dda(p.clone()),
        }
    }

    /// Mode of the visible table, `None` when hidden.
    pub fn visible(&self) -> Option<Mode> {
        match self {
            ResultTable::Hidden => None,
            ResultTable::Basic(_) => Some(Mode::Basic),
            ResultTable::Dda(_) => Some(Mode::Dda),
        }
    }

    pub fn is_visible(&self) -> bool { self.visible().is_some() }

    pub fn rows(&self) -> usize {
        match self {
            ResultTable::Hidden => 0,
            ResultTable::Basic(p) => p.len(),
            ResultTable::Dda(p) => p.len(),
        }
    }

    /// Fixed-width text rendering; empty when hidden.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(mode) = self.visible() else { return Ok(()) };
        writeln!(f, "{} ({} points)", mode.label(), self.rows())?;
        writeln!(f, "{:>4}  {:>12}  {:>12}", "#", "x", "y")?;
        match self {
            ResultTable::Basic(p) => {
                for (i, p) in p.iter().enumerate() {
                    writeln!(f, "{:>4}  {:>12.4}  {:>12.4}", i, p.x, p.y)?;
                }
            }
            ResultTable::Dda(p) => {
                for (i, p) in p.iter().enumerate() {
                    writeln!(f, "{:>4}  {:>12}  {:>12}", i, p.x, p.y)?;
                }
            }
            ResultTable::Hidden => {}
        }
        Ok(())
    }
}
