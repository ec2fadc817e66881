// File: crates/raster-core/src/session.rs
// Summary: Trigger surface: editable coordinate fields, mode selector, Calculate and Clear.

use crate::coordinator::{Coordinator, DisplayState, Presenter};
use crate::error::RasterError;
use crate::input::{Field, SegmentFields};
use crate::types::{Mode, PointSequence};

/// Form-like state around a `Coordinator`.
///
/// Editing fields or switching mode never touches the display; only `calculate` and `clear` do.
pub struct Session<P: Presenter> {
    fields: SegmentFields,
    mode: Mode,
    coordinator: Coordinator<P>,
}

impl<P: Presenter> Session<P> {
    pub fn new(presenter: P) -> Self {
        Self { fields: SegmentFields::default(), mode: Mode::default(), coordinator: Coordinator::new(presenter) }
    }

    pub fn with_fields(mut self, fields: SegmentFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn fields(&self) -> &SegmentFields { &self.fields }

    pub fn mode(&self) -> Mode { self.mode }

    pub fn state(&self) -> DisplayState { self.coordinator.state() }

    pub fn presenter(&self) -> &P { self.coordinator.presenter() }

    pub fn into_presenter(self) -> P { self.coordinator.into_presenter() }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Validate the fields and run the selected rasterizer.
    pub fn calculate(&mut self) -> Result<PointSequence, RasterError> {
        let segment = self.fields.parse().map_err(|e| {
            log::warn!("calculation rejected: {e}");
            e
        })?;
        self.coordinator.calculate(&segment, self.mode)
    }

    /// Empty every field and clear the display.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.coordinator.clear();
    }
}
