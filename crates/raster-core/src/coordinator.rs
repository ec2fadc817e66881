// File: crates/raster-core/src/coordinator.rs
// Summary: Mode dispatch between rasterizers and hand-off to the display collaborator.

use crate::error::RasterError;
use crate::rasterizer;
use crate::types::{Mode, PointSequence, Segment};

/// Display collaborator. Owns all of its own render state; the coordinator only pushes
/// finished sequences into it or asks it to forget them.
pub trait Presenter {
    /// Replace whatever is currently shown with `points`.
    fn show(&mut self, points: &PointSequence);
    /// Discard the shown sequence and hide every result table.
    fn clear(&mut self);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn show(&mut self, points: &PointSequence) { (**self).show(points) }
    fn clear(&mut self) { (**self).clear() }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn show(&mut self, points: &PointSequence) { (**self).show(points) }
    fn clear(&mut self) { (**self).clear() }
}

/// Which result, if any, the display currently holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Idle,
    Displaying(Mode),
}

impl DisplayState {
    pub fn shown_mode(self) -> Option<Mode> {
        match self {
            DisplayState::Idle => None,
            DisplayState::Displaying(mode) => Some(mode),
        }
    }
}

pub struct Coordinator<P: Presenter> {
    presenter: P,
    state: DisplayState,
}

impl<P: Presenter> Coordinator<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter, state: DisplayState::Idle }
    }

    pub fn state(&self) -> DisplayState { self.state }

    pub fn presenter(&self) -> &P { &self.presenter }

    pub fn presenter_mut(&mut self) -> &mut P { &mut self.presenter }

    pub fn into_presenter(self) -> P { self.presenter }

    /// Rasterize `segment` with the strategy for `mode`, show the result and return it.
    ///
    /// On error the presenter is left untouched and the state does not change.
    pub fn calculate(&mut self, segment: &Segment, mode: Mode) -> Result<PointSequence, RasterError> {
        let points = rasterizer::for_mode(mode).compute(segment)?;
        self.presenter.show(&points);
        log::trace!("display {:?} -> Displaying({mode})", self.state);
        self.state = DisplayState::Displaying(mode);
        Ok(points)
    }

    pub fn clear(&mut self) {
        self.presenter.clear();
        log::trace!("display {:?} -> Idle", self.state);
        self.state = DisplayState::Idle;
    }
}
