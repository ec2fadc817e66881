// File: crates/raster-core/tests/coordinator.rs
// Purpose: Coordinator dispatch, presenter hand-off and the Idle/Displaying state machine.

use raster_core::{Coordinator, DisplayState, Mode, PointSequence, Presenter, RasterError, Segment};

#[derive(Default)]
struct Recorder {
    shown: Vec<PointSequence>,
    clears: usize,
}

impl Presenter for Recorder {
    fn show(&mut self, points: &PointSequence) { self.shown.push(points.clone()); }
    fn clear(&mut self) { self.clears += 1; }
}

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(x1, y1, x2, y2).expect("finite segment")
}

#[test]
fn starts_idle() {
    let c = Coordinator::new(Recorder::default());
    assert_eq!(c.state(), DisplayState::Idle);
    assert_eq!(c.state().shown_mode(), None);
}

#[test]
fn dispatches_by_mode_and_forwards() {
    let mut c = Coordinator::new(Recorder::default());
    let basic = c.calculate(&seg(0.0, 0.0, 4.0, 4.0), Mode::Basic).expect("basic");
    assert_eq!(basic.mode(), Mode::Basic);
    assert_eq!(c.state(), DisplayState::Displaying(Mode::Basic));

    let dda = c.calculate(&seg(0.0, 0.0, 4.0, 2.0), Mode::Dda).expect("dda");
    assert_eq!(dda.mode(), Mode::Dda);
    assert_eq!(c.state(), DisplayState::Displaying(Mode::Dda));

    assert_eq!(c.presenter().shown, vec![basic, dda]);
}

#[test]
fn failure_leaves_display_alone() {
    let mut c = Coordinator::new(Recorder::default());
    c.calculate(&seg(0.0, 0.0, 1.0, 1.0), Mode::Dda).expect("dda");

    let err = c.calculate(&seg(2.0, 3.0, 2.0, 8.0), Mode::Basic).unwrap_err();
    assert!(matches!(err, RasterError::DegenerateSegment { .. }));
    assert_eq!(c.state(), DisplayState::Displaying(Mode::Dda));
    assert_eq!(c.presenter().shown.len(), 1);
}

#[test]
fn empty_result_still_counts_as_displaying() {
    let mut c = Coordinator::new(Recorder::default());
    let seq = c.calculate(&seg(5.0, 5.0, 1.0, 1.0), Mode::Basic).expect("basic");
    assert!(seq.is_empty());
    assert_eq!(c.state(), DisplayState::Displaying(Mode::Basic));
}

#[test]
fn clear_returns_to_idle() {
    let mut c = Coordinator::new(Recorder::default());
    c.calculate(&seg(0.0, 0.0, 4.0, 4.0), Mode::Basic).expect("basic");
    c.clear();
    assert_eq!(c.state(), DisplayState::Idle);
    assert_eq!(c.into_presenter().clears, 1);
}

#[test]
fn borrowed_presenter_sees_updates() {
    let mut rec = Recorder::default();
    {
        let mut c = Coordinator::new(&mut rec);
        c.calculate(&seg(0.0, 0.0, 2.0, 2.0), Mode::Dda).expect("dda");
    }
    assert_eq!(rec.shown.len(), 1);
}
