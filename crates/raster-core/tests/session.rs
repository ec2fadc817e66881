// File: crates/raster-core/tests/session.rs
// Purpose: Calculate/Clear triggers: field validation, mode switching and clearing.

use raster_core::{DisplayState, Field, Mode, PointSequence, Presenter, RasterError, SegmentFields, Session};

#[derive(Default)]
struct Screen {
    current: Option<PointSequence>,
}

impl Presenter for Screen {
    fn show(&mut self, points: &PointSequence) { self.current = Some(points.clone()); }
    fn clear(&mut self) { self.current = None; }
}

#[test]
fn empty_form_is_rejected_with_all_fields() {
    let mut s = Session::new(Screen::default());
    let err = s.calculate().unwrap_err();
    assert_eq!(err, RasterError::MissingInput { fields: Field::ALL.to_vec() });
    assert!(err.is_input_error());
    assert!(err.to_string().starts_with("Please fill in all fields."));
    assert_eq!(s.state(), DisplayState::Idle);
}

#[test]
fn malformed_number_is_non_finite_input() {
    let mut s = Session::new(Screen::default()).with_fields(SegmentFields::new("0", "abc", "4", "4"));
    let err = s.calculate().unwrap_err();
    assert_eq!(err, RasterError::NonFiniteInput { field: Field::Y1, value: "abc".into() });
}

#[test]
fn nan_and_infinity_text_are_rejected() {
    for bad in ["NaN", "inf", "-infinity"] {
        let mut s = Session::new(Screen::default()).with_fields(SegmentFields::new("0", "0", bad, "1"));
        let err = s.calculate().unwrap_err();
        assert!(matches!(err, RasterError::NonFiniteInput { field: Field::X2, .. }), "{bad}: {err:?}");
    }
}

#[test]
fn editing_does_not_clear_display() {
    let mut s = Session::new(Screen::default()).with_fields(SegmentFields::new("0", "0", "4", "4"));
    s.calculate().expect("calculate");
    s.set_field(Field::X2, "10");
    s.set_mode(Mode::Dda);
    assert_eq!(s.state(), DisplayState::Displaying(Mode::Basic));
    assert_eq!(s.presenter().current.as_ref().map(|p| p.len()), Some(5));
}

#[test]
fn recalculate_uses_current_mode() {
    let mut s = Session::new(Screen::default())
        .with_fields(SegmentFields::new("0", "0", "4", "2"))
        .with_mode(Mode::Dda);
    let seq = s.calculate().expect("calculate");
    assert_eq!(seq.to_xy(), vec![(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 2.0), (4.0, 2.0)]);
    assert_eq!(s.state(), DisplayState::Displaying(Mode::Dda));
}

#[test]
fn clear_empties_fields_and_display() {
    let mut s = Session::new(Screen::default()).with_fields(SegmentFields::new("1", "2", "3", "4"));
    s.calculate().expect("calculate");
    s.clear();
    assert_eq!(s.fields(), &SegmentFields::default());
    assert_eq!(s.state(), DisplayState::Idle);
    assert!(s.into_presenter().current.is_none());
}

#[test]
fn mode_parses_case_insensitively() {
    assert_eq!("DDA".parse::<Mode>(), Ok(Mode::Dda));
    assert_eq!(" basic ".parse::<Mode>(), Ok(Mode::Basic));
    assert!("bresenham".parse::<Mode>().is_err());
    assert_eq!(Mode::Dda.to_string(), "dda");
    assert_eq!(Mode::Basic.label(), "Basic Line");
}
