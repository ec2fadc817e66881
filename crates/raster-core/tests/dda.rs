// File: crates/raster-core/tests/dda.rs
// Purpose: DDA scenarios: diagonal, shallow with .5 ties, steep, reversed and degenerate inputs.

use raster_core::{DdaRasterizer, GridPoint, Mode, RasterError, Rasterizer, Segment};

fn grid(seq: &raster_core::PointSequence) -> Vec<(i64, i64)> {
    seq.as_grid().expect("dda output").iter().map(|p| (p.x, p.y)).collect()
}

fn run(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<raster_core::PointSequence, RasterError> {
    DdaRasterizer.compute(&Segment::new(x1, y1, x2, y2).expect("finite segment"))
}

#[test]
fn diagonal() {
    let seq = run(0.0, 0.0, 4.0, 4.0).expect("compute");
    assert_eq!(grid(&seq), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
}

#[test]
fn half_steps_round_away_from_zero() {
    // y walks 0, 0.5, 1.0, 1.5, 2.0
    let seq = run(0.0, 0.0, 4.0, 2.0).expect("compute");
    assert_eq!(grid(&seq), vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
}

#[test]
fn steep_line_steps_along_y() {
    let seq = run(0.0, 0.0, 2.0, 4.0).expect("compute");
    assert_eq!(grid(&seq), vec![(0, 0), (1, 1), (1, 2), (2, 3), (2, 4)]);
}

#[test]
fn reversed_direction_walks_backwards() {
    let seq = run(3.0, 3.0, 0.0, 0.0).expect("compute");
    assert_eq!(grid(&seq), vec![(3, 3), (2, 2), (1, 1), (0, 0)]);
}

#[test]
fn fractional_steps_use_floor_bound() {
    // steps = 2.6 -> floor + 1 = 3 points, never round(2.6) + 1
    let seq = run(0.0, 0.0, 2.6, 1.3).expect("compute");
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.as_grid().unwrap()[0], GridPoint::new(0, 0));
}

#[test]
fn zero_length_is_degenerate() {
    let err = run(7.0, -2.0, 7.0, -2.0).unwrap_err();
    assert!(matches!(err, RasterError::DegenerateSegment { mode: Mode::Dda, .. }), "{err:?}");
}

#[test]
fn coordinates_past_i64_are_refused() {
    let err = run(1e19, 0.0, 1e19, 3.0).unwrap_err();
    assert_eq!(err, RasterError::OutOfGridRange { mode: Mode::Dda, value: 1e19 });
    let err = run(0.0, -2e19, 3.0, -2e19).unwrap_err();
    assert!(matches!(err, RasterError::OutOfGridRange { mode: Mode::Dda, .. }), "{err:?}");
}

#[test]
fn large_but_representable_coordinates_round_exactly() {
    let seq = run(4e18, -4e18, 4e18 + 2048.0, -4e18).expect("compute");
    let first = seq.as_grid().unwrap()[0];
    assert_eq!(first, GridPoint::new(4_000_000_000_000_000_000, -4_000_000_000_000_000_000));
}

#[test]
fn too_many_steps_is_refused() {
    let err = run(0.0, 0.0, 2e6, 1.0).unwrap_err();
    assert!(matches!(err, RasterError::SpanTooLarge { mode: Mode::Dda, .. }), "{err:?}");
}

#[test]
fn overflowing_delta_is_refused() {
    // dx overflows to infinity
    let err = run(-1e308, 0.0, 1e308, 0.0).unwrap_err();
    assert!(matches!(err, RasterError::SpanTooLarge { mode: Mode::Dda, .. }), "{err:?}");
}

#[test]
fn vertical_is_fine_for_dda() {
    let seq = run(2.0, 3.0, 2.0, 8.0).expect("compute");
    assert_eq!(grid(&seq), (3..=8).map(|y| (2, y)).collect::<Vec<_>>());
}
