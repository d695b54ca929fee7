mod common;

use common::core::config::FieldConfig;
use common::core::constants::MIN_MAGNITUDE;
use common::core::field::*;
use common::core::tween::Property;
use common::RecordingSurface;
use glam::DVec2;
use std::f64::consts::PI;

const FRAME: f64 = 0.1;

fn config() -> FieldConfig {
    FieldConfig {
        dot_spacing: 50.0,
        max_magnitude: 20.0,
        radius: 50.0,
        ..FieldConfig::default()
    }
}

fn ready_field() -> FieldState {
    let mut field = FieldState::with_seed(config(), 11).unwrap();
    assert!(field.resize(200.0, 100.0));
    field
}

fn run(field: &mut FieldState, frames: usize, surface: &mut RecordingSurface) {
    for _ in 0..frames {
        field.frame(FRAME, surface);
    }
}

#[test]
fn starts_idle_and_becomes_ready_on_first_measure() {
    let mut field = FieldState::with_seed(config(), 1).unwrap();
    assert_eq!(field.phase(), FieldPhase::Idle);

    assert!(!field.resize(0.0, 100.0));
    assert_eq!(field.phase(), FieldPhase::Idle);

    assert!(field.resize(200.0, 100.0));
    assert_eq!(field.phase(), FieldPhase::Ready);
    let grid = field.grid().unwrap();
    assert_eq!((grid.rows(), grid.cols()), (2, 4));

    assert!(!field.resize(200.0, 100.0));
    assert!(field.resize(300.0, 100.0));
    assert_eq!(field.grid().unwrap().cols(), 6);
}

#[test]
fn idle_frame_clears_without_drawing() {
    let mut field = FieldState::with_seed(config(), 1).unwrap();
    let mut surface = RecordingSurface::default();
    field.pointer_enter();
    field.pointer_move(DVec2::new(10.0, 10.0));
    field.frame(FRAME, &mut surface);
    assert_eq!(surface.clears.len(), 1);
    assert!(surface.strokes.is_empty());
}

#[test]
fn late_measurement_starts_drawing_without_other_input() {
    let mut field = FieldState::with_seed(config(), 4).unwrap();
    let mut surface = RecordingSurface::default();
    run(&mut field, 3, &mut surface);
    assert!(surface.strokes.is_empty());

    // canvas laid out after mounting
    assert!(field.resize(200.0, 100.0));
    surface.reset();
    field.frame(FRAME, &mut surface);
    assert_eq!(surface.strokes.len(), 8);

    // container shrinks the canvas
    assert!(field.resize(100.0, 100.0));
    surface.reset();
    field.frame(FRAME, &mut surface);
    assert_eq!(surface.clears, vec![(100.0, 100.0)]);
    assert_eq!(surface.strokes.len(), 4);
}

#[test]
fn ready_frame_draws_every_dot_once() {
    let mut field = ready_field();
    let mut surface = RecordingSurface::default();
    field.frame(FRAME, &mut surface);
    assert_eq!(surface.clears, vec![(200.0, 100.0)]);
    assert_eq!(surface.strokes.len(), 8);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let bad = FieldConfig {
        dot_spacing: -1.0,
        ..config()
    };
    assert!(FieldState::with_seed(bad, 1).is_err());
}

#[test]
fn pointer_target_floors_distance_and_clamps_magnitude() {
    let dot = DVec2::new(40.0, 40.0);
    let (angle, magnitude) = pointer_target(dot, dot, 50.0, 100.0);
    assert_eq!(angle, 0.0);
    assert_eq!(magnitude, 50.0);

    let (_, magnitude) = pointer_target(dot, DVec2::new(41.0, 40.0), 50.0, 20.0);
    assert_eq!(magnitude, 20.0);

    let (angle, magnitude) = pointer_target(dot, DVec2::new(40.0, 1e9), 50.0, 20.0);
    assert!((angle - PI / 2.0).abs() < 1e-12);
    assert_eq!(magnitude, MIN_MAGNITUDE);

    let (angle, _) = pointer_target(dot, DVec2::new(0.0, 40.0), 50.0, 20.0);
    assert_eq!(angle, PI);
}

#[test]
fn dots_turn_toward_the_pointer_and_stretch() {
    let mut field = ready_field();
    let mut surface = RecordingSurface::default();
    // pointer sits exactly on the first dot
    let on_dot = field.grid().unwrap().get(0, 0).unwrap().position();
    field.touch_start(on_dot);
    run(&mut field, 10, &mut surface);

    let grid = field.grid().unwrap();
    let first = grid.get(0, 0).unwrap();
    assert_eq!(first.magnitude(), 20.0);
    assert_eq!(first.angle(), 0.0);

    // the next dot to the right points back at the pointer
    let right = grid.get(0, 1).unwrap();
    assert_eq!(right.angle(), PI);
    assert!((right.magnitude() - 50.0 / 40.0).abs() < 1e-9);
    assert!(field.tweens().is_empty());
}

#[test]
fn magnitude_stays_clamped_through_elastic_overshoot() {
    let mut field = ready_field();
    let mut surface = RecordingSurface::default();
    field.pointer_enter();
    field.pointer_move(DVec2::new(100.0, 50.0));
    for _ in 0..60 {
        field.frame(1.0 / 60.0, &mut surface);
        for dot in field.grid().unwrap().dots() {
            assert!(dot.magnitude() >= MIN_MAGNITUDE && dot.magnitude() <= 20.0);
        }
    }
}

#[test]
fn moves_are_coalesced_into_one_retarget_per_frame() {
    let mut field = ready_field();
    let mut surface = RecordingSurface::default();
    field.pointer_enter();
    field.pointer_move(DVec2::new(10.0, 10.0));
    field.pointer_move(DVec2::new(190.0, 90.0));
    assert!(field.pointer().moved);

    field.frame(0.0, &mut surface);
    assert!(!field.pointer().moved);
    assert_eq!(field.pointer().position, DVec2::new(190.0, 90.0));
    // one magnitude tween per dot
    let n = field.grid().unwrap().len();
    assert!((0..n).all(|i| field.tweens().get(i, Property::Magnitude).is_some()));
}

#[test]
fn movement_outside_the_canvas_is_kept_until_hover() {
    let mut field = ready_field();
    let mut surface = RecordingSurface::default();
    field.pointer_move(DVec2::new(100.0, 50.0));
    field.frame(FRAME, &mut surface);
    assert!(field.tweens().is_empty());
    assert!(field.pointer().moved);

    field.pointer_enter();
    field.frame(FRAME, &mut surface);
    assert!(!field.tweens().is_empty());
}

#[test]
fn hover_draws_fully_opaque() {
    let mut field = ready_field();
    let mut surface = RecordingSurface::default();
    field.pointer_enter();
    field.frame(FRAME, &mut surface);
    assert!(surface.strokes.iter().all(|s| s.alpha == 1.0));
}

#[test]
fn leaving_relaxes_every_dot_to_rest() {
    let mut field = ready_field();
    let mut surface = RecordingSurface::default();
    field.pointer_enter();
    field.pointer_move(DVec2::new(0.0, 50.0));
    run(&mut field, 10, &mut surface);
    assert!(field.grid().unwrap().dots().iter().any(|d| d.angle() != 0.0));

    field.pointer_leave();
    assert!(!field.pointer().over);
    surface.reset();
    run(&mut field, 10, &mut surface);

    for dot in field.grid().unwrap().dots() {
        assert_eq!(dot.magnitude(), MIN_MAGNITUDE);
        assert_eq!(dot.angle(), 0.0);
    }
    assert!(surface.strokes.iter().all(|s| s.alpha <= 1.0));
}

#[test]
fn resize_discards_in_flight_tweens() {
    let mut field = ready_field();
    let mut surface = RecordingSurface::default();
    field.pointer_enter();
    field.pointer_move(DVec2::new(100.0, 50.0));
    field.frame(0.0, &mut surface);
    assert!(!field.tweens().is_empty());

    assert!(field.resize(400.0, 100.0));
    assert!(field.tweens().is_empty());
    assert!(field
        .grid()
        .unwrap()
        .dots()
        .iter()
        .all(|d| d.magnitude() == MIN_MAGNITUDE));
}

#[test]
fn set_config_rebuilds_only_when_the_grid_changes() {
    let mut field = ready_field();
    let mut surface = RecordingSurface::default();
    field.pointer_enter();
    field.pointer_move(DVec2::new(100.0, 50.0));
    field.frame(0.0, &mut surface);
    let running = field.tweens().len();

    field
        .set_config(FieldConfig {
            radius: 80.0,
            ..config()
        })
        .unwrap();
    assert_eq!(field.tweens().len(), running);
    assert_eq!(field.config().radius, 80.0);

    field
        .set_config(FieldConfig {
            dot_color: "tomato".into(),
            ..config()
        })
        .unwrap();
    assert!(field.tweens().is_empty());
    surface.reset();
    field.frame(0.0, &mut surface);
    assert!(surface.strokes.iter().all(|s| s.color == "tomato"));

    let before = field.config().clone();
    assert!(field
        .set_config(FieldConfig {
            alpha_tick_count: 0,
            ..config()
        })
        .is_err());
    assert_eq!(field.config(), &before);
}

#[test]
fn config_before_first_measure_stays_idle() {
    let mut field = FieldState::with_seed(config(), 2).unwrap();
    field
        .set_config(FieldConfig {
            dot_spacing: 10.0,
            ..config()
        })
        .unwrap();
    assert_eq!(field.phase(), FieldPhase::Idle);
    assert!(field.resize(100.0, 100.0));
    assert_eq!(field.grid().unwrap().len(), 100);
}
