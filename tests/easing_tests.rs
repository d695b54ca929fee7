mod common;

use common::approx;
use common::core::easing::Easing;

const ALL: [Easing; 3] = [
    Easing::Linear,
    Easing::Power1Out,
    Easing::ElasticOut {
        amplitude: 1.0,
        period: 0.4,
    },
];

#[test]
fn endpoints_are_exact() {
    for easing in ALL {
        assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
        assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
    }
}

#[test]
fn input_is_clamped() {
    for easing in ALL {
        assert_eq!(easing.apply(-0.5), 0.0);
        assert_eq!(easing.apply(1.5), 1.0);
    }
}

#[test]
fn power1_out_is_quadratic_ease_out() {
    assert!(approx(Easing::Power1Out.apply(0.5), 0.75));
    assert!(approx(Easing::Linear.apply(0.3), 0.3));
    assert_eq!(Easing::default(), Easing::Power1Out);
}

#[test]
fn elastic_out_overshoots_then_settles() {
    let e = Easing::elastic_out();
    let peak = (1..100)
        .map(|i| e.apply(i as f64 / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0, "expected overshoot, peak={peak}");
    assert!((e.apply(0.95) - 1.0).abs() < 0.01);
    // starts from rest
    assert!(e.apply(0.001).abs() < 0.05);
}

#[test]
fn elastic_out_uses_configured_constants() {
    assert_eq!(
        Easing::elastic_out(),
        Easing::ElasticOut {
            amplitude: 1.0,
            period: 0.4
        }
    );
}
