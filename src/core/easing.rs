use super::constants::{ELASTIC_AMPLITUDE, ELASTIC_PERIOD};
use std::f64::consts::TAU;

/// Easing curves available to tweens.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out; the default for tweens that don't name one.
    #[default]
    Power1Out,
    /// Spring-like overshoot that settles on the target.
    ElasticOut { amplitude: f64, period: f64 },
}

impl Easing {
    /// `elastic.out(1, 0.4)`, used while dots follow the pointer.
    pub fn elastic_out() -> Self {
        Easing::ElasticOut {
            amplitude: ELASTIC_AMPLITUDE,
            period: ELASTIC_PERIOD,
        }
    }

    /// Map linear progress `t` in [0, 1] to eased progress.
    ///
    /// Endpoints are exact: 0 maps to 0 and 1 maps to 1. Elastic curves leave
    /// the [0, 1] range in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    let a = amplitude.max(1.0);
    let p = period / if amplitude < 1.0 { amplitude } else { 1.0 };
    // phase shift so the curve starts at exactly zero
    let shift = p / TAU * (1.0 / a).asin();
    a * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / p).sin() + 1.0
}
