// The library is wasm-only, so host tests pull the pure modules in directly.
#![allow(dead_code)]

pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod rotation {
        include!("../../src/core/rotation.rs");
    }
    pub mod easing {
        include!("../../src/core/easing.rs");
    }
    pub mod tween {
        include!("../../src/core/tween.rs");
    }
    pub mod dot {
        include!("../../src/core/dot.rs");
    }
    pub mod grid {
        include!("../../src/core/grid.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod field {
        include!("../../src/core/field.rs");
    }
}

use self::core::dot::{Segment, Surface};
use glam::DVec2;

/// One recorded `stroke_segment` call.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub center: DVec2,
    pub angle: f64,
    pub length: f64,
    pub color: String,
    pub line_width: f64,
    pub alpha: f64,
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub clears: Vec<(f64, f64)>,
    pub strokes: Vec<Stroke>,
}

impl RecordingSurface {
    pub fn reset(&mut self) {
        self.clears.clear();
        self.strokes.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.clears.push((width, height));
    }

    fn stroke_segment(&mut self, s: &Segment<'_>) {
        self.strokes.push(Stroke {
            center: s.center,
            angle: s.angle,
            length: s.length,
            color: s.color.to_string(),
            line_width: s.line_width,
            alpha: s.alpha,
        });
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
