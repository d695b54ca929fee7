use super::constants::MIN_MAGNITUDE;
use super::tween::{Animatable, Property};
use glam::DVec2;
use rand::Rng;
use std::rc::Rc;

/// One stroke to render: a segment centred on `center`, rotated by `angle`
/// radians, `length` long.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<'a> {
    pub center: DVec2,
    pub angle: f64,
    pub length: f64,
    pub color: &'a str,
    pub line_width: f64,
    pub alpha: f64,
}

/// 2D drawing target the dots render into.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn stroke_segment(&mut self, segment: &Segment<'_>);
}

/// Appearance shared by every dot of a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct DotStyle {
    pub color: String,
    pub line_width: f64,
    pub alpha_tick_count: u32,
    pub max_magnitude: f64,
}

/// Ping-pong alpha counter. Each step moves one frame toward the current end
/// and reverses at 0 and `tick_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlphaOscillator {
    frame: u32,
    tick_count: u32,
    increasing: bool,
}

impl AlphaOscillator {
    /// Random starting frame and direction so neighbouring dots pulse out of step.
    pub fn random(tick_count: u32, rng: &mut impl Rng) -> Self {
        Self::with_phase(tick_count, rng.gen_range(0..=tick_count), rng.gen_bool(0.5))
    }

    pub fn with_phase(tick_count: u32, frame: u32, increasing: bool) -> Self {
        Self {
            frame: frame.min(tick_count),
            tick_count,
            increasing,
        }
    }

    pub fn step(&mut self) -> f64 {
        if self.tick_count == 0 {
            return 1.0;
        }
        if (self.increasing && self.frame == self.tick_count) || (!self.increasing && self.frame == 0) {
            self.increasing = !self.increasing;
        }
        if self.increasing {
            self.frame += 1;
        } else {
            self.frame -= 1;
        }
        self.value()
    }

    #[inline]
    pub fn value(&self) -> f64 {
        if self.tick_count == 0 {
            1.0
        } else {
            self.frame as f64 / self.tick_count as f64
        }
    }

    #[inline]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    #[inline]
    pub fn is_increasing(&self) -> bool {
        self.increasing
    }
}

#[derive(Clone, Debug)]
pub struct Dot {
    position: DVec2,
    magnitude: f64,
    angle: f64,
    alpha: f64,
    oscillator: AlphaOscillator,
    style: Rc<DotStyle>,
}

impl Dot {
    pub fn new(position: DVec2, style: Rc<DotStyle>, rng: &mut impl Rng) -> Self {
        let oscillator = AlphaOscillator::random(style.alpha_tick_count, rng);
        Self::with_oscillator(position, style, oscillator)
    }

    pub fn with_oscillator(position: DVec2, style: Rc<DotStyle>, oscillator: AlphaOscillator) -> Self {
        Self {
            position,
            magnitude: MIN_MAGNITUDE,
            angle: 0.0,
            alpha: 0.0,
            oscillator,
            style,
        }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Alpha from the last draw; 0 before the first one.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[inline]
    pub fn style(&self) -> &DotStyle {
        &self.style
    }

    /// Store a new magnitude, clamped to `[MIN_MAGNITUDE, max_magnitude]`.
    pub fn set_magnitude(&mut self, magnitude: f64) {
        let max = self.style.max_magnitude.max(MIN_MAGNITUDE);
        self.magnitude = if magnitude.is_nan() {
            MIN_MAGNITUDE
        } else {
            magnitude.clamp(MIN_MAGNITUDE, max)
        };
    }

    pub fn set_angle(&mut self, angle: f64) {
        if angle.is_finite() {
            self.angle = angle;
        }
    }

    /// Advance the alpha pulse one tick and stroke the dot.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S, hovered: bool) {
        self.alpha = self.oscillator.step();
        surface.stroke_segment(&Segment {
            center: self.position,
            angle: self.angle,
            length: self.magnitude,
            color: &self.style.color,
            line_width: self.style.line_width,
            alpha: if hovered { 1.0 } else { self.alpha },
        });
    }
}

impl Animatable for Dot {
    fn property(&self, property: Property) -> f64 {
        match property {
            Property::Magnitude => self.magnitude,
            Property::Angle => self.angle,
        }
    }

    fn set_property(&mut self, property: Property, value: f64) {
        match property {
            Property::Magnitude => self.set_magnitude(value),
            Property::Angle => self.set_angle(value),
        }
    }
}
