use super::config::{ConfigError, FieldConfig};
use super::constants::{MIN_MAGNITUDE, MIN_POINTER_DISTANCE};
use super::dot::{DotStyle, Surface};
use super::easing::Easing;
use super::grid::DotGrid;
use super::tween::{smooth_lag, Property, TweenTarget, Tweener};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPhase {
    /// No grid yet (the canvas has not been measured).
    Idle,
    Ready,
}

/// Last known pointer position in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: DVec2,
    pub moved: bool,
    pub over: bool,
}

impl PointerState {
    pub fn move_to(&mut self, position: DVec2) {
        self.position = position;
        self.moved = true;
    }

    /// Consume the moved flag.
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }
}

/// Angle (radians) and clamped magnitude a dot at `dot` should take for a
/// pointer at `pointer`.
pub fn pointer_target(dot: DVec2, pointer: DVec2, radius: f64, max_magnitude: f64) -> (f64, f64) {
    let d = pointer - dot;
    let distance = d.length().max(MIN_POINTER_DISTANCE);
    let angle = d.y.atan2(d.x);
    let magnitude = (radius / distance).clamp(MIN_MAGNITUDE, max_magnitude.max(MIN_MAGNITUDE));
    (angle, magnitude)
}

/// Everything the frame loop and the input handlers share.
pub struct FieldState {
    config: FieldConfig,
    style: Rc<DotStyle>,
    grid: Option<DotGrid>,
    tweens: Tweener,
    pointer: PointerState,
    size: (f64, f64),
    rng: StdRng,
}

impl FieldState {
    pub fn new(config: FieldConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            style: Rc::new(config.dot_style()),
            config,
            grid: None,
            tweens: Tweener::new(),
            pointer: PointerState::default(),
            size: (0.0, 0.0),
            rng,
        })
    }

    pub fn with_seed(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn phase(&self) -> FieldPhase {
        if self.grid.is_some() {
            FieldPhase::Ready
        } else {
            FieldPhase::Idle
        }
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> Option<&DotGrid> {
        self.grid.as_ref()
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn tweens(&self) -> &Tweener {
        &self.tweens
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    /// Record new canvas dimensions and rebuild the grid when they changed.
    /// Returns whether a rebuild happened.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if !(width > 0.0 && height > 0.0) {
            return false;
        }
        if self.grid.is_some() && self.size == (width, height) {
            return false;
        }
        self.size = (width, height);
        self.rebuild();
        true
    }

    /// Validate and apply new options. The grid is rebuilt only if its layout
    /// or appearance changed.
    pub fn set_config(&mut self, config: FieldConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let rebuild = self.config.needs_rebuild(&config);
        self.config = config;
        if rebuild {
            self.style = Rc::new(self.config.dot_style());
            if self.size.0 > 0.0 && self.size.1 > 0.0 {
                self.rebuild();
            }
        }
        Ok(())
    }

    fn rebuild(&mut self) {
        let (width, height) = self.size;
        let grid = DotGrid::build(width, height, self.config.dot_spacing, self.style.clone(), &mut self.rng);
        log::debug!(
            "[grid] rebuilt {}x{} px rows={} cols={}",
            width,
            height,
            grid.rows(),
            grid.cols()
        );
        // in-flight tweens point at the old dots
        self.tweens.clear();
        self.grid = Some(grid);
    }

    pub fn pointer_enter(&mut self) {
        self.pointer.over = true;
    }

    pub fn pointer_move(&mut self, position: DVec2) {
        self.pointer.move_to(position);
    }

    pub fn touch_start(&mut self, position: DVec2) {
        self.pointer.over = true;
        self.pointer.move_to(position);
    }

    /// Pointer left the canvas or the touch ended: relax every dot to rest.
    pub fn pointer_leave(&mut self) {
        self.pointer.over = false;
        let Some(grid) = self.grid.as_ref() else {
            return;
        };
        let duration = self.config.duration_sec;
        for index in 0..grid.len() {
            self.tweens.to(
                grid.dots(),
                index,
                Property::Magnitude,
                TweenTarget::Value(MIN_MAGNITUDE),
                duration,
                Easing::default(),
            );
            self.tweens.to(
                grid.dots(),
                index,
                Property::Angle,
                TweenTarget::shortest_radians(0.0),
                duration,
                Easing::default(),
            );
        }
    }

    /// Point every dot at the current pointer position.
    pub fn retarget(&mut self) {
        let Some(grid) = self.grid.as_ref() else {
            return;
        };
        let pointer = self.pointer.position;
        let FieldConfig {
            radius,
            max_magnitude,
            duration_sec,
            ..
        } = self.config;
        for (index, dot) in grid.dots().iter().enumerate() {
            let (angle, magnitude) = pointer_target(dot.position(), pointer, radius, max_magnitude);
            self.tweens.to(
                grid.dots(),
                index,
                Property::Magnitude,
                TweenTarget::Value(magnitude),
                duration_sec,
                Easing::elastic_out(),
            );
            self.tweens.to(
                grid.dots(),
                index,
                Property::Angle,
                TweenTarget::shortest_radians(angle),
                duration_sec,
                Easing::elastic_out(),
            );
        }
    }

    /// One display frame: consume pointer movement, advance tweens, redraw.
    pub fn frame<S: Surface + ?Sized>(&mut self, dt_sec: f64, surface: &mut S) {
        if self.pointer.over && self.pointer.take_moved() {
            self.retarget();
        }

        let hovered = self.pointer.over;
        let (width, height) = self.size;
        surface.clear(width, height);

        let Some(grid) = self.grid.as_mut() else {
            return;
        };
        self.tweens.advance(smooth_lag(dt_sec), grid.dots_mut());
        for dot in grid.dots_mut() {
            dot.draw(&mut *surface, hovered);
        }
    }
}
