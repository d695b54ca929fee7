use super::constants::{LAG_ADJUSTED_SEC, LAG_THRESHOLD_SEC};
use super::easing::Easing;
use super::rotation::{rotation_delta, AngleUnit, RotationTarget};

/// Animated fields of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Magnitude,
    Angle,
}

/// Anything whose numeric fields a [`Tweener`] can drive.
pub trait Animatable {
    fn property(&self, property: Property) -> f64;
    fn set_property(&mut self, property: Property, value: f64);
}

/// Destination of a tween, which also picks how the delta is computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenTarget {
    /// Plain numeric difference `end - start`.
    Value(f64),
    /// Directional rotation (shortest arc, forced turn, relative offsets).
    Rotation { target: RotationTarget, unit: AngleUnit },
}

impl TweenTarget {
    pub fn shortest_radians(angle: f64) -> Self {
        TweenTarget::Rotation {
            target: RotationTarget::shortest(angle),
            unit: AngleUnit::Radians,
        }
    }

    /// Returns `(delta, end)`, or `None` when there is nothing to animate.
    pub fn resolve(&self, start: f64) -> Option<(f64, f64)> {
        match self {
            TweenTarget::Value(end) => Some((end - start, *end)),
            TweenTarget::Rotation { target, unit } => {
                rotation_delta(start, target, *unit).map(|r| (r.delta, r.end))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub index: usize,
    pub property: Property,
    start: f64,
    delta: f64,
    end: f64,
    duration: f64,
    elapsed: f64,
    easing: Easing,
}

impl Tween {
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    // Finished tweens land on the literal end value, not start + delta
    fn value(&self) -> f64 {
        let p = self.progress();
        if p >= 1.0 {
            self.end
        } else {
            self.start + self.delta * self.easing.apply(p)
        }
    }
}

/// Minimal tween engine: one running tween per (entity index, property).
#[derive(Debug, Default)]
pub struct Tweener {
    tweens: Vec<Tween>,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `property` of `targets[index]` toward `target`.
    ///
    /// Any running tween on the same field is replaced. Returns `false` when the
    /// target resolves to no motion (or the index is out of range) and nothing
    /// was scheduled.
    pub fn to<T: Animatable>(
        &mut self,
        targets: &[T],
        index: usize,
        property: Property,
        target: TweenTarget,
        duration: f64,
        easing: Easing,
    ) -> bool {
        self.kill(index, property);
        let Some(entity) = targets.get(index) else {
            return false;
        };
        let start = entity.property(property);
        let Some((delta, end)) = target.resolve(start) else {
            return false;
        };
        self.tweens.push(Tween {
            index,
            property,
            start,
            delta,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        });
        true
    }

    /// Move every tween forward by `dt` seconds and write the eased values.
    pub fn advance<T: Animatable>(&mut self, dt: f64, targets: &mut [T]) {
        let dt = dt.max(0.0);
        self.tweens.retain_mut(|tween| {
            let Some(entity) = targets.get_mut(tween.index) else {
                return false;
            };
            tween.elapsed += dt;
            entity.set_property(tween.property, tween.value());
            tween.progress() < 1.0
        });
    }

    pub fn kill(&mut self, index: usize, property: Property) {
        self.tweens
            .retain(|t| !(t.index == index && t.property == property));
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    pub fn get(&self, index: usize, property: Property) -> Option<&Tween> {
        self.tweens
            .iter()
            .find(|t| t.index == index && t.property == property)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

/// Replace long frame gaps with a single short step so tweens don't jump.
#[inline]
pub fn smooth_lag(dt_sec: f64) -> f64 {
    if dt_sec > LAG_THRESHOLD_SEC {
        LAG_ADJUSTED_SEC
    } else {
        dt_sec.max(0.0)
    }
}
