use super::constants::{DEGREES_CAP, RADIANS_CAP, ROTATION_EPSILON};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unit of the angle being rotated; selects the size of a full turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    #[inline]
    pub fn cap(self) -> f64 {
        match self {
            AngleUnit::Degrees => DEGREES_CAP,
            AngleUnit::Radians => RADIANS_CAP,
        }
    }
}

/// Where a rotation should end: an absolute angle or an offset from the start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TargetValue {
    Absolute(f64),
    Relative(f64),
}

impl TargetValue {
    #[inline]
    pub fn resolve(self, start: f64) -> f64 {
        match self {
            TargetValue::Absolute(v) => v,
            TargetValue::Relative(offset) => start + offset,
        }
    }
}

/// Forced direction of travel, for building targets in code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

/// A rotation target plus its directional modifiers.
///
/// The textual form mirrors the classic tween syntax: `"10_short"`,
/// `"+=90_cw"`, `"-=45"`, `"350_short_ccw"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationTarget {
    pub value: TargetValue,
    pub short: bool,
    /// Force a positive delta when the reduced one is negative.
    pub cw: bool,
    /// Force a negative delta when the reduced one is positive. Checked only
    /// when the `cw` rule did not apply.
    pub ccw: bool,
}

impl RotationTarget {
    pub fn absolute(value: f64) -> Self {
        Self {
            value: TargetValue::Absolute(value),
            short: false,
            cw: false,
            ccw: false,
        }
    }

    pub fn relative(offset: f64) -> Self {
        Self {
            value: TargetValue::Relative(offset),
            short: false,
            cw: false,
            ccw: false,
        }
    }

    /// Absolute target reached through the shorter arc.
    pub fn shortest(value: f64) -> Self {
        Self::absolute(value).with_short()
    }

    pub fn with_short(mut self) -> Self {
        self.short = true;
        self
    }

    pub fn with_turn(mut self, turn: Turn) -> Self {
        match turn {
            Turn::Clockwise => self.cw = true,
            Turn::CounterClockwise => self.ccw = true,
        }
        self
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RotationParseError {
    #[error("empty rotation target")]
    Empty,
    #[error("invalid rotation value `{0}`")]
    InvalidValue(String),
    #[error("unknown rotation modifier `{0}`")]
    UnknownModifier(String),
}

impl FromStr for RotationTarget {
    type Err = RotationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.trim().split('_');
        let head = tokens.next().unwrap_or_default();
        if head.is_empty() {
            return Err(RotationParseError::Empty);
        }

        let value = match head.as_bytes() {
            [sign @ (b'+' | b'-'), b'=', ..] => {
                let offset: f64 = head[2..]
                    .parse()
                    .map_err(|_| RotationParseError::InvalidValue(head.to_string()))?;
                TargetValue::Relative(if *sign == b'-' { -offset } else { offset })
            }
            _ => TargetValue::Absolute(
                head.parse()
                    .map_err(|_| RotationParseError::InvalidValue(head.to_string()))?,
            ),
        };

        let mut target = RotationTarget {
            value,
            short: false,
            cw: false,
            ccw: false,
        };
        for token in tokens {
            match token {
                "short" => target.short = true,
                "cw" => target.cw = true,
                "ccw" => target.ccw = true,
                other => return Err(RotationParseError::UnknownModifier(other.to_string())),
            }
        }
        Ok(target)
    }
}

impl fmt::Display for RotationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            TargetValue::Absolute(v) => write!(f, "{v}")?,
            TargetValue::Relative(o) if o < 0.0 => write!(f, "-={}", -o)?,
            TargetValue::Relative(o) => write!(f, "+={o}")?,
        }
        if self.short {
            f.write_str("_short")?;
        }
        if self.cw {
            f.write_str("_cw")?;
        }
        if self.ccw {
            f.write_str("_ccw")?;
        }
        Ok(())
    }
}

/// Resolved rotation: the signed change to play out and the value to land on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationDelta {
    pub delta: f64,
    pub end: f64,
}

/// Compute the signed delta from `start` toward `target`.
///
/// Returns `None` when the delta is within [`ROTATION_EPSILON`] of zero, in
/// which case the property should not be animated at all.
pub fn rotation_delta(start: f64, target: &RotationTarget, unit: AngleUnit) -> Option<RotationDelta> {
    let cap = unit.cap();
    let end = target.value.resolve(start);
    let mut dif = end - start;

    if target.short {
        // `%` keeps the dividend's sign; an exact half turn flips direction
        dif %= cap;
        if dif != dif % (cap / 2.0) {
            dif = if dif < 0.0 { dif + cap } else { dif - cap };
        }
    }

    if target.cw && dif < 0.0 {
        dif = dif.rem_euclid(cap) - (dif / cap).trunc() * cap;
    } else if target.ccw && dif > 0.0 {
        let rem = dif % cap;
        let wrapped = if rem == 0.0 { 0.0 } else { rem - cap };
        dif = wrapped - (dif / cap).trunc() * cap;
    }

    (dif.abs() > ROTATION_EPSILON).then_some(RotationDelta { delta: dif, end })
}
