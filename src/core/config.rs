use super::constants::*;
use super::dot::DotStyle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing options. Keys are camelCase on the JS side; any key left out
/// takes its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    /// Grid pitch in CSS pixels.
    pub dot_spacing: f64,
    pub dot_color: String,
    pub line_width: f64,
    /// Draw calls per half cycle of the idle alpha pulse.
    pub alpha_tick_count: u32,
    /// Longest stroke a dot can stretch to.
    pub max_magnitude: f64,
    /// Falloff distance: magnitude is `radius / distance`.
    pub radius: f64,
    pub duration_sec: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            dot_spacing: DEFAULT_DOT_SPACING,
            dot_color: DEFAULT_DOT_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            alpha_tick_count: DEFAULT_ALPHA_TICK_COUNT,
            max_magnitude: DEFAULT_MAX_MAGNITUDE,
            radius: DEFAULT_RADIUS,
            duration_sec: DEFAULT_DURATION_SEC,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("`{field}` must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`alphaTickCount` must be at least 1")]
    ZeroAlphaTicks,
    #[error("`dotColor` must not be empty")]
    EmptyColor,
    #[error("`maxMagnitude` must be at least {min}, got {value}")]
    MaxMagnitudeTooSmall { min: f64, value: f64 },
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("dotSpacing", self.dot_spacing),
            ("lineWidth", self.line_width),
            ("radius", self.radius),
            ("durationSec", self.duration_sec),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.alpha_tick_count == 0 {
            return Err(ConfigError::ZeroAlphaTicks);
        }
        if self.dot_color.trim().is_empty() {
            return Err(ConfigError::EmptyColor);
        }
        if !(self.max_magnitude.is_finite() && self.max_magnitude >= MIN_MAGNITUDE) {
            return Err(ConfigError::MaxMagnitudeTooSmall {
                min: MIN_MAGNITUDE,
                value: self.max_magnitude,
            });
        }
        Ok(())
    }

    pub fn dot_style(&self) -> DotStyle {
        DotStyle {
            color: self.dot_color.clone(),
            line_width: self.line_width,
            alpha_tick_count: self.alpha_tick_count,
            max_magnitude: self.max_magnitude,
        }
    }

    /// Whether switching to `other` invalidates the current grid.
    pub fn needs_rebuild(&self, other: &FieldConfig) -> bool {
        self.dot_spacing != other.dot_spacing || self.dot_style() != other.dot_style()
    }
}
