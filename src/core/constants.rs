/// Motion and layout tuning constants for the dot field.
///
/// Defaults for user options live here too so the config layer and the tests
/// agree on them.
// Shortest stroke a dot can have; keeps the round cap visible at rest.
pub const MIN_MAGNITUDE: f64 = 0.001;

// Angular deltas at or below this are not animated
pub const ROTATION_EPSILON: f64 = 1e-6;

// Full turn in each angle unit
pub const DEGREES_CAP: f64 = 360.0;
pub const RADIANS_CAP: f64 = std::f64::consts::TAU;

// Pointer distances are floored to this (pixels)
pub const MIN_POINTER_DISTANCE: f64 = 1.0;

// elastic.out(amplitude, period) used while tracking the pointer
pub const ELASTIC_AMPLITUDE: f64 = 1.0;
pub const ELASTIC_PERIOD: f64 = 0.4;

// Frame deltas above the threshold are replaced (tab switches, debugger pauses)
pub const LAG_THRESHOLD_SEC: f64 = 0.5;
pub const LAG_ADJUSTED_SEC: f64 = 1.0 / 30.0;

// Option defaults
pub const DEFAULT_DOT_SPACING: f64 = 24.0;
pub const DEFAULT_DOT_COLOR: &str = "#9aa4b2";
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_ALPHA_TICK_COUNT: u32 = 90;
pub const DEFAULT_MAX_MAGNITUDE: f64 = 20.0;
pub const DEFAULT_RADIUS: f64 = 1200.0;
pub const DEFAULT_DURATION_SEC: f64 = 0.8;
