pub mod config;
pub mod constants;
pub mod dot;
pub mod easing;
pub mod field;
pub mod grid;
pub mod rotation;
pub mod tween;

pub use config::{ConfigError, FieldConfig};
pub use field::FieldState;
