pub mod clamp;
pub mod config;
pub mod css;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod value;

pub use clamp::{ClampPolicy, ComponentRole, EndpointYBounds, clamp};
pub use config::EditorConfig;
pub use css::{format_timing_function, parse_timing_function, preset_name};
pub use easing::Easing;
pub use error::{ConfigError, ParseError, ValueError};
pub use geometry::{CanvasFrame, CurveGeometry, to_normalized, to_pixel};
pub use value::*;

// Re-export kurbo types so downstream crates share one geometry vocabulary
pub use kurbo::{Point, Vec2};
