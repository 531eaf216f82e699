//! Contract-violation errors raised at the crate boundary.
//!
//! Nothing in the interaction path returns these: they are produced when a
//! host hands over a malformed value, an invalid configuration, or timing
//! function text that cannot be parsed.

use crate::value::ValueForm;
use thiserror::Error;

/// A curve value that cannot be accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("curve value must have 4 or 8 components, got {len}")]
    WrongLength { len: usize },

    #[error("curve value component {index} is not finite ({value})")]
    NonFinite { index: usize, value: f64 },

    #[error("expected a {expected} curve value, got a {found} one")]
    FormMismatch { expected: ValueForm, found: ValueForm },
}

/// An editor configuration that must be rejected before any drag begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("size must be finite and greater than zero, got {0}")]
    InvalidSize(f64),

    #[error("outer area size must be finite and non-negative, got {0}")]
    InvalidOuterArea(f64),

    #[error("stroke width must be finite and non-negative, got {0}")]
    InvalidStrokeWidth(f64),

    #[error("hit radius must be finite and non-negative, got {0}")]
    InvalidHitRadius(f64),

    #[error("{name} must be finite, got {value}")]
    NonFiniteEndpoint { name: &'static str, value: f64 },

    #[error("invalid editor configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Timing-function text that is not a usable cubic Bezier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid timing function {input:?}: {message}")]
    Syntax { input: String, message: String },

    #[error("x component {index} of a timing function must lie in [0, 1], got {value}")]
    XOutOfRange { index: usize, value: f64 },

    #[error("timing function component {index} is not finite")]
    NonFinite { index: usize },
}
