//! Editor configuration.
//!
//! Keys are camelCase so hosts can pass the same option object they already
//! use on the UI side. Every key is optional.

use crate::clamp::{ClampPolicy, EndpointYBounds};
use crate::error::ConfigError;
use crate::geometry::CanvasFrame;
use crate::value::{EndpointY, ValueForm};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Edge length of the drawing square, in pixels.
    pub size: f64,
    /// Pixels reserved above and below the square for handle-y overshoot.
    pub outer_area_size: f64,
    pub stroke_width: f64,
    /// Expose the 8-number form with draggable endpoints.
    pub allow_endpoint_editing: bool,
    /// Let endpoint drags move x as well as y.
    pub endpoint_x_draggable: bool,
    pub endpoint_y_bounds: EndpointYBounds,
    /// Implicit start endpoint y, used only by the 4-number form.
    pub start_point_y: f64,
    /// Implicit end endpoint y, used only by the 4-number form.
    pub end_point_y: f64,
    pub enable_preview: bool,
    /// Pick radius around each draggable point, in pixels.
    pub hit_radius: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            outer_area_size: 50.0,
            stroke_width: 2.0,
            allow_endpoint_editing: false,
            endpoint_x_draggable: false,
            endpoint_y_bounds: EndpointYBounds::Unit,
            start_point_y: 0.0,
            end_point_y: 1.0,
            enable_preview: false,
            hit_radius: 10.0,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON option object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("loaded editor config: {config:?}");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if !(self.outer_area_size.is_finite() && self.outer_area_size >= 0.0) {
            return Err(ConfigError::InvalidOuterArea(self.outer_area_size));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke_width));
        }
        if !(self.hit_radius.is_finite() && self.hit_radius >= 0.0) {
            return Err(ConfigError::InvalidHitRadius(self.hit_radius));
        }
        for (name, value) in [
            ("startPointY", self.start_point_y),
            ("endPointY", self.end_point_y),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteEndpoint { name, value });
            }
        }
        Ok(())
    }

    pub fn value_form(&self) -> ValueForm {
        if self.allow_endpoint_editing {
            ValueForm::Expanded
        } else {
            ValueForm::Basic
        }
    }

    pub fn endpoints(&self) -> EndpointY {
        EndpointY {
            start: self.start_point_y,
            end: self.end_point_y,
        }
    }

    pub fn clamp_policy(&self) -> ClampPolicy {
        ClampPolicy::new(self.outer_area_size, self.size).with_endpoint_y(self.endpoint_y_bounds)
    }

    pub fn frame(&self) -> CanvasFrame {
        CanvasFrame {
            size: self.size,
            outer_area_size: self.outer_area_size,
            stroke_width: self.stroke_width,
        }
    }
}
