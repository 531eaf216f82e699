//! Clamp policy applied to every value a drag produces.
//!
//! | Component | Range |
//! |-----------|-------|
//! | handle x, endpoint x | `[0, 1]` |
//! | handle y | `[-margin, 1 + margin]` |
//! | endpoint y | `[0, 1]` or unbounded, see [`EndpointYBounds`] |
//!
//! `margin = outer_area_size / size`: the fraction of the unit square the
//! rendered outer area covers above and below the drawing.

use crate::value::{CurveValue, EndpointY, ExpandedValue, PointRole};
use serde::{Deserialize, Serialize};

/// How far endpoint y may travel when endpoints are editable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EndpointYBounds {
    /// Keep endpoints on the unit square.
    #[default]
    Unit,
    /// Leave endpoint y untouched.
    Unbounded,
}

/// What a component index stands for, as far as clamping is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentRole {
    HandleX,
    HandleY,
    EndpointX,
    EndpointY,
}

impl ComponentRole {
    /// Role of an expanded-layout index.
    pub fn of_index(index: usize) -> Option<Self> {
        let point = PointRole::of_index(index)?;
        let is_x = index == point.x_index();
        Some(match (point.is_endpoint(), is_x) {
            (true, true) => Self::EndpointX,
            (true, false) => Self::EndpointY,
            (false, true) => Self::HandleX,
            (false, false) => Self::HandleY,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampPolicy {
    pub margin: f64,
    pub endpoint_y: EndpointYBounds,
}

impl ClampPolicy {
    pub fn new(outer_area_size: f64, size: f64) -> Self {
        Self {
            margin: outer_area_size / size,
            endpoint_y: EndpointYBounds::Unit,
        }
    }

    pub fn with_endpoint_y(mut self, endpoint_y: EndpointYBounds) -> Self {
        self.endpoint_y = endpoint_y;
        self
    }

    /// Clamp a single component according to its role.
    pub fn clamp_component(&self, role: ComponentRole, value: f64) -> f64 {
        match role {
            ComponentRole::HandleX | ComponentRole::EndpointX => bound(value, 0.0, 1.0),
            ComponentRole::HandleY => bound(value, -self.margin, 1.0 + self.margin),
            ComponentRole::EndpointY => match self.endpoint_y {
                EndpointYBounds::Unit => bound(value, 0.0, 1.0),
                EndpointYBounds::Unbounded => value,
            },
        }
    }

    pub fn clamp_expanded(&self, value: &ExpandedValue) -> ExpandedValue {
        let mut next = *value;
        for (index, component) in next.iter_mut().enumerate() {
            if let Some(role) = ComponentRole::of_index(index) {
                *component = self.clamp_component(role, *component);
            }
        }
        next
    }

    /// Clamp only the handle components. Endpoints pass through unchanged.
    ///
    /// For the 4-number form, where endpoint y comes from configuration and
    /// is never part of a drag.
    pub fn clamp_handles(&self, value: &ExpandedValue) -> ExpandedValue {
        let mut next = *value;
        for (index, component) in next.iter_mut().enumerate() {
            if let Some(role @ (ComponentRole::HandleX | ComponentRole::HandleY)) =
                ComponentRole::of_index(index)
            {
                *component = self.clamp_component(role, *component);
            }
        }
        next
    }

    /// Clamp a value in either form; the result keeps the input's form.
    pub fn clamp_value(&self, value: &CurveValue) -> CurveValue {
        let expanded = value.to_expanded(EndpointY::default());
        CurveValue::project(value.form(), self.clamp_expanded(&expanded))
    }
}

/// Clamp with the default endpoint policy.
pub fn clamp(outer_area_size: f64, size: f64, value: &CurveValue) -> CurveValue {
    ClampPolicy::new(outer_area_size, size).clamp_value(value)
}

// `max`/`min` rather than `f64::clamp`: stays total when lo > hi.
fn bound(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}
