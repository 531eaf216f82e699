//! Curve value model.
//!
//! The curve is always a cubic Bezier with four control points. Hosts see it
//! either as the 4-number `Basic` form (handles only, endpoints implicit) or
//! the 8-number `Expanded` form (endpoints included). All geometry, clamping,
//! and drag arithmetic runs on the 8-number layout; `Basic` is a projection.
//!
//! ```text
//! Basic     [h1x, h1y, h2x, h2y]
//! Expanded  [p1x, p1y, h1x, h1y, h2x, h2y, p2x, p2y]
//! ```

use crate::error::ValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handles only: `[h1x, h1y, h2x, h2y]`.
pub type BasicValue = [f64; 4];

/// Endpoints and handles: `[p1x, p1y, h1x, h1y, h2x, h2y, p2x, p2y]`.
pub type ExpandedValue = [f64; 8];

/// Starting curve of a fresh editor (a gentle ease-in).
pub const DEFAULT_VALUE: BasicValue = [0.4, 0.0, 1.0, 0.6];

// ─── Component indices (expanded layout) ─────────────────────────────────

pub const P1X: usize = 0;
pub const P1Y: usize = 1;
pub const H1X: usize = 2;
pub const H1Y: usize = 3;
pub const H2X: usize = 4;
pub const H2Y: usize = 5;
pub const P2X: usize = 6;
pub const P2Y: usize = 7;

// ─── Value form ──────────────────────────────────────────────────────────

/// Which shape of value the host reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueForm {
    Basic,
    Expanded,
}

impl ValueForm {
    /// Number of components in this form.
    pub const fn component_count(self) -> usize {
        match self {
            Self::Basic => 4,
            Self::Expanded => 8,
        }
    }
}

impl fmt::Display for ValueForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic (4-number)"),
            Self::Expanded => f.write_str("expanded (8-number)"),
        }
    }
}

// ─── Implicit endpoints ──────────────────────────────────────────────────

/// The y positions of the endpoints a `Basic` value leaves implicit.
///
/// Endpoint x is always pinned to 0 and 1 when expanding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointY {
    pub start: f64,
    pub end: f64,
}

impl Default for EndpointY {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
        }
    }
}

/// Insert endpoints around the handle components.
pub fn expand(basic: BasicValue, endpoints: EndpointY) -> ExpandedValue {
    let [h1x, h1y, h2x, h2y] = basic;
    [0.0, endpoints.start, h1x, h1y, h2x, h2y, 1.0, endpoints.end]
}

/// Strip the endpoint components, keeping the handles untouched.
pub fn contract(expanded: ExpandedValue) -> BasicValue {
    [expanded[H1X], expanded[H1Y], expanded[H2X], expanded[H2Y]]
}

// ─── Curve value ─────────────────────────────────────────────────────────

/// A curve value in either host-facing form.
///
/// Serializes as a flat number array; deserialization goes through
/// [`CurveValue::from_slice`] so malformed arrays are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub enum CurveValue {
    Basic(BasicValue),
    Expanded(ExpandedValue),
}

impl CurveValue {
    /// Build a value from an untyped slice, checking length and finiteness.
    pub fn from_slice(values: &[f64]) -> Result<Self, ValueError> {
        let value = match values.len() {
            4 => {
                let mut basic = [0.0; 4];
                basic.copy_from_slice(values);
                Self::Basic(basic)
            }
            8 => {
                let mut expanded = [0.0; 8];
                expanded.copy_from_slice(values);
                Self::Expanded(expanded)
            }
            len => return Err(ValueError::WrongLength { len }),
        };
        value.validate()?;
        Ok(value)
    }

    /// Reject non-finite components.
    pub fn validate(&self) -> Result<(), ValueError> {
        match self
            .as_slice()
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            Some((index, &value)) => Err(ValueError::NonFinite { index, value }),
            None => Ok(()),
        }
    }

    pub fn form(&self) -> ValueForm {
        match self {
            Self::Basic(_) => ValueForm::Basic,
            Self::Expanded(_) => ValueForm::Expanded,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Basic(v) => v,
            Self::Expanded(v) => v,
        }
    }

    /// The canonical 8-number layout. `endpoints` only applies to `Basic`.
    pub fn to_expanded(&self, endpoints: EndpointY) -> ExpandedValue {
        match *self {
            Self::Basic(basic) => expand(basic, endpoints),
            Self::Expanded(expanded) => expanded,
        }
    }

    /// The handle components, whatever the form.
    pub fn handles(&self) -> BasicValue {
        match *self {
            Self::Basic(basic) => basic,
            Self::Expanded(expanded) => contract(expanded),
        }
    }

    /// Project a canonical value back into `form`.
    pub fn project(form: ValueForm, expanded: ExpandedValue) -> Self {
        match form {
            ValueForm::Basic => Self::Basic(contract(expanded)),
            ValueForm::Expanded => Self::Expanded(expanded),
        }
    }
}

impl From<BasicValue> for CurveValue {
    fn from(value: BasicValue) -> Self {
        Self::Basic(value)
    }
}

impl From<ExpandedValue> for CurveValue {
    fn from(value: ExpandedValue) -> Self {
        Self::Expanded(value)
    }
}

impl TryFrom<Vec<f64>> for CurveValue {
    type Error = ValueError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl From<CurveValue> for Vec<f64> {
    fn from(value: CurveValue) -> Self {
        value.as_slice().to_vec()
    }
}

// ─── Point roles ─────────────────────────────────────────────────────────

/// The four logical control points of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointRole {
    StartPoint,
    StartHandle,
    EndHandle,
    EndPoint,
}

impl PointRole {
    /// All roles in curve order.
    pub const ALL: [PointRole; 4] = [
        PointRole::StartPoint,
        PointRole::StartHandle,
        PointRole::EndHandle,
        PointRole::EndPoint,
    ];

    /// Expanded-layout index of this point's x component.
    pub const fn x_index(self) -> usize {
        match self {
            Self::StartPoint => P1X,
            Self::StartHandle => H1X,
            Self::EndHandle => H2X,
            Self::EndPoint => P2X,
        }
    }

    /// Expanded-layout index of this point's y component.
    pub const fn y_index(self) -> usize {
        self.x_index() + 1
    }

    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::StartPoint | Self::EndPoint)
    }

    pub const fn is_handle(self) -> bool {
        !self.is_endpoint()
    }

    /// Position in [`PointRole::ALL`].
    pub const fn ordinal(self) -> usize {
        self.x_index() / 2
    }

    /// The role owning an expanded-layout component index.
    pub fn of_index(index: usize) -> Option<Self> {
        Self::ALL.get(index / 2).copied()
    }
}

impl fmt::Display for PointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StartPoint => "start point",
            Self::StartHandle => "start handle",
            Self::EndHandle => "end handle",
            Self::EndPoint => "end point",
        };
        f.write_str(name)
    }
}
