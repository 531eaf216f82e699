//! Geometry mapping: normalized curve values ↔ pixel coordinates.
//!
//! Normalized space has y growing upward (curve convention); pixel space has
//! y growing downward. For a drawing of edge length `size`:
//!
//! ```text
//! pixel_x = size * x
//! pixel_y = size * (1 - y)
//! ```
//!
//! Everything here is pure. Out-of-range values are allowed and simply land
//! outside the nominal square, inside the outer area the host renders.

use crate::value::{CurveValue, ExpandedValue, PointRole};
use kurbo::{CubicBez, Line, Point, Rect, Vec2};

/// Map a normalized coordinate to curve-space pixels.
pub fn to_pixel(size: f64, x: f64, y: f64) -> Point {
    Point::new(size * x, size * (1.0 - y))
}

/// Inverse of [`to_pixel`].
pub fn to_normalized(size: f64, point: Point) -> (f64, f64) {
    (point.x / size, 1.0 - point.y / size)
}

// ─── Curve geometry ──────────────────────────────────────────────────────

/// Pixel positions of the four control points, in curve space
/// (origin at the top-left of the unit square).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveGeometry {
    pub start_point: Point,
    pub start_handle: Point,
    pub end_handle: Point,
    pub end_point: Point,
}

impl CurveGeometry {
    /// Geometry of a host-facing value.
    ///
    /// A `Basic` value places its endpoints at the corners `(0, size)` and
    /// `(size, 0)`.
    pub fn from_value(size: f64, value: &CurveValue) -> Self {
        match value {
            CurveValue::Basic([h1x, h1y, h2x, h2y]) => Self {
                start_point: Point::new(0.0, size),
                start_handle: to_pixel(size, *h1x, *h1y),
                end_handle: to_pixel(size, *h2x, *h2y),
                end_point: Point::new(size, 0.0),
            },
            CurveValue::Expanded(expanded) => Self::from_expanded(size, expanded),
        }
    }

    /// Geometry of a canonical 8-number value.
    pub fn from_expanded(size: f64, value: &ExpandedValue) -> Self {
        let at = |role: PointRole| to_pixel(size, value[role.x_index()], value[role.y_index()]);
        Self {
            start_point: at(PointRole::StartPoint),
            start_handle: at(PointRole::StartHandle),
            end_handle: at(PointRole::EndHandle),
            end_point: at(PointRole::EndPoint),
        }
    }

    pub fn point(&self, role: PointRole) -> Point {
        match role {
            PointRole::StartPoint => self.start_point,
            PointRole::StartHandle => self.start_handle,
            PointRole::EndHandle => self.end_handle,
            PointRole::EndPoint => self.end_point,
        }
    }

    pub fn to_cubic(&self) -> CubicBez {
        CubicBez::new(
            self.start_point,
            self.start_handle,
            self.end_handle,
            self.end_point,
        )
    }

    /// The two lines joining each endpoint to its handle.
    pub fn handle_lines(&self) -> [Line; 2] {
        [
            Line::new(self.start_point, self.start_handle),
            Line::new(self.end_point, self.end_handle),
        ]
    }

    /// SVG path data for the curve: `M x,y C x,y x,y x,y`.
    pub fn svg_path_data(&self) -> String {
        let p = |pt: Point| format!("{},{}", pt.x, pt.y);
        format!(
            "M{} C{} {} {}",
            p(self.start_point),
            p(self.start_handle),
            p(self.end_handle),
            p(self.end_point)
        )
    }

    /// Translate every point by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            start_point: self.start_point + offset,
            start_handle: self.start_handle + offset,
            end_handle: self.end_handle + offset,
            end_point: self.end_point + offset,
        }
    }
}

// ─── Canvas frame ────────────────────────────────────────────────────────

/// The drawing surface around the unit square.
///
/// The outer area sits above and below the square so handle y can overshoot;
/// the stroke width insets everything so lines at the edges are not cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    pub size: f64,
    pub outer_area_size: f64,
    pub stroke_width: f64,
}

impl CanvasFrame {
    pub fn width(&self) -> f64 {
        self.size + self.stroke_width * 2.0
    }

    pub fn height(&self) -> f64 {
        self.size + self.stroke_width * 2.0 + self.outer_area_size * 2.0
    }

    /// Offset of the curve-space origin inside the canvas.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.stroke_width, self.outer_area_size + self.stroke_width)
    }

    pub fn to_canvas(&self, point: Point) -> Point {
        point + self.origin()
    }

    pub fn from_canvas(&self, point: Point) -> Point {
        point - self.origin()
    }

    /// The nominal unit square, in canvas coordinates.
    pub fn inner_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin().to_point(), (self.size, self.size))
    }

    /// The whole canvas, outer area included.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }
}
