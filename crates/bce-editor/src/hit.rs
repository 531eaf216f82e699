//! Hit testing: canvas position → draggable point lookup.
//!
//! Handles are painted above endpoints, so on an exact tie the handle wins.

use bce_core::{CurveGeometry, PointRole};
use kurbo::Point;

/// Find the draggable point nearest to `pos` within `radius`.
/// Returns `None` if nothing is close enough (background).
///
/// `pos` and `geometry` must share a coordinate space.
pub fn hit_test(
    geometry: &CurveGeometry,
    candidates: impl IntoIterator<Item = PointRole>,
    pos: Point,
    radius: f64,
) -> Option<PointRole> {
    candidates
        .into_iter()
        .map(|role| (role, geometry.point(role).distance(pos)))
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|(a_role, a), (b_role, b)| {
            a.total_cmp(b)
                .then_with(|| a_role.is_endpoint().cmp(&b_role.is_endpoint()))
        })
        .map(|(role, _)| role)
}
