//! Evaluate a curve as an easing function: progress `x` → eased `y`.
//!
//! Hosts use this to drive the preview dot along the curve at the timing the
//! curve describes.

use crate::value::{CurveValue, EndpointY};
use kurbo::{CubicBez, ParamCurve, ParamCurveDeriv, Point};

const EPSILON: f64 = 1e-7;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    curve: CubicBez,
}

impl Easing {
    /// Easing in normalized space. `Basic` values use endpoints `(0,0)`/`(1,1)`.
    pub fn new(value: &CurveValue) -> Self {
        let v = value.to_expanded(EndpointY::default());
        Self {
            curve: CubicBez::new(
                Point::new(v[0], v[1]),
                Point::new(v[2], v[3]),
                Point::new(v[4], v[5]),
                Point::new(v[6], v[7]),
            ),
        }
    }

    /// Eased output for progress `x`; saturates outside the endpoint x span.
    pub fn y_at(&self, x: f64) -> f64 {
        let CubicBez { p0, p3, .. } = self.curve;
        if x <= p0.x {
            return p0.y;
        }
        if x >= p3.x {
            return p3.y;
        }
        self.curve.eval(self.solve_t(x)).y
    }

    /// Curve parameter whose x is `x`: Newton first, bisection as fallback.
    fn solve_t(&self, x: f64) -> f64 {
        let CubicBez { p0, p3, .. } = self.curve;
        let deriv = self.curve.deriv();

        let mut t = (x - p0.x) / (p3.x - p0.x);
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.curve.eval(t).x - x;
            if err.abs() < EPSILON {
                return t;
            }
            let slope = deriv.eval(t).x;
            if slope.abs() < EPSILON {
                break;
            }
            t -= err / slope;
            if !(0.0..=1.0).contains(&t) {
                break;
            }
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..BISECTION_ITERATIONS {
            t = (lo + hi) * 0.5;
            let current = self.curve.eval(t).x;
            if (current - x).abs() < EPSILON {
                break;
            }
            if current < x {
                lo = t;
            } else {
                hi = t;
            }
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::{EASE, EASE_IN_OUT, LINEAR};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn linear_is_identity() {
        let easing = Easing::new(&CurveValue::Basic(LINEAR));
        for x in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            assert!(close(easing.y_at(x), x), "linear({x}) = {}", easing.y_at(x));
        }
    }

    #[test]
    fn saturates_outside_unit_interval() {
        let easing = Easing::new(&CurveValue::Basic(EASE));
        assert_eq!(easing.y_at(-1.0), 0.0);
        assert_eq!(easing.y_at(2.0), 1.0);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let easing = Easing::new(&CurveValue::Basic(EASE_IN_OUT));
        assert!(close(easing.y_at(0.5), 0.5));
        assert!(close(easing.y_at(0.2) + easing.y_at(0.8), 1.0));
        assert!(easing.y_at(0.2) < 0.2);
    }

    #[test]
    fn overshoot_goes_past_one() {
        let easing = Easing::new(&CurveValue::Basic([0.34, 1.56, 0.64, 1.0]));
        let peak = (1..100)
            .map(|i| easing.y_at(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "expected overshoot, peak was {peak}");
    }

    #[test]
    fn expanded_endpoints_shift_output() {
        let easing = Easing::new(&CurveValue::Expanded([
            0.0, 0.2, 0.0, 0.2, 1.0, 0.8, 1.0, 0.8,
        ]));
        assert!(close(easing.y_at(0.0), 0.2));
        assert!(close(easing.y_at(1.0), 0.8));
        assert!(close(easing.y_at(0.5), 0.5));
    }
}
