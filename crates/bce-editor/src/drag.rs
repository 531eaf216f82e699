//! Drag controller: one `Idle`/`Dragging` state machine per draggable point.
//!
//! A controller is configured with the value components it may write. On
//! drag start it snapshots the current value and pointer; on every move it
//! rebuilds a candidate from that snapshot, so deltas never accumulate error:
//!
//! ```text
//! dx = (pointer.x - anchor.x) / size      x components: anchor + dx
//! dy = (pointer.y - anchor.y) / size      y components: anchor - dy
//! ```
//!
//! `y` is subtracted because pixel y grows downward. Protocol misuse
//! (duplicate start, move while idle, repeated end) is absorbed as a no-op.

use bce_core::{ClampPolicy, EditorConfig, ExpandedValue, PointRole};
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One value component a controller writes, and the pointer axis driving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBinding {
    pub index: usize,
    pub axis: Axis,
}

impl AxisBinding {
    pub const fn x(index: usize) -> Self {
        Self {
            index,
            axis: Axis::X,
        }
    }

    pub const fn y(index: usize) -> Self {
        Self {
            index,
            axis: Axis::Y,
        }
    }

    fn apply(&self, anchor: f64, delta: Vec2) -> f64 {
        match self.axis {
            Axis::X => anchor + delta.x,
            Axis::Y => anchor - delta.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Snapshot taken when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub anchor_value: ExpandedValue,
    pub anchor_pointer: Point,
}

/// Advisory pointer-capture request for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSignal {
    /// Route further moves to this point even when the pointer leaves it.
    Acquire,
    /// Stop routing moves to this point.
    Release,
}

/// What a move needs beyond the session: drawing size and clamp policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    pub size: f64,
    pub policy: ClampPolicy,
    /// Endpoints come from configuration (4-number form): clamping skips them.
    pub fixed_endpoints: bool,
}

impl From<&EditorConfig> for DragContext {
    fn from(config: &EditorConfig) -> Self {
        Self {
            size: config.size,
            policy: config.clamp_policy(),
            fixed_endpoints: !config.allow_endpoint_editing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    bindings: SmallVec<[AxisBinding; 2]>,
    session: Option<DragSession>,
}

impl DragController {
    /// Controller writing `bindings`. Indices outside the 8-number layout are
    /// dropped.
    pub fn new(bindings: impl IntoIterator<Item = AxisBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter(|b| {
                let valid = b.index < 8;
                if !valid {
                    log::warn!("ignoring drag binding for component {}", b.index);
                }
                valid
            })
            .collect();
        Self {
            bindings,
            session: None,
        }
    }

    /// Controller for one control point: always its y, its x when `with_x`.
    pub fn for_point(role: PointRole, with_x: bool) -> Self {
        let x = with_x.then_some(AxisBinding::x(role.x_index()));
        Self::new(x.into_iter().chain([AxisBinding::y(role.y_index())]))
    }

    pub fn bindings(&self) -> &[AxisBinding] {
        &self.bindings
    }

    pub fn state(&self) -> DragState {
        if self.session.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Begin a drag from `pointer`, anchoring on `current`.
    ///
    /// Ignored while already dragging: the first anchor stays in place.
    pub fn start_drag(&mut self, pointer: Point, current: &ExpandedValue) -> Option<CaptureSignal> {
        if self.session.is_some() {
            log::trace!("drag start ignored: already dragging");
            return None;
        }
        self.session = Some(DragSession {
            anchor_value: *current,
            anchor_pointer: pointer,
        });
        Some(CaptureSignal::Acquire)
    }

    /// Value for the pointer at `pointer`, or `None` when idle.
    pub fn report_move(&self, pointer: Point, ctx: &DragContext) -> Option<ExpandedValue> {
        let Some(session) = &self.session else {
            log::trace!("move ignored: not dragging");
            return None;
        };
        let anchor = session.anchor_pointer;
        let delta = Vec2::new(
            (pointer.x - anchor.x) / ctx.size,
            (pointer.y - anchor.y) / ctx.size,
        );

        let mut next = session.anchor_value;
        for binding in &self.bindings {
            next[binding.index] = binding.apply(session.anchor_value[binding.index], delta);
        }
        Some(if ctx.fixed_endpoints {
            ctx.policy.clamp_handles(&next)
        } else {
            ctx.policy.clamp_expanded(&next)
        })
    }

    /// Finish (or cancel) the drag. Safe to call in any state.
    pub fn end_drag(&mut self) -> Option<CaptureSignal> {
        self.session.take().map(|_| CaptureSignal::Release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bce_core::{DEFAULT_VALUE, EndpointY, H1X, H1Y, P1Y, P2X, P2Y, expand};
    use pretty_assertions::assert_eq;

    fn anchor() -> ExpandedValue {
        expand(DEFAULT_VALUE, EndpointY::default())
    }

    fn ctx() -> DragContext {
        DragContext::from(&EditorConfig::default())
    }

    fn endpoint_ctx() -> DragContext {
        DragContext::from(&EditorConfig {
            allow_endpoint_editing: true,
            ..Default::default()
        })
    }

    #[test]
    fn starts_idle() {
        let controller = DragController::for_point(PointRole::StartHandle, true);
        assert_eq!(controller.state(), DragState::Idle);
        assert_eq!(
            controller.bindings(),
            &[AxisBinding::x(H1X), AxisBinding::y(H1Y)]
        );
    }

    #[test]
    fn move_up_raises_handle_y() {
        let mut controller = DragController::new([AxisBinding::y(H1Y)]);
        assert_eq!(
            controller.start_drag(Point::new(100.0, 100.0), &anchor()),
            Some(CaptureSignal::Acquire)
        );

        let next = controller
            .report_move(Point::new(100.0, 80.0), &ctx())
            .unwrap();
        assert_eq!(next[H1Y], 0.1);
        assert_eq!(next[H1X], 0.4);
    }

    #[test]
    fn move_far_down_clamps_to_outer_area() {
        let mut controller = DragController::new([AxisBinding::y(H1Y)]);
        controller.start_drag(Point::new(100.0, 100.0), &anchor());

        let next = controller
            .report_move(Point::new(100.0, 400.0), &ctx())
            .unwrap();
        assert_eq!(next[H1Y], -0.25);
    }

    #[test]
    fn x_follows_pointer_direction() {
        let mut controller = DragController::for_point(PointRole::StartHandle, true);
        controller.start_drag(Point::new(10.0, 10.0), &anchor());

        let next = controller
            .report_move(Point::new(50.0, 10.0), &ctx())
            .unwrap();
        assert!((next[H1X] - 0.6).abs() < 1e-12);
        assert_eq!(next[H1Y], 0.0);
    }

    #[test]
    fn endpoint_x_clamps_to_unit() {
        let mut controller = DragController::for_point(PointRole::EndPoint, true);
        let mut start = anchor();
        start[P2X] = 0.9;
        controller.start_drag(Point::ORIGIN, &start);

        // +0.3 → 1.2 before clamping
        let next = controller
            .report_move(Point::new(60.0, 0.0), &endpoint_ctx())
            .unwrap();
        assert_eq!(next[P2X], 1.0);
    }

    #[test]
    fn fixed_endpoints_survive_handle_moves() {
        let mut controller = DragController::for_point(PointRole::StartHandle, true);
        let start = expand(DEFAULT_VALUE, EndpointY { start: 1.5, end: -0.5 });
        controller.start_drag(Point::ORIGIN, &start);

        assert_eq!(controller.report_move(Point::ORIGIN, &ctx()), Some(start));
        let next = controller
            .report_move(Point::new(20.0, -20.0), &ctx())
            .unwrap();
        assert_eq!((next[P1Y], next[P2Y]), (1.5, -0.5));

        // editable endpoints are clamped like any other component
        let next = controller.report_move(Point::ORIGIN, &endpoint_ctx()).unwrap();
        assert_eq!((next[P1Y], next[P2Y]), (1.0, 0.0));
    }

    #[test]
    fn zero_movement_reproduces_anchor() {
        let mut controller = DragController::for_point(PointRole::EndHandle, true);
        let pointer = Point::new(37.0, 91.0);
        controller.start_drag(pointer, &anchor());
        assert_eq!(controller.report_move(pointer, &ctx()), Some(anchor()));
    }

    #[test]
    fn duplicate_start_keeps_first_anchor() {
        let mut controller = DragController::for_point(PointRole::StartHandle, true);
        controller.start_drag(Point::new(1.0, 2.0), &anchor());

        let mut other = anchor();
        other[H1Y] = 0.9;
        assert_eq!(controller.start_drag(Point::new(5.0, 5.0), &other), None);

        let session = controller.session().unwrap();
        assert_eq!(session.anchor_value, anchor());
        assert_eq!(session.anchor_pointer, Point::new(1.0, 2.0));
    }

    #[test]
    fn moves_never_touch_the_anchor() {
        let mut controller = DragController::for_point(PointRole::StartHandle, true);
        controller.start_drag(Point::ORIGIN, &anchor());
        controller.report_move(Point::new(20.0, -20.0), &ctx());
        controller.report_move(Point::new(-40.0, 60.0), &ctx());
        assert_eq!(controller.session().unwrap().anchor_value, anchor());
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let controller = DragController::for_point(PointRole::StartHandle, true);
        assert_eq!(controller.report_move(Point::new(5.0, 5.0), &ctx()), None);
    }

    #[test]
    fn end_is_idempotent() {
        let mut controller = DragController::for_point(PointRole::StartHandle, true);
        assert_eq!(controller.end_drag(), None);

        controller.start_drag(Point::ORIGIN, &anchor());
        assert_eq!(controller.end_drag(), Some(CaptureSignal::Release));
        assert_eq!(controller.end_drag(), None);
        assert_eq!(controller.state(), DragState::Idle);
        assert_eq!(controller.report_move(Point::new(5.0, 5.0), &ctx()), None);
    }

    #[test]
    fn reusable_after_end() {
        let mut controller = DragController::new([AxisBinding::y(H1Y)]);
        controller.start_drag(Point::ORIGIN, &anchor());
        controller.end_drag();

        let mut moved = anchor();
        moved[H1Y] = 0.5;
        controller.start_drag(Point::new(0.0, 100.0), &moved);
        let next = controller.report_move(Point::new(0.0, 80.0), &ctx()).unwrap();
        assert!((next[H1Y] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_bindings_are_dropped() {
        let controller = DragController::new([AxisBinding::y(H1Y), AxisBinding::x(12)]);
        assert_eq!(controller.bindings(), &[AxisBinding::y(H1Y)]);
    }
}
