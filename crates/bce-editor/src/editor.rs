//! The curve editor: owner of the current value and of one drag controller
//! per draggable point.
//!
//! - **Value**: held in the canonical 8-number layout. In the 4-number form
//!   the endpoints sit at `(0, start_point_y)` and `(1, end_point_y)` and are
//!   never dragged; what the host sees is the handle projection.
//!
//! - **Drags**: each point's events go to its own controller. Every move
//!   commits immediately: the clamped value replaces the current one and the
//!   change callback fires before `drag_move` returns.

use crate::drag::{CaptureSignal, DragContext, DragController};
use crate::hit::hit_test;
use crate::input::PointerEvent;
use bce_core::{
    CanvasFrame, ConfigError, CurveGeometry, CurveValue, DEFAULT_VALUE, EditorConfig, Easing,
    ExpandedValue, PointRole, ValueError, ValueForm, format_timing_function,
};
use kurbo::Point;
use thiserror::Error;

/// Invoked with every value a drag produces, in the editor's value form.
pub type ChangeCallback = Box<dyn FnMut(CurveValue)>;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Animation state of the preview dot travelling along the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Hidden,
    /// A handle is being dragged.
    Paused,
    Running,
}

pub struct CurveEditor {
    config: EditorConfig,
    context: DragContext,
    form: ValueForm,
    value: ExpandedValue,
    /// Indexed by `PointRole::ordinal`; `None` for points that cannot be dragged.
    controllers: [Option<DragController>; 4],
    on_change: Option<ChangeCallback>,
}

impl CurveEditor {
    /// Create an editor showing the default curve.
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;

        let form = config.value_form();
        let with_x = config.endpoint_x_draggable;
        let controllers = PointRole::ALL.map(|role| {
            if role.is_handle() {
                Some(DragController::for_point(role, true))
            } else if config.allow_endpoint_editing {
                Some(DragController::for_point(role, with_x))
            } else {
                None
            }
        });

        Ok(Self {
            context: DragContext::from(&config),
            form,
            value: bce_core::expand(DEFAULT_VALUE, config.endpoints()),
            controllers,
            on_change: None,
            config,
        })
    }

    /// Replace the initial value, consuming the editor.
    pub fn with_value(mut self, value: CurveValue) -> Result<Self, EditorError> {
        self.set_value(value)?;
        Ok(self)
    }

    /// Replace the current value (e.g. the host's own state changed).
    ///
    /// The value must match the configured form. Drags in progress keep their
    /// anchors.
    pub fn set_value(&mut self, value: CurveValue) -> Result<(), ValueError> {
        if value.form() != self.form {
            log::warn!("rejected {} value, editor expects {}", value.form(), self.form);
            return Err(ValueError::FormMismatch {
                expected: self.form,
                found: value.form(),
            });
        }
        if let Err(err) = value.validate() {
            log::warn!("rejected curve value: {err}");
            return Err(err);
        }
        self.value = value.to_expanded(self.config.endpoints());
        log::debug!("value set to {:?}", self.value);
        Ok(())
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(CurveValue) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn form(&self) -> ValueForm {
        self.form
    }

    /// Current value in the host-facing form.
    pub fn value(&self) -> CurveValue {
        CurveValue::project(self.form, self.value)
    }

    pub fn expanded_value(&self) -> ExpandedValue {
        self.value
    }

    /// Control-point positions in curve space.
    pub fn geometry(&self) -> CurveGeometry {
        CurveGeometry::from_expanded(self.config.size, &self.value)
    }

    /// Control-point positions in canvas space (outer area and stroke included).
    pub fn canvas_geometry(&self) -> CurveGeometry {
        self.geometry().translated(self.frame().origin())
    }

    pub fn frame(&self) -> CanvasFrame {
        self.config.frame()
    }

    pub fn easing(&self) -> Easing {
        Easing::new(&CurveValue::Expanded(self.value))
    }

    /// `cubic-bezier(...)` text for the handles.
    ///
    /// CSS has no endpoint components: in the 8-number form moved endpoints
    /// are not represented in the text.
    pub fn css_timing_function(&self) -> String {
        format_timing_function(&bce_core::contract(self.value))
    }

    // ─── Points ──────────────────────────────────────────────────────────

    pub fn is_draggable(&self, role: PointRole) -> bool {
        self.controllers[role.ordinal()].is_some()
    }

    pub fn draggable_points(&self) -> impl Iterator<Item = PointRole> + '_ {
        PointRole::ALL
            .into_iter()
            .filter(|role| self.is_draggable(*role))
    }

    pub fn is_dragging(&self, role: PointRole) -> bool {
        self.controllers[role.ordinal()]
            .as_ref()
            .is_some_and(DragController::is_dragging)
    }

    pub fn dragging_points(&self) -> impl Iterator<Item = PointRole> + '_ {
        PointRole::ALL
            .into_iter()
            .filter(|role| self.is_dragging(*role))
    }

    /// The draggable point under `canvas_pos`, if any.
    pub fn pick(&self, canvas_pos: Point) -> Option<PointRole> {
        hit_test(
            &self.canvas_geometry(),
            self.draggable_points(),
            canvas_pos,
            self.config.hit_radius,
        )
    }

    pub fn preview_state(&self) -> PreviewState {
        if !self.config.enable_preview {
            PreviewState::Hidden
        } else if self.is_dragging(PointRole::StartHandle) || self.is_dragging(PointRole::EndHandle)
        {
            PreviewState::Paused
        } else {
            PreviewState::Running
        }
    }

    // ─── Drag protocol ───────────────────────────────────────────────────

    pub fn drag_start(&mut self, role: PointRole, pointer: Point) -> Option<CaptureSignal> {
        let current = self.value;
        let controller = self.controllers[role.ordinal()].as_mut()?;
        let signal = controller.start_drag(pointer, &current);
        if signal.is_some() {
            log::debug!("drag start: {role} at ({}, {})", pointer.x, pointer.y);
        }
        signal
    }

    /// Commit the value for `pointer` and notify the host. `None` when `role`
    /// is not being dragged.
    pub fn drag_move(&mut self, role: PointRole, pointer: Point) -> Option<CurveValue> {
        let controller = self.controllers[role.ordinal()].as_ref()?;
        let next = controller.report_move(pointer, &self.context)?;
        self.value = next;

        let value = self.value();
        log::trace!("drag move: {role} → {:?}", value.as_slice());
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(value);
        }
        Some(value)
    }

    pub fn drag_end(&mut self, role: PointRole) -> Option<CaptureSignal> {
        let signal = self.controllers[role.ordinal()].as_mut()?.end_drag();
        if signal.is_some() {
            log::debug!("drag end: {role}");
        }
        signal
    }

    /// End every drag in progress (pointer left the whole editor).
    /// Returns the points that were released.
    pub fn end_all_drags(&mut self) -> Vec<PointRole> {
        PointRole::ALL
            .into_iter()
            .filter(|role| self.drag_end(*role).is_some())
            .collect()
    }

    /// Route a normalized pointer event to `role`'s controller.
    pub fn handle_event(&mut self, role: PointRole, event: &PointerEvent) -> Option<CaptureSignal> {
        match *event {
            PointerEvent::Down { x, y } => self.drag_start(role, Point::new(x, y)),
            PointerEvent::Move { x, y } => {
                self.drag_move(role, Point::new(x, y));
                None
            }
            PointerEvent::Up | PointerEvent::Leave | PointerEvent::Cancel => self.drag_end(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_editor() {
        let editor = CurveEditor::new(EditorConfig::default()).unwrap();
        assert_eq!(editor.value(), CurveValue::Basic([0.4, 0.0, 1.0, 0.6]));
        assert_eq!(
            editor.draggable_points().collect::<Vec<_>>(),
            vec![PointRole::StartHandle, PointRole::EndHandle]
        );
        assert_eq!(editor.preview_state(), PreviewState::Hidden);
        assert_eq!(editor.css_timing_function(), "cubic-bezier(0.4, 0, 1, 0.6)");
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EditorConfig {
            size: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            CurveEditor::new(config),
            Err(EditorError::Config(ConfigError::InvalidSize(_)))
        ));
    }

    #[test]
    fn rejects_value_of_wrong_form() {
        let mut editor = CurveEditor::new(EditorConfig::default()).unwrap();
        let err = editor.set_value(CurveValue::Expanded([0.0; 8])).unwrap_err();
        assert_eq!(
            err,
            ValueError::FormMismatch {
                expected: ValueForm::Basic,
                found: ValueForm::Expanded,
            }
        );
        assert_eq!(editor.value(), CurveValue::Basic(DEFAULT_VALUE));
    }

    #[test]
    fn rejects_non_finite_value() {
        let mut editor = CurveEditor::new(EditorConfig::default()).unwrap();
        assert!(matches!(
            editor.set_value(CurveValue::Basic([0.1, f64::NAN, 0.2, 0.3])),
            Err(ValueError::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn endpoints_not_draggable_without_editing() {
        let mut editor = CurveEditor::new(EditorConfig::default()).unwrap();
        assert_eq!(editor.drag_start(PointRole::StartPoint, Point::ORIGIN), None);
        assert!(!editor.is_dragging(PointRole::StartPoint));
        assert_eq!(editor.drag_move(PointRole::StartPoint, Point::new(0.0, 50.0)), None);
    }

    #[test]
    fn configured_endpoint_y_shapes_geometry() {
        let config = EditorConfig {
            start_point_y: 0.5,
            ..Default::default()
        };
        let editor = CurveEditor::new(config).unwrap();
        assert_eq!(editor.geometry().start_point, Point::new(0.0, 100.0));
        assert_eq!(editor.value(), CurveValue::Basic(DEFAULT_VALUE));
    }

    #[test]
    fn preview_pauses_while_a_handle_drags() {
        let config = EditorConfig {
            enable_preview: true,
            ..Default::default()
        };
        let mut editor = CurveEditor::new(config).unwrap();
        assert_eq!(editor.preview_state(), PreviewState::Running);

        editor.drag_start(PointRole::EndHandle, Point::ORIGIN);
        assert_eq!(editor.preview_state(), PreviewState::Paused);

        editor.drag_end(PointRole::EndHandle);
        assert_eq!(editor.preview_state(), PreviewState::Running);
    }
}
