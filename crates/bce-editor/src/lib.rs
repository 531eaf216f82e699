pub mod drag;
pub mod editor;
pub mod hit;
pub mod input;

pub use drag::{
    Axis, AxisBinding, CaptureSignal, DragContext, DragController, DragSession, DragState,
};
pub use editor::{CurveEditor, EditorError, PreviewState};
pub use input::PointerEvent;
