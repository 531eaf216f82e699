//! Input abstraction layer.
//!
//! Normalizes the host's mouse, touch, and pen events for one draggable point
//! into a unified `PointerEvent`. Coordinates only need to be consistent
//! within one gesture (screen or client pixels both work).

use kurbo::Point;

/// A normalized pointer event routed to a single draggable point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on the point (mouse down, touch start, pen contact).
    Down { x: f64, y: f64 },

    /// Pointer moved while routed to the point.
    Move { x: f64, y: f64 },

    /// Pointer released.
    Up,

    /// Pointer left the element. Some hosts fire this alongside `Up`.
    Leave,

    /// Gesture cancelled by the platform (touch cancel, capture lost).
    Cancel,
}

impl PointerEvent {
    pub fn from_pointer_down(x: f64, y: f64) -> Self {
        Self::Down { x, y }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::Move { x, y }
    }

    /// Extract position if the event carries one.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Down { x, y } | Self::Move { x, y } => Some(Point::new(*x, *y)),
            Self::Up | Self::Leave | Self::Cancel => None,
        }
    }

    /// `true` for every event that finishes a gesture.
    pub fn ends_gesture(&self) -> bool {
        matches!(self, Self::Up | Self::Leave | Self::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions() {
        assert_eq!(
            PointerEvent::from_pointer_down(3.0, 4.0).position(),
            Some(Point::new(3.0, 4.0))
        );
        assert_eq!(PointerEvent::Up.position(), None);
    }

    #[test]
    fn gesture_end_events() {
        assert!(PointerEvent::Up.ends_gesture());
        assert!(PointerEvent::Leave.ends_gesture());
        assert!(PointerEvent::Cancel.ends_gesture());
        assert!(!PointerEvent::from_pointer_move(0.0, 0.0).ends_gesture());
    }
}
