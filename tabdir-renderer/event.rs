//! Pointer event types delivered by the host.
//!
//! Coordinates are integer pixels local to the receiving control.

/// Mouse button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
  /// Left mouse button
  Left,
  /// Right mouse button
  Right,
  /// Middle mouse button (scroll wheel click)
  Middle,
}

/// Pointer input delivered to a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
  /// The pointer moved to `(x, y)`
  Moved { x: i32, y: i32 },
  /// The pointer left the control
  Left,
  /// A button was clicked (pressed and released) at `(x, y)`
  Clicked {
    x:      i32,
    y:      i32,
    button: MouseButton,
  },
}

impl PointerEvent {
  /// Position carried by the event, if any
  pub fn position(&self) -> Option<(i32, i32)> {
    match *self {
      PointerEvent::Moved { x, y } | PointerEvent::Clicked { x, y, .. } => Some((x, y)),
      PointerEvent::Left => None,
    }
  }
}
