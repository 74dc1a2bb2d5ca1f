use std::any::Any;

use tabdir_geometry::{
  Rect,
  Size,
};
use tabdir_renderer::{
  PointerEvent,
  Renderer,
};

use crate::Direction;

/// Outcome of feeding an input event to a component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventResult {
  /// Nothing changed.
  #[default]
  Ignored,
  /// Visible state changed and the component should be drawn again.
  Redraw,
  /// The selection moved to a new direction. Implies a redraw.
  SelectionChanged(Direction),
}

impl EventResult {
  pub fn needs_redraw(self) -> bool {
    !matches!(self, EventResult::Ignored)
  }

  /// The newly selected direction, if this result reports one.
  pub fn selection(self) -> Option<Direction> {
    match self {
      EventResult::SelectionChanged(direction) => Some(direction),
      _ => None,
    }
  }
}

/// Core trait for pointer driven widgets.
pub trait Component {
  /// Render the component into `area` of the renderer's target.
  fn render(&mut self, renderer: &mut Renderer, area: Rect) -> tabdir_renderer::Result<()>;

  fn handle_pointer_move(&mut self, x: i32, y: i32) -> EventResult;

  fn handle_pointer_leave(&mut self) -> EventResult;

  fn handle_pointer_click(&mut self, x: i32, y: i32) -> EventResult;

  /// Dispatch a pointer event to the matching handler. Hidden components
  /// ignore input.
  fn handle_event(&mut self, event: &PointerEvent) -> EventResult {
    if !self.is_visible() {
      return EventResult::Ignored;
    }
    match *event {
      PointerEvent::Moved { x, y } => self.handle_pointer_move(x, y),
      PointerEvent::Left => self.handle_pointer_leave(),
      PointerEvent::Clicked { x, y, .. } => self.handle_pointer_click(x, y),
    }
  }

  /// Get the preferred size for this component.
  fn preferred_size(&self) -> Option<Size> {
    None
  }

  fn is_visible(&self) -> bool {
    true
  }

  fn set_visible(&mut self, visible: bool);

  /// Enable downcasting to concrete types
  fn as_any_mut(&mut self) -> &mut dyn Any;
}
