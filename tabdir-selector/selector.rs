use std::any::Any;

use tabdir_geometry::{
  Rect,
  Size,
};
use tabdir_renderer::{
  Renderer,
  TextFlags,
};

use crate::{
  Component,
  Direction,
  EventResult,
  SelectorTheme,
  SwatchStyle,
  layout,
};

/// Text drawn in every swatch.
pub const SAMPLE_TEXT: &str = "abc";

/// Gap between a swatch edge and its text.
pub const TEXT_PADDING: i32 = 4;

/// Size the control asks for when the host has no better idea.
pub const DEFAULT_SIZE: Size = Size::new(120, 120);

const TEXT_FLAGS: TextFlags = TextFlags::SINGLE_LINE
  .union(TextFlags::VERTICAL_CENTER)
  .union(TextFlags::END_ELLIPSIS);

/// A control offering three tab text directions as clickable swatches.
///
/// The top third shows horizontal text, the lower left quarter text rotated
/// clockwise and the lower right quarter text rotated counter-clockwise.
/// Hovering highlights a swatch, clicking selects it.
pub struct TextDirectionSelector {
  selected: Direction,
  hovered:  Option<Direction>,
  bounds:   Rect,
  theme:    SelectorTheme,
  visible:  bool,

  on_change: Option<Box<dyn FnMut(Direction) + 'static>>,
}

impl Default for TextDirectionSelector {
  fn default() -> Self {
    Self::new()
  }
}

impl TextDirectionSelector {
  pub fn new() -> Self {
    Self {
      selected:  Direction::default(),
      hovered:   None,
      bounds:    Rect::from_size(DEFAULT_SIZE),
      theme:     SelectorTheme::default(),
      visible:   true,
      on_change: None,
    }
  }

  /// Set the client bounds (builder-style)
  pub fn with_bounds(mut self, bounds: Rect) -> Self {
    self.bounds = bounds;
    self
  }

  /// Set the theme (builder-style)
  pub fn with_theme(mut self, theme: SelectorTheme) -> Self {
    self.theme = theme;
    self
  }

  /// Set the initial selection (builder-style)
  pub fn with_selected(mut self, direction: Direction) -> Self {
    self.selected = direction;
    self
  }

  /// Call `f` whenever a click changes the selection (builder-style)
  pub fn on_change<F: FnMut(Direction) + 'static>(mut self, f: F) -> Self {
    self.on_change = Some(Box::new(f));
    self
  }

  pub fn set_on_change<F: FnMut(Direction) + 'static>(&mut self, f: F) {
    self.on_change = Some(Box::new(f));
  }

  pub fn selected(&self) -> Direction {
    self.selected
  }

  /// Change the selection without notifying `on_change`.
  ///
  /// Returns whether the selection changed, in which case the host should
  /// redraw.
  pub fn set_selected(&mut self, direction: Direction) -> bool {
    if self.selected == direction {
      return false;
    }
    log::debug!("selection set to {direction}");
    self.selected = direction;
    true
  }

  pub fn hovered(&self) -> Option<Direction> {
    self.hovered
  }

  /// Hovered direction as an integer code, [`Direction::NONE_CODE`] when
  /// nothing is hovered.
  pub fn hovered_code(&self) -> i32 {
    Direction::code_of(self.hovered)
  }

  pub fn bounds(&self) -> Rect {
    self.bounds
  }

  pub fn set_bounds(&mut self, bounds: Rect) {
    self.bounds = bounds;
  }

  pub fn theme(&self) -> &SelectorTheme {
    &self.theme
  }

  pub fn set_theme(&mut self, theme: SelectorTheme) {
    self.theme = theme;
  }

  /// Direction under `(x, y)` within the current bounds.
  pub fn hit_test(&self, x: i32, y: i32) -> Option<Direction> {
    layout::hit_test(self.bounds, x, y)
  }

  fn draw_swatch(
    &self,
    renderer: &mut Renderer,
    direction: Direction,
    style: &SwatchStyle,
  ) -> tabdir_renderer::Result<()> {
    let swatch = layout::swatch_bounds(self.bounds, direction);
    if swatch.is_empty() {
      log::warn!("skipping {direction} swatch, control too small");
      return Ok(());
    }

    renderer.fill_rect(swatch, style.background);
    renderer.stroke_rect(swatch, style.border);

    let font = &self.theme.font;
    let Some(dest) = layout::layer_mapping(swatch, direction) else {
      renderer.draw_text(
        SAMPLE_TEXT,
        font,
        swatch.deflated(TEXT_PADDING, TEXT_PADDING),
        style.foreground,
        TEXT_FLAGS,
      );
      return Ok(());
    };

    // Draw horizontally into a transposed layer; the mapping rotates it.
    renderer.draw_layer(swatch.size().transposed(), dest, |layer, text| {
      let text_area = layer.bounds().deflated(TEXT_PADDING, TEXT_PADDING);
      layer.fill_rect(text_area, style.background);
      text.draw_text(
        layer,
        SAMPLE_TEXT,
        font,
        text_area,
        style.foreground,
        TEXT_FLAGS,
      );
    })
  }
}

impl Component for TextDirectionSelector {
  fn render(&mut self, renderer: &mut Renderer, area: Rect) -> tabdir_renderer::Result<()> {
    if !self.visible {
      return Ok(());
    }
    self.bounds = area;
    renderer.fill_rect(area, self.theme.window);

    for direction in Direction::ALL {
      self.draw_swatch(renderer, direction, &self.theme.normal)?;
    }
    if let Some(hovered) = self.hovered {
      self.draw_swatch(renderer, hovered, &self.theme.hovered)?;
    }
    self.draw_swatch(renderer, self.selected, &self.theme.selected)
  }

  fn handle_pointer_move(&mut self, x: i32, y: i32) -> EventResult {
    let hit = self.hit_test(x, y);
    if hit == self.hovered {
      return EventResult::Ignored;
    }
    log::trace!(
      "hover {} -> {}",
      Direction::code_of(self.hovered),
      Direction::code_of(hit)
    );
    self.hovered = hit;
    EventResult::Redraw
  }

  fn handle_pointer_leave(&mut self) -> EventResult {
    if self.hovered.take().is_none() {
      return EventResult::Ignored;
    }
    log::trace!("hover cleared");
    EventResult::Redraw
  }

  fn handle_pointer_click(&mut self, x: i32, y: i32) -> EventResult {
    let Some(hit) = self.hit_test(x, y) else {
      return EventResult::Ignored;
    };
    if hit == self.selected {
      return EventResult::Ignored;
    }

    log::debug!("selection changed {} -> {hit}", self.selected);
    self.selected = hit;
    if let Some(on_change) = self.on_change.as_mut() {
      on_change(hit);
    }
    EventResult::SelectionChanged(hit)
  }

  fn preferred_size(&self) -> Option<Size> {
    Some(DEFAULT_SIZE)
  }

  fn is_visible(&self) -> bool {
    self.visible
  }

  fn set_visible(&mut self, visible: bool) {
    self.visible = visible;
  }

  fn as_any_mut(&mut self) -> &mut dyn Any {
    self
  }
}
