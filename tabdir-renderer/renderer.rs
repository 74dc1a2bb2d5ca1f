use std::path::Path;

use tabdir_geometry::{
  Point,
  Rect,
  Size,
};

use crate::{
  Canvas,
  Color,
  Font,
  Result,
  TextFlags,
  TextPainter,
};

/// Configuration options for the renderer
#[derive(Debug, Clone)]
pub struct RendererConfig {
  /// Background color used by [`Renderer::begin_frame`]
  pub background_color: Color,
}

impl Default for RendererConfig {
  fn default() -> Self {
    Self {
      background_color: Color::WHITE,
    }
  }
}

/// Software renderer: a target canvas plus the text machinery to draw on it.
pub struct Renderer {
  canvas:           Canvas,
  text:             TextPainter,
  background_color: Color,
}

impl Renderer {
  pub fn new(size: Size) -> Result<Self> {
    Self::with_config(size, RendererConfig::default())
  }

  pub fn with_config(size: Size, config: RendererConfig) -> Result<Self> {
    Self::with_text_painter(size, config, TextPainter::new())
  }

  /// Build a renderer around an existing text painter, keeping its loaded
  /// fonts.
  pub fn with_text_painter(size: Size, config: RendererConfig, text: TextPainter) -> Result<Self> {
    Ok(Self {
      canvas: Canvas::new(size)?,
      text,
      background_color: config.background_color,
    })
  }

  pub fn size(&self) -> Size {
    self.canvas.size()
  }

  pub fn canvas(&self) -> &Canvas {
    &self.canvas
  }

  pub fn canvas_mut(&mut self) -> &mut Canvas {
    &mut self.canvas
  }

  pub fn text_painter_mut(&mut self) -> &mut TextPainter {
    &mut self.text
  }

  /// Reallocate the target. Contents are lost.
  pub fn resize(&mut self, size: Size) -> Result<()> {
    if size != self.size() {
      log::debug!("resizing renderer to {}x{}", size.width, size.height);
      self.canvas = Canvas::new(size)?;
    }
    Ok(())
  }

  /// Clear the target with the configured background color.
  pub fn begin_frame(&mut self) {
    self.canvas.clear(self.background_color);
  }

  pub fn fill_rect(&mut self, rect: Rect, color: Color) {
    self.canvas.fill_rect(rect, color);
  }

  /// Stroke a one pixel border inside `rect`.
  pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
    self.canvas.stroke_rect(rect, color);
  }

  pub fn draw_text(&mut self, text: &str, font: &Font, bounds: Rect, color: Color, flags: TextFlags) {
    self
      .text
      .draw_text(&mut self.canvas, text, font, bounds, color, flags);
  }

  /// Draw into a temporary `size` layer and composite it onto the target.
  ///
  /// The layer's upper-left, upper-right and lower-left corners are mapped
  /// to `dest`; see [`Canvas::draw_canvas_mapped`]. The layer starts
  /// transparent and is dropped before returning. An empty `size` draws
  /// nothing.
  pub fn draw_layer<F>(&mut self, size: Size, dest: [Point; 3], draw: F) -> Result<()>
  where
    F: FnOnce(&mut Canvas, &mut TextPainter),
  {
    if size.is_empty() {
      log::debug!(
        "skipping empty {}x{} layer",
        size.width,
        size.height
      );
      return Ok(());
    }

    let mut layer = Canvas::new(size)?;
    draw(&mut layer, &mut self.text);
    log::trace!(
      "compositing {}x{} layer onto {:?}",
      size.width,
      size.height,
      dest
    );
    self.canvas.draw_canvas_mapped(&layer, dest);
    Ok(())
  }

  /// Write the current target to a PNG file.
  pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
    self.canvas.save_png(path)
  }
}
