//! Text layout and CPU glyph rasterization.
//!
//! Shaping and rasterization go through cosmic-text (re-exported by
//! glyphon); glyph coverage is blended straight into a [`Canvas`].

use bitflags::bitflags;
use glyphon::{
  Attrs,
  Buffer,
  Color as GlyphColor,
  Family,
  FontSystem,
  Metrics,
  Shaping,
  Style,
  SwashCache,
  Wrap,
};
use serde::{
  Deserialize,
  Serialize,
};
use tabdir_geometry::Rect;

use crate::{
  Canvas,
  Color,
};

const LINE_HEIGHT_FACTOR: f32 = 1.3;

const ELLIPSIS: char = '\u{2026}';

/// Font selection for a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Font {
  /// Family name, or one of the generic `sans-serif`, `serif`, `monospace`
  pub family: String,
  /// Font size in pixels
  pub size:   f32,
  pub italic: bool,
}

impl Font {
  pub fn new(family: impl Into<String>, size: f32) -> Self {
    Self {
      family: family.into(),
      size,
      italic: false,
    }
  }

  /// Set the italic style (builder-style)
  pub fn italic(mut self, italic: bool) -> Self {
    self.italic = italic;
    self
  }

  fn family(&self) -> Family<'_> {
    match self.family.as_str() {
      "sans-serif" | "sans" => Family::SansSerif,
      "serif" => Family::Serif,
      "monospace" | "mono" => Family::Monospace,
      name => Family::Name(name),
    }
  }

  fn metrics(&self) -> Metrics {
    Metrics::new(self.size, self.size * LINE_HEIGHT_FACTOR)
  }
}

impl Default for Font {
  fn default() -> Self {
    Self::new("sans-serif", 14.0)
  }
}

bitflags! {
  /// Layout options for [`TextPainter::draw_text`].
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  pub struct TextFlags: u8 {
    /// Never wrap onto a second line.
    const SINGLE_LINE     = 1 << 0;
    /// Center the text block vertically in its bounds.
    const VERTICAL_CENTER = 1 << 1;
    /// Replace the tail with an ellipsis when the text is too wide.
    const END_ELLIPSIS    = 1 << 2;
  }
}

/// Shapes and rasterizes text onto canvases.
pub struct TextPainter {
  font_system: FontSystem,
  swash_cache: SwashCache,
}

impl TextPainter {
  /// Create a painter using the system font collection.
  pub fn new() -> Self {
    Self::with_font_system(FontSystem::new())
  }

  pub fn with_font_system(font_system: FontSystem) -> Self {
    Self {
      font_system,
      swash_cache: SwashCache::new(),
    }
  }

  pub fn font_system_mut(&mut self) -> &mut FontSystem {
    &mut self.font_system
  }

  /// Width of the widest line and the total height of `text` laid out on a
  /// single line.
  pub fn measure(&mut self, text: &str, font: &Font) -> (f32, f32) {
    let buffer = self.shape(text, font, None, Wrap::None);
    block_size(&buffer)
  }

  /// Draw `text` inside `bounds`, clipped to them.
  pub fn draw_text(
    &mut self,
    canvas: &mut Canvas,
    text: &str,
    font: &Font,
    bounds: Rect,
    color: Color,
    flags: TextFlags,
  ) {
    if bounds.is_empty() || text.is_empty() {
      return;
    }

    let max_width = bounds.width as f32;
    let text = if flags.contains(TextFlags::END_ELLIPSIS) {
      self.fit_with_ellipsis(text, font, max_width)
    } else {
      text.to_string()
    };

    let wrap = if flags.contains(TextFlags::SINGLE_LINE) {
      Wrap::None
    } else {
      Wrap::Word
    };
    let buffer = self.shape(&text, font, Some(max_width), wrap);

    let (_, block_height) = block_size(&buffer);
    let offset_y = if flags.contains(TextFlags::VERTICAL_CENTER) {
      ((bounds.height as f32 - block_height) / 2.0).floor() as i32
    } else {
      0
    };

    let [r, g, b, a] = color.to_rgba8();
    buffer.draw(
      &mut self.font_system,
      &mut self.swash_cache,
      GlyphColor::rgba(r, g, b, a),
      |x, y, w, h, glyph_color| {
        let x = bounds.x + x;
        let y = bounds.y + offset_y + y;
        if glyph_color.a() == 0 || !bounds.contains(x, y) {
          return;
        }
        let pixel = Rect::new(x, y, w as i32, h as i32);
        canvas.fill_rect(
          pixel,
          Color::from_rgba8(
            glyph_color.r(),
            glyph_color.g(),
            glyph_color.b(),
            glyph_color.a(),
          ),
        );
      },
    );
  }

  /// Longest prefix of `text` followed by an ellipsis that fits `max_width`.
  fn fit_with_ellipsis(&mut self, text: &str, font: &Font, max_width: f32) -> String {
    if self.measure(text, font).0 <= max_width {
      return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    for keep in (0..chars.len()).rev() {
      let mut candidate: String = chars[..keep].iter().collect();
      candidate.push(ELLIPSIS);
      if self.measure(&candidate, font).0 <= max_width {
        return candidate;
      }
    }
    String::new()
  }

  fn shape(&mut self, text: &str, font: &Font, width: Option<f32>, wrap: Wrap) -> Buffer {
    let metrics = font.metrics();
    let mut buffer = Buffer::new(&mut self.font_system, metrics);
    buffer.set_wrap(&mut self.font_system, wrap);
    buffer.set_size(&mut self.font_system, width, None);

    let style = if font.italic {
      Style::Italic
    } else {
      Style::Normal
    };
    let attrs = Attrs::new()
      .family(font.family())
      .style(style)
      .metrics(metrics);
    buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced);
    buffer.shape_until_scroll(&mut self.font_system, false);
    buffer
  }
}

impl Default for TextPainter {
  fn default() -> Self {
    Self::new()
  }
}

fn block_size(buffer: &Buffer) -> (f32, f32) {
  buffer
    .layout_runs()
    .fold((0.0f32, 0.0f32), |(width, height), run| {
      (width.max(run.line_w), height + run.line_height)
    })
}
