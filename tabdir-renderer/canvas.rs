//! CPU pixel surface backed by a tiny-skia pixmap.

use std::path::Path;

use tabdir_geometry::{
  Point,
  Rect,
  Size,
};
use tiny_skia::{
  FilterQuality,
  Paint,
  PathBuilder,
  Pixmap,
  PixmapPaint,
  Stroke,
  Transform,
};

use crate::{
  Color,
  RendererError,
  Result,
};

/// An RGBA surface with the primitive operations the widgets need.
pub struct Canvas {
  pixmap: Pixmap,
}

impl Canvas {
  /// Allocate a transparent canvas.
  pub fn new(size: Size) -> Result<Self> {
    if size.is_empty() {
      return Err(RendererError::SurfaceCreation(format!(
        "invalid size {}x{}",
        size.width, size.height
      )));
    }
    let pixmap = Pixmap::new(size.width as u32, size.height as u32).ok_or_else(|| {
      RendererError::SurfaceCreation(format!(
        "cannot allocate {}x{} pixmap",
        size.width, size.height
      ))
    })?;
    Ok(Self { pixmap })
  }

  pub fn width(&self) -> i32 {
    self.pixmap.width() as i32
  }

  pub fn height(&self) -> i32 {
    self.pixmap.height() as i32
  }

  pub fn size(&self) -> Size {
    Size::new(self.width(), self.height())
  }

  /// The whole canvas as a rectangle at the origin.
  pub fn bounds(&self) -> Rect {
    Rect::from_size(self.size())
  }

  pub fn pixmap(&self) -> &Pixmap {
    &self.pixmap
  }

  /// Fill the whole canvas, replacing what was there.
  pub fn clear(&mut self, color: Color) {
    self.pixmap.fill(color.to_skia());
  }

  /// Blend a solid rectangle over the canvas.
  pub fn fill_rect(&mut self, rect: Rect, color: Color) {
    let Some(rect) = to_skia_rect(rect) else {
      return;
    };
    let paint = solid_paint(color);
    self
      .pixmap
      .fill_rect(rect, &paint, Transform::identity(), None);
  }

  /// Stroke a one pixel border that stays inside `rect`.
  pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
    let outline = rect.stroke_fixed();
    if outline.width <= 0 || outline.height <= 0 {
      // Too thin for an outline; the border covers the whole rect.
      self.fill_rect(rect, color);
      return;
    }

    // Pixel centers, so the hairline lands on whole pixels.
    let Some(path_rect) = tiny_skia::Rect::from_xywh(
      outline.x as f32 + 0.5,
      outline.y as f32 + 0.5,
      outline.width as f32,
      outline.height as f32,
    ) else {
      return;
    };
    let path = PathBuilder::from_rect(path_rect);

    let paint = solid_paint(color);
    let stroke = Stroke {
      width: 1.0,
      ..Stroke::default()
    };
    self
      .pixmap
      .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
  }

  /// Draw `source` so that its upper-left, upper-right and lower-left corners
  /// land on `dest[0]`, `dest[1]` and `dest[2]`.
  ///
  /// Any parallelogram works; quarter turns and mirrors stay pixel exact.
  pub fn draw_canvas_mapped(&mut self, source: &Canvas, dest: [Point; 3]) {
    let transform = mapping_transform(source.size(), dest);
    let paint = PixmapPaint {
      quality: FilterQuality::Nearest,
      ..PixmapPaint::default()
    };
    self
      .pixmap
      .draw_pixmap(0, 0, source.pixmap.as_ref(), &paint, transform, None);
  }

  /// Read back a pixel, un-premultiplied.
  pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
    if x < 0 || y < 0 {
      return None;
    }
    let pixel = self.pixmap.pixel(x as u32, y as u32)?.demultiply();
    Some(Color::from_rgba8(
      pixel.red(),
      pixel.green(),
      pixel.blue(),
      pixel.alpha(),
    ))
  }

  /// Encode the canvas as PNG bytes.
  pub fn encode_png(&self) -> Result<Vec<u8>> {
    self
      .pixmap
      .encode_png()
      .map_err(|e| RendererError::Encode(e.to_string()))
  }

  /// Write the canvas to a PNG file.
  pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
    self
      .pixmap
      .save_png(path)
      .map_err(|e| RendererError::Encode(e.to_string()))
  }
}

/// Affine transform taking a `size` image's upper-left, upper-right and
/// lower-left corners to the three destination points.
pub fn mapping_transform(size: Size, dest: [Point; 3]) -> Transform {
  let [origin, along_x, along_y] = dest;
  let w = size.width.max(1) as f32;
  let h = size.height.max(1) as f32;

  Transform::from_row(
    (along_x.x - origin.x) as f32 / w,
    (along_x.y - origin.y) as f32 / w,
    (along_y.x - origin.x) as f32 / h,
    (along_y.y - origin.y) as f32 / h,
    origin.x as f32,
    origin.y as f32,
  )
}

fn to_skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
  if rect.is_empty() {
    return None;
  }
  tiny_skia::Rect::from_xywh(
    rect.x as f32,
    rect.y as f32,
    rect.width as f32,
    rect.height as f32,
  )
}

fn solid_paint(color: Color) -> Paint<'static> {
  let mut paint = Paint::default();
  paint.set_color(color.to_skia());
  paint.anti_alias = false;
  paint
}

#[cfg(test)]
mod tests {
  use super::*;

  const RED: Color = Color::rgb(1.0, 0.0, 0.0);

  fn rgba(canvas: &Canvas, x: i32, y: i32) -> [u8; 4] {
    canvas.pixel(x, y).unwrap().to_rgba8()
  }

  #[test]
  fn test_zero_size_is_an_error() {
    assert!(matches!(
      Canvas::new(Size::new(0, 10)),
      Err(RendererError::SurfaceCreation(_))
    ));
  }

  #[test]
  fn test_fill_rect() {
    let mut canvas = Canvas::new(Size::new(8, 8)).unwrap();
    canvas.clear(Color::WHITE);
    canvas.fill_rect(Rect::new(2, 2, 3, 3), RED);

    assert_eq!(rgba(&canvas, 2, 2), [255, 0, 0, 255]);
    assert_eq!(rgba(&canvas, 4, 4), [255, 0, 0, 255]);
    assert_eq!(rgba(&canvas, 5, 5), [255, 255, 255, 255]);
    assert_eq!(rgba(&canvas, 1, 2), [255, 255, 255, 255]);
  }

  #[test]
  fn test_stroke_stays_inside() {
    let mut canvas = Canvas::new(Size::new(12, 12)).unwrap();
    canvas.clear(Color::WHITE);
    canvas.stroke_rect(Rect::new(1, 1, 10, 10), Color::BLACK);

    // Both edges land on the first and last pixel of the rect.
    assert_eq!(rgba(&canvas, 1, 5), [0, 0, 0, 255]);
    assert_eq!(rgba(&canvas, 10, 5), [0, 0, 0, 255]);
    assert_eq!(rgba(&canvas, 5, 1), [0, 0, 0, 255]);
    assert_eq!(rgba(&canvas, 5, 10), [0, 0, 0, 255]);
    // Nothing spills outside, and the interior is untouched.
    assert_eq!(rgba(&canvas, 11, 5), [255, 255, 255, 255]);
    assert_eq!(rgba(&canvas, 5, 11), [255, 255, 255, 255]);
    assert_eq!(rgba(&canvas, 5, 5), [255, 255, 255, 255]);
  }

  #[test]
  fn test_mapping_identity() {
    let transform = mapping_transform(
      Size::new(4, 2),
      [Point::new(0, 0), Point::new(4, 0), Point::new(0, 2)],
    );
    assert_eq!(transform, Transform::identity());
  }

  /// A 4x2 layer with its upper-left pixel marked, composited into a 2x4
  /// target with a quarter turn.
  fn rotated_marker(dest: impl Fn(Rect) -> [Point; 3]) -> Canvas {
    let mut layer = Canvas::new(Size::new(4, 2)).unwrap();
    layer.clear(Color::WHITE);
    layer.fill_rect(Rect::new(0, 0, 1, 1), RED);

    let mut target = Canvas::new(Size::new(2, 4)).unwrap();
    target.clear(Color::BLACK);
    let area = target.bounds();
    target.draw_canvas_mapped(&layer, dest(area));
    target
  }

  #[test]
  fn test_clockwise_quarter_turn() {
    let target = rotated_marker(|r| [r.top_right(), r.bottom_right(), r.top_left()]);
    assert_eq!(rgba(&target, 1, 0), [255, 0, 0, 255]);
    assert_eq!(rgba(&target, 0, 0), [255, 255, 255, 255]);
    assert_eq!(rgba(&target, 0, 3), [255, 255, 255, 255]);
  }

  #[test]
  fn test_counter_clockwise_quarter_turn() {
    let target = rotated_marker(|r| [r.bottom_left(), r.top_left(), r.bottom_right()]);
    assert_eq!(rgba(&target, 0, 3), [255, 0, 0, 255]);
    assert_eq!(rgba(&target, 1, 0), [255, 255, 255, 255]);
    assert_eq!(rgba(&target, 1, 3), [255, 255, 255, 255]);
  }

  #[test]
  fn test_save_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");
    let mut canvas = Canvas::new(Size::new(3, 3)).unwrap();
    canvas.clear(RED);
    canvas.save_png(&path).unwrap();
    assert!(path.metadata().unwrap().len() > 0);
    assert!(!canvas.encode_png().unwrap().is_empty());
  }
}
