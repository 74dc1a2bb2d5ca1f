//! Integer pixel geometry used for widget layout.
//!
//! Rectangles follow the usual raster convention: `left`/`top` are inclusive,
//! `right`/`bottom` are exclusive (`right = x + width`). All helpers are pure
//! and total.

use serde::{
  Deserialize,
  Serialize,
};

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
  pub x: i32,
  pub y: i32,
}

impl Point {
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }

  /// The point moved by `(dx, dy)`.
  pub const fn offset(self, dx: i32, dy: i32) -> Self {
    Self::new(self.x + dx, self.y + dy)
  }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
  pub width:  i32,
  pub height: i32,
}

impl Size {
  pub const fn new(width: i32, height: i32) -> Self {
    Self { width, height }
  }

  /// Swap width and height.
  pub const fn transposed(self) -> Self {
    Self::new(self.height, self.width)
  }

  pub const fn is_empty(self) -> bool {
    self.width <= 0 || self.height <= 0
  }
}

/// Independent spacing for each side of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Padding {
  pub left:   i32,
  pub top:    i32,
  pub right:  i32,
  pub bottom: i32,
}

impl Padding {
  pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
    Self {
      left,
      top,
      right,
      bottom,
    }
  }

  /// Same padding on every side.
  pub const fn all(value: i32) -> Self {
    Self::new(value, value, value, value)
  }

  /// Combined left and right padding.
  pub const fn horizontal(self) -> i32 {
    self.left + self.right
  }

  /// Combined top and bottom padding.
  pub const fn vertical(self) -> i32 {
    self.top + self.bottom
  }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
  pub x:      i32,
  pub y:      i32,
  pub width:  i32,
  pub height: i32,
}

impl Rect {
  pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  /// A rectangle at the origin with the given size.
  pub const fn from_size(size: Size) -> Self {
    Self::new(0, 0, size.width, size.height)
  }

  pub const fn left(self) -> i32 {
    self.x
  }

  pub const fn top(self) -> i32 {
    self.y
  }

  pub const fn right(self) -> i32 {
    self.x + self.width
  }

  pub const fn bottom(self) -> i32 {
    self.y + self.height
  }

  pub const fn size(self) -> Size {
    Size::new(self.width, self.height)
  }

  pub const fn is_empty(self) -> bool {
    self.width <= 0 || self.height <= 0
  }

  /// Whether `(x, y)` lies inside, with the right and bottom edges excluded.
  pub const fn contains(self, x: i32, y: i32) -> bool {
    x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
  }

  // --- Corners -----------------------------------------------------------

  pub const fn top_left(self) -> Point {
    Point::new(self.left(), self.top())
  }

  pub const fn top_right(self) -> Point {
    Point::new(self.right(), self.top())
  }

  pub const fn bottom_left(self) -> Point {
    Point::new(self.left(), self.bottom())
  }

  pub const fn bottom_right(self) -> Point {
    Point::new(self.right(), self.bottom())
  }

  // --- Inflate / deflate -------------------------------------------------

  /// Grow by `dx` on the left and right and by `dy` on the top and bottom.
  /// Negative values shrink.
  pub const fn inflated(self, dx: i32, dy: i32) -> Self {
    Self::new(
      self.x - dx,
      self.y - dy,
      self.width + 2 * dx,
      self.height + 2 * dy,
    )
  }

  pub const fn inflated_by_size(self, size: Size) -> Self {
    self.inflated(size.width, size.height)
  }

  pub const fn inflated_by_padding(self, padding: Padding) -> Self {
    Self::new(
      self.x - padding.left,
      self.y - padding.top,
      self.width + padding.horizontal(),
      self.height + padding.vertical(),
    )
  }

  /// Shrink by `dx` on the left and right and by `dy` on the top and bottom.
  pub const fn deflated(self, dx: i32, dy: i32) -> Self {
    Self::new(
      self.x + dx,
      self.y + dy,
      self.width - 2 * dx,
      self.height - 2 * dy,
    )
  }

  pub const fn deflated_by_size(self, size: Size) -> Self {
    self.deflated(size.width, size.height)
  }

  pub const fn deflated_by_padding(self, padding: Padding) -> Self {
    Self::new(
      self.x + padding.left,
      self.y + padding.top,
      self.width - padding.horizontal(),
      self.height - padding.vertical(),
    )
  }

  /// The outline to stroke for a one pixel border that stays inside this
  /// rectangle.
  ///
  /// Stroking a `w x h` outline touches `w + 1` columns and `h + 1` rows, so
  /// the outline is shrunk by one pixel on the right and bottom.
  pub const fn stroke_fixed(self) -> Self {
    Self::new(self.x, self.y, self.width - 1, self.height - 1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_corners() {
    let rect = Rect::new(10, 20, 30, 40);
    assert_eq!(rect.top_left(), Point::new(10, 20));
    assert_eq!(rect.top_right(), Point::new(40, 20));
    assert_eq!(rect.bottom_left(), Point::new(10, 60));
    assert_eq!(rect.bottom_right(), Point::new(40, 60));
  }

  #[test]
  fn test_contains_excludes_far_edges() {
    let rect = Rect::new(0, 0, 120, 120);
    assert!(rect.contains(0, 0));
    assert!(rect.contains(119, 119));
    assert!(!rect.contains(120, 0));
    assert!(!rect.contains(0, 120));
    assert!(!rect.contains(-1, 10));
  }

  #[test]
  fn test_inflate_and_deflate() {
    let rect = Rect::new(10, 10, 20, 20);
    assert_eq!(rect.inflated(2, 3), Rect::new(8, 7, 24, 26));
    assert_eq!(rect.deflated(4, 4), Rect::new(14, 14, 12, 12));
    assert_eq!(rect.inflated(-4, -4), rect.deflated(4, 4));
    assert_eq!(rect.inflated_by_size(Size::new(1, 2)), Rect::new(9, 8, 22, 24));
    assert_eq!(rect.deflated_by_size(Size::new(1, 2)), Rect::new(11, 12, 18, 16));
  }

  #[test]
  fn test_padding() {
    let rect = Rect::new(10, 10, 100, 50);
    let padding = Padding::new(1, 2, 3, 4);
    assert_eq!(padding.horizontal(), 4);
    assert_eq!(padding.vertical(), 6);
    assert_eq!(rect.deflated_by_padding(padding), Rect::new(11, 12, 96, 44));
    assert_eq!(rect.inflated_by_padding(padding), Rect::new(9, 8, 104, 56));
    assert_eq!(rect.deflated_by_padding(Padding::all(4)), rect.deflated(4, 4));
  }

  #[test]
  fn test_point_offset() {
    assert_eq!(Point::new(3, 4).offset(-3, 6), Point::new(0, 10));
  }

  #[test]
  fn test_stroke_fixed() {
    assert_eq!(Rect::new(5, 5, 10, 8).stroke_fixed(), Rect::new(5, 5, 9, 7));
  }

  #[test]
  fn test_transposed_size() {
    assert_eq!(Size::new(60, 80).transposed(), Size::new(80, 60));
    assert!(Size::new(0, 10).is_empty());
  }

  // Small coordinates keep the arithmetic away from overflow.
  quickcheck::quickcheck! {
      fn test_deflate_undoes_inflate(x: i16, y: i16, w: i16, h: i16, dx: i8, dy: i8) -> bool {
          let rect = Rect::new(x.into(), y.into(), w.into(), h.into());
          rect.inflated(dx.into(), dy.into()).deflated(dx.into(), dy.into()) == rect
      }

      fn test_padding_round_trips(x: i16, y: i16, w: i16, h: i16, l: i8, t: i8, r: i8, b: i8) -> bool {
          let rect = Rect::new(x.into(), y.into(), w.into(), h.into());
          let padding = Padding::new(l.into(), t.into(), r.into(), b.into());
          rect.inflated_by_padding(padding).deflated_by_padding(padding) == rect
      }

      fn test_inflate_keeps_center(x: i16, y: i16, w: i16, h: i16, dx: i8, dy: i8) -> bool {
          let rect = Rect::new(x.into(), y.into(), w.into(), h.into());
          let grown = rect.inflated(dx.into(), dy.into());
          grown.left() + grown.right() == rect.left() + rect.right()
            && grown.top() + grown.bottom() == rect.top() + rect.bottom()
      }
  }
}
