//! Swatch layout and hit testing.
//!
//! The control is split into three swatches: the top third belongs to
//! [`Direction::Right`], the rest is halved into [`Direction::Down`] (left)
//! and [`Direction::Up`] (right). All divisions are integer divisions, so hit
//! regions and drawn swatches agree pixel for pixel.

use tabdir_geometry::{
  Point,
  Rect,
};

use crate::Direction;

/// Direction whose swatch contains `(x, y)`, or `None` outside `bounds`.
pub fn hit_test(bounds: Rect, x: i32, y: i32) -> Option<Direction> {
  if !bounds.contains(x, y) {
    return None;
  }

  if y - bounds.top() < bounds.height / 3 {
    Some(Direction::Right)
  } else if x - bounds.left() < bounds.width / 2 {
    Some(Direction::Down)
  } else {
    Some(Direction::Up)
  }
}

/// Rectangle drawn for `direction` inside `bounds`.
pub fn swatch_bounds(bounds: Rect, direction: Direction) -> Rect {
  let third = bounds.height / 3;
  match direction {
    Direction::Right => Rect::new(bounds.left(), bounds.top(), bounds.width, third),
    Direction::Down => {
      Rect::new(
        bounds.left(),
        bounds.top() + third,
        bounds.width / 2,
        bounds.height * 2 / 3,
      )
    },
    Direction::Up => {
      Rect::new(
        bounds.left() + bounds.width / 2,
        bounds.top() + third,
        bounds.width / 2,
        bounds.height * 2 / 3,
      )
    },
  }
}

/// Where the upper-left, upper-right and lower-left corners of a horizontal
/// text layer land inside `swatch` to produce the rotated text.
///
/// The layer is `swatch` transposed. `None` for [`Direction::Right`], which
/// is drawn without a layer.
pub fn layer_mapping(swatch: Rect, direction: Direction) -> Option<[Point; 3]> {
  match direction {
    Direction::Right => None,
    // Quarter turn clockwise: the text runs down the swatch.
    Direction::Down => Some([swatch.top_right(), swatch.bottom_right(), swatch.top_left()]),
    // Quarter turn counter-clockwise: the text runs up the swatch.
    Direction::Up => Some([swatch.bottom_left(), swatch.top_left(), swatch.bottom_right()]),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const BOUNDS: Rect = Rect::new(0, 0, 120, 120);

  #[test]
  fn test_hit_test_examples() {
    assert_eq!(hit_test(BOUNDS, 60, 10), Some(Direction::Right));
    assert_eq!(hit_test(BOUNDS, 10, 100), Some(Direction::Down));
    assert_eq!(hit_test(BOUNDS, 100, 100), Some(Direction::Up));
    assert_eq!(hit_test(BOUNDS, 200, 200), None);
  }

  #[test]
  fn test_hit_test_boundaries() {
    assert_eq!(hit_test(BOUNDS, 0, 39), Some(Direction::Right));
    assert_eq!(hit_test(BOUNDS, 0, 40), Some(Direction::Down));
    assert_eq!(hit_test(BOUNDS, 59, 119), Some(Direction::Down));
    assert_eq!(hit_test(BOUNDS, 60, 40), Some(Direction::Up));
    assert_eq!(hit_test(BOUNDS, 120, 60), None);
    assert_eq!(hit_test(BOUNDS, 60, 120), None);
    assert_eq!(hit_test(BOUNDS, -1, 60), None);
  }

  #[test]
  fn test_hit_test_offset_bounds() {
    let bounds = Rect::new(100, 50, 120, 120);
    assert_eq!(hit_test(bounds, 160, 60), Some(Direction::Right));
    assert_eq!(hit_test(bounds, 110, 150), Some(Direction::Down));
    assert_eq!(hit_test(bounds, 200, 150), Some(Direction::Up));
    assert_eq!(hit_test(bounds, 10, 60), None);
  }

  #[test]
  fn test_swatches_tile_default_bounds() {
    assert_eq!(swatch_bounds(BOUNDS, Direction::Right), Rect::new(0, 0, 120, 40));
    assert_eq!(swatch_bounds(BOUNDS, Direction::Down), Rect::new(0, 40, 60, 80));
    assert_eq!(swatch_bounds(BOUNDS, Direction::Up), Rect::new(60, 40, 60, 80));
  }

  #[test]
  fn test_layer_mapping() {
    let swatch = Rect::new(0, 40, 60, 80);
    assert_eq!(layer_mapping(swatch, Direction::Right), None);
    assert_eq!(
      layer_mapping(swatch, Direction::Down),
      Some([Point::new(60, 40), Point::new(60, 120), Point::new(0, 40)])
    );
    assert_eq!(
      layer_mapping(swatch, Direction::Up),
      Some([Point::new(0, 120), Point::new(0, 40), Point::new(60, 120)])
    );
  }

  fn bounds_from(x: i16, y: i16, w: u8, h: u8) -> Rect {
    Rect::new(x.into(), y.into(), w.into(), h.into())
  }

  quickcheck::quickcheck! {
      fn test_outside_is_none(x: i16, y: i16, w: u8, h: u8, px: i16, py: i16) -> bool {
          let bounds = bounds_from(x, y, w, h);
          let (px, py) = (px.into(), py.into());
          bounds.contains(px, py) || hit_test(bounds, px, py).is_none()
      }

      fn test_top_third_is_right(x: i16, y: i16, w: u8, h: u8, px: i16, py: i16) -> bool {
          let bounds = bounds_from(x, y, w, h);
          let (px, py): (i32, i32) = (px.into(), py.into());
          if !bounds.contains(px, py) || py - bounds.top() >= bounds.height / 3 {
              return true;
          }
          hit_test(bounds, px, py) == Some(Direction::Right)
      }

      fn test_lower_part_splits_at_midpoint(x: i16, y: i16, w: u8, h: u8, px: i16, py: i16) -> bool {
          let bounds = bounds_from(x, y, w, h);
          let (px, py): (i32, i32) = (px.into(), py.into());
          if !bounds.contains(px, py) || py - bounds.top() < bounds.height / 3 {
              return true;
          }
          let expected = if px - bounds.left() < bounds.width / 2 {
              Direction::Down
          } else {
              Direction::Up
          };
          hit_test(bounds, px, py) == Some(expected)
      }

      fn test_hit_lands_in_its_swatch(w: u8, h: u8, px: u8, py: u8) -> bool {
          let bounds = bounds_from(0, 0, w, h);
          let (px, py): (i32, i32) = (px.into(), py.into());
          match hit_test(bounds, px, py) {
              // Odd sizes leave a sliver on the right/bottom that no swatch covers.
              Some(direction) => {
                  let swatch = swatch_bounds(bounds, direction);
                  swatch.contains(px, py)
                    || px >= swatch.right()
                    || py >= swatch.bottom()
              },
              None => true,
          }
      }
  }
}
