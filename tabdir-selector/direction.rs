use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

/// Orientation of tab text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  /// Horizontal, reading left to right
  #[default]
  Right,
  /// Rotated a quarter turn clockwise, reading top to bottom
  Down,
  /// Rotated a quarter turn counter-clockwise, reading bottom to top
  Up,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown text direction '{0}', expected one of: right, down, up")]
pub struct ParseDirectionError(String);

impl Direction {
  /// All directions in drawing order.
  pub const ALL: [Direction; 3] = [Direction::Right, Direction::Down, Direction::Up];

  /// Integer code used by hosts that store "no direction" as a number.
  pub const NONE_CODE: i32 = -1;

  pub const fn code(self) -> i32 {
    match self {
      Direction::Right => 0,
      Direction::Down => 1,
      Direction::Up => 2,
    }
  }

  pub const fn from_code(code: i32) -> Option<Self> {
    match code {
      0 => Some(Direction::Right),
      1 => Some(Direction::Down),
      2 => Some(Direction::Up),
      _ => None,
    }
  }

  /// Code for an optional direction, [`Direction::NONE_CODE`] for `None`.
  pub fn code_of(direction: Option<Self>) -> i32 {
    direction.map_or(Self::NONE_CODE, Direction::code)
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      Direction::Right => "right",
      Direction::Down => "down",
      Direction::Up => "up",
    }
  }

  /// Whether text in this direction is drawn rotated.
  pub const fn is_vertical(self) -> bool {
    !matches!(self, Direction::Right)
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Direction {
  type Err = ParseDirectionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "right" => Ok(Direction::Right),
      "down" => Ok(Direction::Down),
      "up" => Ok(Direction::Up),
      _ => Err(ParseDirectionError(s.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_codes_round_trip() {
    for direction in Direction::ALL {
      assert_eq!(Direction::from_code(direction.code()), Some(direction));
    }
    assert_eq!(Direction::from_code(Direction::NONE_CODE), None);
    assert_eq!(Direction::from_code(3), None);
    assert_eq!(Direction::code_of(None), -1);
    assert_eq!(Direction::code_of(Some(Direction::Up)), 2);
  }

  #[test]
  fn test_default_is_right() {
    assert_eq!(Direction::default(), Direction::Right);
  }

  #[test]
  fn test_parse() {
    assert_eq!("Down".parse::<Direction>(), Ok(Direction::Down));
    assert_eq!(" up ".parse::<Direction>(), Ok(Direction::Up));
    assert!("left".parse::<Direction>().is_err());
    assert_eq!(Direction::Right.to_string(), "right");
  }
}
