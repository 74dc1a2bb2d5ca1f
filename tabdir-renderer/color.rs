use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  Serializer,
  de,
};

/// RGBA color with floating point components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
  /// Red component (0.0 to 1.0)
  pub r: f32,
  /// Green component (0.0 to 1.0)
  pub g: f32,
  /// Blue component (0.0 to 1.0)
  pub b: f32,
  /// Alpha component (0.0 = transparent, 1.0 = opaque)
  pub a: f32,
}

impl Color {
  /// Create a new color with RGBA components
  ///
  /// Components should be in the range 0.0 to 1.0
  pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
    Self { r, g, b, a }
  }

  /// Create an opaque color with RGB components
  pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
    Self { r, g, b, a: 1.0 }
  }

  /// Create an opaque color from a `0xRRGGBB` value
  ///
  /// # Example
  ///
  /// ```rust
  /// # use tabdir_renderer::Color;
  /// let red = Color::from_hex(0xFF0000);
  /// assert_eq!(red.to_rgba8(), [255, 0, 0, 255]);
  /// ```
  pub fn from_hex(hex: u32) -> Self {
    let [_, r, g, b] = hex.to_be_bytes();
    Self::from_rgba8(r, g, b, 255)
  }

  /// Create a color from 8-bit channels
  pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self {
      r: r as f32 / 255.0,
      g: g as f32 / 255.0,
      b: b as f32 / 255.0,
      a: a as f32 / 255.0,
    }
  }

  /// Quantize to 8-bit channels
  pub fn to_rgba8(self) -> [u8; 4] {
    let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [q(self.r), q(self.g), q(self.b), q(self.a)]
  }

  /// Same color with a different alpha
  pub fn with_alpha(self, a: f32) -> Self {
    Self { a, ..self }
  }

  /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
  pub fn parse(s: &str) -> Option<Self> {
    let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if !digits.is_ascii() {
      return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    match digits.len() {
      6 => Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255)),
      8 => {
        Some(Self::from_rgba8(
          channel(0)?,
          channel(2)?,
          channel(4)?,
          channel(6)?,
        ))
      },
      _ => None,
    }
  }

  /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
  pub fn to_hex_string(self) -> String {
    let [r, g, b, a] = self.to_rgba8();
    if a == 255 {
      format!("#{r:02x}{g:02x}{b:02x}")
    } else {
      format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
  }

  pub(crate) fn to_skia(self) -> tiny_skia::Color {
    let [r, g, b, a] = self.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
  }

  // Common colors
  //

  pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

  pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

  pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

  pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Serialize for Color {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_hex_string())
  }
}

impl<'de> Deserialize<'de> for Color {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    Color::parse(&s).ok_or_else(|| {
      de::Error::custom(format!(
        "invalid color '{s}', expected #rrggbb or #rrggbbaa"
      ))
    })
  }
}
