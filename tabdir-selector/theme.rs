//! Colors and font used to draw the selector, loadable from TOML.
//!
//! Every key in a theme file is optional; missing keys keep the default
//! theme's value:
//!
//! ```toml
//! window = "#ffffff"
//!
//! [font]
//! family = "sans-serif"
//! size = 14.0
//! italic = true
//!
//! [selected]
//! background = "#0078d7"
//! foreground = "#ffffff"
//! ```

use std::{
  fs,
  io::Error as IOError,
  path::{
    Path,
    PathBuf,
  },
};

use serde::{
  Deserialize,
  Serialize,
};
use tabdir_renderer::{
  Color,
  Font,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read theme {}: {source}", path.display())]
  Io { path: PathBuf, source: IOError },
  #[error("failed to parse theme: {0}")]
  Parse(#[from] toml::de::Error),
}

/// Colors for one visual state of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SwatchStyle {
  pub background: Color,
  pub foreground: Color,
  pub border:     Color,
}

/// Everything the selector needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorTheme {
  /// Color behind the swatches
  pub window:   Color,
  pub font:     Font,
  /// Swatches that are neither hovered nor selected
  pub normal:   SwatchStyle,
  pub hovered:  SwatchStyle,
  pub selected: SwatchStyle,
}

// Light desktop palette.
const WINDOW: u32 = 0xFFFFFF;
const CONTROL: u32 = 0xF0F0F0;
const CONTROL_LIGHT: u32 = 0xE3E3E3;
const CONTROL_DARK: u32 = 0xA0A0A0;
const CONTROL_TEXT: u32 = 0x000000;
const HIGHLIGHT: u32 = 0x0078D7;
const HIGHLIGHT_TEXT: u32 = 0xFFFFFF;

impl Default for SelectorTheme {
  fn default() -> Self {
    let border = Color::from_hex(CONTROL_DARK);
    Self {
      window:   Color::from_hex(WINDOW),
      font:     Font::new("sans-serif", 14.0).italic(true),
      normal:   SwatchStyle {
        background: Color::from_hex(CONTROL),
        foreground: Color::from_hex(CONTROL_TEXT),
        border,
      },
      hovered:  SwatchStyle {
        background: Color::from_hex(CONTROL_LIGHT),
        foreground: Color::from_hex(CONTROL_TEXT),
        border,
      },
      selected: SwatchStyle {
        background: Color::from_hex(HIGHLIGHT),
        foreground: Color::from_hex(HIGHLIGHT_TEXT),
        border,
      },
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SwatchStyleRaw {
  background: Option<Color>,
  foreground: Option<Color>,
  border:     Option<Color>,
}

impl SwatchStyleRaw {
  fn apply(self, base: SwatchStyle) -> SwatchStyle {
    SwatchStyle {
      background: self.background.unwrap_or(base.background),
      foreground: self.foreground.unwrap_or(base.foreground),
      border:     self.border.unwrap_or(base.border),
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FontRaw {
  family: Option<String>,
  size:   Option<f32>,
  italic: Option<bool>,
}

impl FontRaw {
  fn apply(self, base: Font) -> Font {
    Font {
      family: self.family.unwrap_or(base.family),
      size:   self.size.unwrap_or(base.size),
      italic: self.italic.unwrap_or(base.italic),
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SelectorThemeRaw {
  window:   Option<Color>,
  font:     Option<FontRaw>,
  normal:   Option<SwatchStyleRaw>,
  hovered:  Option<SwatchStyleRaw>,
  selected: Option<SwatchStyleRaw>,
}

impl SelectorTheme {
  /// Parse a theme, filling missing keys from [`SelectorTheme::default`].
  pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
    let raw: SelectorThemeRaw = toml::from_str(contents)?;
    let base = Self::default();
    Ok(Self {
      window:   raw.window.unwrap_or(base.window),
      font:     raw.font.unwrap_or_default().apply(base.font),
      normal:   raw.normal.unwrap_or_default().apply(base.normal),
      hovered:  raw.hovered.unwrap_or_default().apply(base.hovered),
      selected: raw.selected.unwrap_or_default().apply(base.selected),
    })
  }

  /// Load a theme file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| {
      ConfigError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;
    let theme = Self::from_toml(&contents)?;
    log::debug!("loaded selector theme from {}", path.display());
    Ok(theme)
  }
}
