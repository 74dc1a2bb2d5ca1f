//! # tabdir selector
//!
//! A small control for choosing the direction tab text is drawn in.
//!
//! The control is split into three swatches showing the sample text
//! horizontally ([`Direction::Right`]), rotated clockwise
//! ([`Direction::Down`]) and rotated counter-clockwise ([`Direction::Up`]).
//! Pointer movement highlights the swatch under the cursor and a click
//! selects it.
//!
//! ```rust,no_run
//! use tabdir_selector::{
//!   Component,
//!   Direction,
//!   TextDirectionSelector,
//! };
//! use tabdir_renderer::{
//!   Rect,
//!   Renderer,
//!   Size,
//! };
//!
//! # fn main() -> tabdir_renderer::Result<()> {
//! let mut selector =
//!   TextDirectionSelector::new().on_change(|direction| println!("now {direction}"));
//! assert!(selector.handle_pointer_click(10, 100).needs_redraw());
//! assert_eq!(selector.selected(), Direction::Down);
//!
//! let mut renderer = Renderer::new(Size::new(120, 120))?;
//! renderer.begin_frame();
//! selector.render(&mut renderer, Rect::new(0, 0, 120, 120))?;
//! renderer.save_png("selector.png")?;
//! # Ok(())
//! # }
//! ```

mod component;
mod direction;
pub mod layout;
mod selector;
mod theme;

pub use component::{
  Component,
  EventResult,
};
pub use direction::{
  Direction,
  ParseDirectionError,
};
pub use layout::{
  hit_test,
  layer_mapping,
  swatch_bounds,
};
pub use selector::{
  DEFAULT_SIZE,
  SAMPLE_TEXT,
  TEXT_PADDING,
  TextDirectionSelector,
};
pub use theme::{
  ConfigError,
  SelectorTheme,
  SwatchStyle,
};
