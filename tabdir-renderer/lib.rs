//! # tabdir renderer
//!
//! A small CPU renderer for widget drawing, built on tiny-skia.
//!
//! [`Renderer`] owns a target [`Canvas`] and a [`TextPainter`]. Besides
//! rectangle fills, inside-the-rect borders and clipped text, it can draw
//! into a short-lived layer and composite that layer through a three-point
//! mapping, which is how rotated text is produced.
//!
//! ```rust,no_run
//! use tabdir_renderer::{
//!   Color,
//!   Font,
//!   Rect,
//!   Renderer,
//!   Size,
//!   TextFlags,
//! };
//!
//! # fn main() -> tabdir_renderer::Result<()> {
//! let mut renderer = Renderer::new(Size::new(120, 40))?;
//! renderer.begin_frame();
//! let area = Rect::new(0, 0, 120, 40);
//! renderer.fill_rect(area, Color::from_hex(0xF0F0F0));
//! renderer.stroke_rect(area, Color::GRAY);
//! renderer.draw_text(
//!   "abc",
//!   &Font::default(),
//!   area.deflated(4, 4),
//!   Color::BLACK,
//!   TextFlags::SINGLE_LINE | TextFlags::VERTICAL_CENTER,
//! );
//! renderer.save_png("frame.png")?;
//! # Ok(())
//! # }
//! ```

mod canvas;
mod color;
mod error;
pub mod event;
mod renderer;
mod text;

pub use canvas::{
  Canvas,
  mapping_transform,
};
pub use color::Color;
pub use error::{
  RendererError,
  Result,
};
pub use event::{
  MouseButton,
  PointerEvent,
};
pub use renderer::{
  Renderer,
  RendererConfig,
};
pub use tabdir_geometry::{
  Padding,
  Point,
  Rect,
  Size,
};
pub use text::{
  Font,
  TextFlags,
  TextPainter,
};
