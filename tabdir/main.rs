mod cli;

use anyhow::{
  Context,
  Result,
};
use tabdir_geometry::Rect;
use tabdir_renderer::{
  MouseButton,
  PointerEvent,
  Renderer,
  RendererConfig,
};
use tabdir_selector::{
  Component,
  EventResult,
  SelectorTheme,
  TextDirectionSelector,
};

use crate::cli::CliOptions;

fn main() -> Result<()> {
  env_logger::init();
  let options = CliOptions::parse()?;

  let theme = match &options.theme {
    Some(path) => {
      SelectorTheme::load(path)
        .with_context(|| format!("failed to load theme {}", path.display()))?
    },
    None => SelectorTheme::default(),
  };
  let background_color = theme.window;

  let bounds = Rect::from_size(options.size);
  let mut selector = TextDirectionSelector::new()
    .with_bounds(bounds)
    .with_theme(theme)
    .on_change(|direction| log::info!("selection changed to {direction}"));

  if let Some(direction) = options.select {
    let changed = selector.set_selected(direction);
    log::debug!("select {direction}: changed = {changed}");
  }

  let events = options
    .clicks
    .iter()
    .map(|point| {
      PointerEvent::Clicked {
        x:      point.x,
        y:      point.y,
        button: MouseButton::Left,
      }
    })
    .chain(options.hover.map(|point| {
      PointerEvent::Moved {
        x: point.x,
        y: point.y,
      }
    }))
    .chain(options.leave.then_some(PointerEvent::Left));

  for event in events {
    let result = selector.handle_event(&event);
    log_result(&event, result);
  }

  let mut renderer = Renderer::with_config(options.size, RendererConfig { background_color })
    .context("failed to create render target")?;
  renderer.begin_frame();
  selector
    .render(&mut renderer, bounds)
    .context("failed to render selector")?;
  renderer
    .save_png(&options.output)
    .with_context(|| format!("failed to write {}", options.output.display()))?;
  log::info!("wrote {}", options.output.display());

  println!("{}", selector.selected());
  Ok(())
}

fn log_result(event: &PointerEvent, result: EventResult) {
  match result {
    EventResult::Ignored => log::debug!("{event:?}: ignored"),
    EventResult::Redraw => log::debug!("{event:?}: redraw"),
    EventResult::SelectionChanged(direction) => {
      log::debug!("{event:?}: selection changed to {direction}")
    },
  }
}
