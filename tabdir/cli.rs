use std::path::PathBuf;

use anyhow::{
  Result,
  bail,
};
use clap::Parser;
use tabdir_geometry::{
  Point,
  Size,
};
use tabdir_selector::{
  DEFAULT_SIZE,
  Direction,
};

#[derive(Clone, Debug)]
pub struct CliOptions {
  pub size:   Size,
  pub theme:  Option<PathBuf>,
  pub select: Option<Direction>,
  pub clicks: Vec<Point>,
  pub hover:  Option<Point>,
  pub leave:  bool,
  pub output: PathBuf,
}

impl CliOptions {
  pub fn parse() -> Result<Self> {
    let raw = RawCli::parse();
    raw.try_into()
  }
}

/// Drive a text direction selector with scripted pointer input and render it
/// to a PNG.
#[derive(Parser, Debug)]
#[command(name = "tabdir", about, long_about = None)]
struct RawCli {
  /// Control width in pixels
  #[arg(long, default_value_t = DEFAULT_SIZE.width)]
  width: i32,

  /// Control height in pixels
  #[arg(long, default_value_t = DEFAULT_SIZE.height)]
  height: i32,

  /// Load colors and font from a TOML theme
  #[arg(long, value_name = "FILE")]
  theme: Option<PathBuf>,

  /// Initial selection (right, down or up)
  #[arg(long, value_name = "DIR")]
  select: Option<Direction>,

  /// Click at X,Y; repeat to click several times in order
  #[arg(long = "click", value_name = "X,Y", value_parser = parse_point)]
  clicks: Vec<Point>,

  /// Leave the pointer hovering at X,Y
  #[arg(long, value_name = "X,Y", value_parser = parse_point)]
  hover: Option<Point>,

  /// Move the pointer out of the control last
  #[arg(long)]
  leave: bool,

  /// Where to write the rendered PNG
  #[arg(short, long, value_name = "FILE")]
  output: PathBuf,
}

impl TryFrom<RawCli> for CliOptions {
  type Error = anyhow::Error;

  fn try_from(raw: RawCli) -> Result<Self> {
    let size = Size::new(raw.width, raw.height);
    if size.is_empty() {
      bail!("control size must be positive, got {}x{}", raw.width, raw.height);
    }

    Ok(Self {
      size,
      theme: raw.theme,
      select: raw.select,
      clicks: raw.clicks,
      hover: raw.hover,
      leave: raw.leave,
      output: raw.output,
    })
  }
}

fn parse_point(value: &str) -> std::result::Result<Point, String> {
  let (x, y) = value
    .split_once(',')
    .ok_or_else(|| format!("expected X,Y, got '{value}'"))?;
  let coordinate = |part: &str| {
    part
      .trim()
      .parse::<i32>()
      .map_err(|err| format!("invalid coordinate '{part}' in '{value}': {err}"))
  };
  Ok(Point::new(coordinate(x)?, coordinate(y)?))
}
