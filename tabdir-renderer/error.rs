use thiserror::Error;

/// Errors that can occur in the renderer
#[derive(Error, Debug, Clone)]
pub enum RendererError {
  /// Unable to allocate a drawing surface (zero-sized or too large)
  #[error("Failed to create surface: {0}")]
  SurfaceCreation(String),

  /// Failure while encoding the surface to an image file
  #[error("Failed to encode image: {0}")]
  Encode(String),
}

pub type Result<T> = std::result::Result<T, RendererError>;
