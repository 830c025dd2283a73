//! Render error types

use isopack_palette::PaletteError;
use thiserror::Error;

/// Errors from a render operation.
///
/// Only file I/O can fail; geometric degenerate cases (out-of-range ids,
/// stamps past the canvas edge) degrade silently by design.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Palette unavailable: {0}")]
    Palette(#[from] PaletteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
