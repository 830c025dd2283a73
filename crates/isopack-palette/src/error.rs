//! Palette error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from palette synthesis, persistence and loading.
///
/// There is no fallback palette: if the file cannot be created or read
/// the error propagates to the render call.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Palette file {path} has wrong shape: {width}x{height}, expected 256x1")]
    BadShape {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}
