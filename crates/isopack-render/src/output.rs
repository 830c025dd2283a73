//! Image file output
//!
//! Canvases persist as PNG files at fixed paths, overwriting whatever is
//! there; there is no versioning or atomic-write guarantee.

use std::path::Path;

use isopack_core::{IndexedCanvas, RgbCanvas};
use isopack_palette::Palette;
use tracing::info;

use crate::error::RenderError;

/// Save an indexed canvas by expanding every index through the palette.
///
/// Index 0 keeps the palette's alpha, so the shaded variant's reserved
/// entry yields a transparent background.
pub fn save_indexed(
    canvas: &IndexedCanvas,
    palette: &Palette,
    path: &Path,
) -> Result<(), RenderError> {
    let mut img = image::RgbaImage::new(canvas.width, canvas.height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let index = canvas.get(x, y).unwrap_or(0);
        *pixel = image::Rgba(palette.color(index));
    }
    img.save(path)?;

    info!(
        "Wrote {}x{} indexed render to {}",
        canvas.width,
        canvas.height,
        path.display()
    );
    Ok(())
}

/// Save an RGB canvas as-is.
pub fn save_rgb(canvas: &RgbCanvas, path: &Path) -> Result<(), RenderError> {
    let img = image::RgbImage::from_raw(canvas.width, canvas.height, canvas.data().to_vec())
        .ok_or_else(|| {
            image::ImageError::Parameter(image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            ))
        })?;
    img.save(path)?;

    info!(
        "Wrote {}x{} render to {}",
        canvas.width,
        canvas.height,
        path.display()
    );
    Ok(())
}
