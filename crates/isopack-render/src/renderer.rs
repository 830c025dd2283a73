//! Renderer strategies
//!
//! One synchronous seam over the two drawing paths. Both strategies take
//! the palette cache explicitly at construction; nothing reaches for
//! hidden global state, and a render call owns every buffer it allocates.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use isopack_core::{Container, IndexedCanvas, PackedItem, RgbCanvas};
use isopack_palette::{PaletteCache, PaletteVariant};
use tracing::info;

use crate::boxes::{canvas_layout, draw_box, paint_order, DEFAULT_BORDER};
use crate::cells::render_voxel_grid;
use crate::error::RenderError;
use crate::output::{save_indexed, save_rgb};
use crate::voxel::{voxelize, DEFAULT_CELL_SIZE};

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Voxel edge length in container units
    pub cell_size: f64,
    /// Margin around the projected container, box rendering only
    pub border: f32,
    /// Where the rendered image lands; overwritten on every render
    pub output_path: PathBuf,
    /// Filename prefix for incremental frames, box rendering only
    pub frame_prefix: String,
    /// Save one numbered frame per item in placement order
    pub incremental: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            border: DEFAULT_BORDER,
            output_path: PathBuf::from("result.png"),
            frame_prefix: "pack_".to_string(),
            incremental: false,
        }
    }
}

impl RenderConfig {
    /// Path of the numbered frame image for one incremental step
    pub fn frame_path(&self, index: usize) -> PathBuf {
        let dir = self.output_path.parent().unwrap_or(Path::new("."));
        dir.join(format!("{}{:02}.png", self.frame_prefix, index))
    }
}

/// A rendered packing image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutput {
    /// Voxel-cell path: palette indices
    Indexed(IndexedCanvas),
    /// Box path: RGB pixels
    Rgb(RgbCanvas),
}

impl RenderOutput {
    /// Get the dimensions of the output
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Indexed(c) => (c.width, c.height),
            Self::Rgb(c) => (c.width, c.height),
        }
    }

    /// Get as indexed canvas
    pub fn as_indexed(&self) -> Option<&IndexedCanvas> {
        match self {
            Self::Indexed(c) => Some(c),
            _ => None,
        }
    }

    /// Get as RGB canvas
    pub fn as_rgb(&self) -> Option<&RgbCanvas> {
        match self {
            Self::Rgb(c) => Some(c),
            _ => None,
        }
    }
}

/// A rendering strategy over a packing result.
pub trait Renderer {
    /// Render the placed items and persist the image file(s)
    fn render(
        &self,
        container: &Container,
        items: &[PackedItem],
    ) -> Result<RenderOutput, RenderError>;

    /// Strategy name for debugging
    fn name(&self) -> &'static str;
}

/// Voxel-cell strategy: discretize, stamp 8x8 shaded tiles, emit an
/// indexed-color image through the shaded palette.
pub struct VoxelRenderer {
    config: RenderConfig,
    palettes: Arc<PaletteCache>,
}

impl VoxelRenderer {
    /// Create a new voxel renderer
    pub fn new(config: RenderConfig, palettes: Arc<PaletteCache>) -> Self {
        Self { config, palettes }
    }

    /// Get configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Renderer for VoxelRenderer {
    fn render(
        &self,
        container: &Container,
        items: &[PackedItem],
    ) -> Result<RenderOutput, RenderError> {
        info!("Voxel-rendering {} placed items", items.len());

        let palette = self.palettes.get(PaletteVariant::Shaded)?;
        let grid = voxelize(container, items, self.config.cell_size);
        let canvas = render_voxel_grid(&grid);

        save_indexed(&canvas, palette, &self.config.output_path)?;
        Ok(RenderOutput::Indexed(canvas))
    }

    fn name(&self) -> &'static str {
        "voxel"
    }
}

/// Whole-box strategy: painter-ordered filled silhouettes through the
/// solid palette, optionally one frame file per item.
pub struct SolidRenderer {
    config: RenderConfig,
    palettes: Arc<PaletteCache>,
}

impl SolidRenderer {
    /// Create a new box renderer
    pub fn new(config: RenderConfig, palettes: Arc<PaletteCache>) -> Self {
        Self { config, palettes }
    }

    /// Get configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Renderer for SolidRenderer {
    fn render(
        &self,
        container: &Container,
        items: &[PackedItem],
    ) -> Result<RenderOutput, RenderError> {
        info!("Box-rendering {} placed items", items.len());

        let palette = self.palettes.get(PaletteVariant::Solid)?;
        let layout = canvas_layout(container, self.config.border);
        let mut canvas = RgbCanvas::new(layout.width, layout.height);

        for (index, item) in paint_order(items).iter().enumerate() {
            draw_box(&mut canvas, &layout, container, item, palette, true);

            if self.config.incremental {
                save_rgb(&canvas, &self.config.frame_path(index))?;
            }
        }

        save_rgb(&canvas, &self.config.output_path)?;
        Ok(RenderOutput::Rgb(canvas))
    }

    fn name(&self) -> &'static str {
        "solid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn item(id: i32, origin: (f64, f64, f64), dims: (f64, f64, f64)) -> PackedItem {
        PackedItem {
            id,
            coord_x: origin.0,
            coord_y: origin.1,
            coord_z: origin.2,
            pack_dim_x: dims.0,
            pack_dim_y: dims.1,
            pack_dim_z: dims.2,
        }
    }

    fn config_in(dir: &TempDir) -> (RenderConfig, Arc<PaletteCache>) {
        let config = RenderConfig {
            output_path: dir.path().join("result.png"),
            ..Default::default()
        };
        (config, Arc::new(PaletteCache::new(dir.path())))
    }

    #[test]
    fn test_voxel_renderer_end_to_end() {
        let dir = TempDir::new().unwrap();
        let (config, palettes) = config_in(&dir);
        let renderer = VoxelRenderer::new(config, palettes);

        let container = Container::new(1, 100.0, 200.0, 300.0);
        let items = [item(1, (0.0, 0.0, 0.0), (10.0, 20.0, 30.0))];
        let output = renderer.render(&container, &items).unwrap();

        // Grid is 20x40x60; canvas follows the tile formulas.
        assert_eq!(
            output.dimensions(),
            (4 * (20 + 40), 2 * (20 + 40) + 5 * 60 - 1)
        );
        assert!(dir.path().join("result.png").exists());
        assert!(dir.path().join("palette_shaded.png").exists());

        let canvas = output.as_indexed().unwrap();
        assert!(canvas.data().iter().any(|&p| p != 0));
    }

    #[test]
    fn test_solid_renderer_end_to_end() {
        let dir = TempDir::new().unwrap();
        let (config, palettes) = config_in(&dir);
        let renderer = SolidRenderer::new(config, palettes);

        let container = Container::new(1, 100.0, 100.0, 100.0);
        let items = [
            item(1, (0.0, 0.0, 0.0), (50.0, 50.0, 50.0)),
            item(2, (50.0, 0.0, 0.0), (50.0, 50.0, 50.0)),
        ];
        let output = renderer.render(&container, &items).unwrap();

        assert!(dir.path().join("result.png").exists());
        assert!(dir.path().join("palette_solid.png").exists());
        assert!(output.as_rgb().unwrap().data().iter().any(|&p| p != 0));
    }

    #[test]
    fn test_incremental_mode_saves_numbered_frames() {
        let dir = TempDir::new().unwrap();
        let (mut config, palettes) = config_in(&dir);
        config.incremental = true;
        let renderer = SolidRenderer::new(config, palettes);

        let container = Container::new(1, 60.0, 20.0, 20.0);
        let items = [
            item(1, (0.0, 0.0, 0.0), (20.0, 20.0, 20.0)),
            item(2, (20.0, 0.0, 0.0), (20.0, 20.0, 20.0)),
            item(3, (40.0, 0.0, 0.0), (20.0, 20.0, 20.0)),
        ];
        renderer.render(&container, &items).unwrap();

        for index in 0..3 {
            assert!(dir.path().join(format!("pack_{:02}.png", index)).exists());
        }
        assert!(!dir.path().join("pack_03.png").exists());
    }

    #[test]
    fn test_repeat_renders_are_identical() {
        let dir = TempDir::new().unwrap();
        let (config, palettes) = config_in(&dir);
        let renderer = VoxelRenderer::new(config, palettes);

        let container = Container::new(1, 50.0, 50.0, 50.0);
        let items = [item(3, (0.0, 0.0, 0.0), (25.0, 25.0, 25.0))];

        let first = renderer.render(&container, &items).unwrap();
        let second = renderer.render(&container, &items).unwrap();
        assert_eq!(first, second);
    }
}
