//! Deterministic palette synthesis
//!
//! Both variants walk a fixed permutation of deviation steps and rotate
//! which RGB channel carries the "tone" and which the "deviation",
//! producing a hue ramp across the six sextants
//! red -> yellow -> green -> cyan -> blue -> magenta.

use std::path::Path;

use crate::error::PaletteError;

/// Total entries in every palette
pub const PALETTE_SIZE: usize = 256;

/// Highest item id usable with the solid variant
pub const SOLID_ID_MAX: i32 = 192;

/// Highest item id usable with the shaded variant
pub const SHADED_ID_MAX: i32 = 48;

/// Which synthesis procedure to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteVariant {
    /// 192 full-saturation fills for whole-box rendering
    Solid,
    /// Transparent slot + 144 face-shade colors + grayscale ramp,
    /// for voxel-cell stamps
    Shaded,
}

impl PaletteVariant {
    /// Fixed on-disk filename for this variant
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Solid => "palette_solid.png",
            Self::Shaded => "palette_shaded.png",
        }
    }
}

// 33-level tone ramp for the solid variant.
const SOLID_TONES: [u8; 33] = [
    0, 7, 15, 23, 31, 39, 47, 55, 63, 71, 79, 87, 95, 103, 111, 119, 127, 135, 143, 151, 159, 167,
    175, 183, 191, 199, 207, 215, 223, 231, 239, 247, 255,
];

// Deviation permutation: visits coarse steps first so adjacent item ids
// get visibly distinct hues.
const SOLID_STEPS: [usize; 32] = [
    0, 16, 8, 24, 4, 12, 20, 28, 2, 6, 10, 14, 18, 22, 26, 30, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19,
    21, 23, 25, 27, 29, 31,
];

// 11-level tone ramp for the shaded variant.
const SHADED_TONES: [u8; 11] = [0, 25, 51, 76, 102, 127, 153, 179, 204, 230, 255];

const SHADED_STEPS: [usize; 8] = [1, 5, 3, 7, 2, 4, 6, 8];

// Grayscale entries appended to the shaded variant.
const GRAY_RAMP_LEN: usize = 111;

/// An ordered table of 256 RGBA colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<[u8; 4]>,
}

impl Palette {
    /// Run the deterministic synthesis procedure for a variant.
    pub fn synthesize(variant: PaletteVariant) -> Self {
        match variant {
            PaletteVariant::Solid => Self::synthesize_solid(),
            PaletteVariant::Shaded => Self::synthesize_shaded(),
        }
    }

    /// 32 hue steps x 6 sextants = 192 colors; the remaining 64 slots
    /// stay opaque black.
    fn synthesize_solid() -> Self {
        let mut entries = vec![[0, 0, 0, 255]; PALETTE_SIZE];
        let t = &SOLID_TONES;
        let mut k = 0;

        for &i in SOLID_STEPS.iter() {
            entries[k] = [t[32], t[i], t[0], 255];
            entries[k + 1] = [t[32 - i], t[32], t[0], 255];
            entries[k + 2] = [t[0], t[32], t[i], 255];
            entries[k + 3] = [t[0], t[32 - i], t[32], 255];
            entries[k + 4] = [t[i], t[0], t[32], 255];
            entries[k + 5] = [t[32], t[0], t[32 - i], 255];
            k += 6;
        }

        Self { entries }
    }

    /// Transparent slot, then 8 deviation steps x 6 sextants x 3 shade
    /// levels (base, dark, light), then a 111-step grayscale ramp.
    /// 1 + 144 + 111 fills the table exactly.
    fn synthesize_shaded() -> Self {
        let mut entries = Vec::with_capacity(PALETTE_SIZE);
        let t = &SHADED_TONES;

        entries.push([0, 0, 0, 0]);

        for &i in SHADED_STEPS.iter() {
            entries.push([t[9], t[i], t[1], 255]);
            entries.push([t[8], t[i - 1], t[0], 255]);
            entries.push([t[10], t[i + 1], t[2], 255]);

            entries.push([t[10 - i], t[9], t[1], 255]);
            entries.push([t[9 - i], t[8], t[0], 255]);
            entries.push([t[11 - i], t[10], t[1], 255]);

            entries.push([t[1], t[9], t[i], 255]);
            entries.push([t[0], t[8], t[i - 1], 255]);
            entries.push([t[2], t[10], t[i + 1], 255]);

            entries.push([t[1], t[10 - i], t[9], 255]);
            entries.push([t[0], t[9 - i], t[8], 255]);
            entries.push([t[2], t[11 - i], t[10], 255]);

            entries.push([t[i], t[1], t[9], 255]);
            entries.push([t[i - 1], t[0], t[8], 255]);
            entries.push([t[i + 1], t[2], t[10], 255]);

            entries.push([t[9], t[1], t[10 - i], 255]);
            entries.push([t[8], t[0], t[9 - i], 255]);
            entries.push([t[10], t[2], t[11 - i], 255]);
        }

        let d = (256.0 - 1e-13) / (GRAY_RAMP_LEN - 1) as f64;
        for i in 0..GRAY_RAMP_LEN {
            let a = (d * i as f64) as u8;
            entries.push([a, a, a, 255]);
        }

        debug_assert_eq!(entries.len(), PALETTE_SIZE);
        Self { entries }
    }

    /// RGBA color at an index
    pub fn color(&self, index: u8) -> [u8; 4] {
        self.entries[index as usize]
    }

    /// All 256 entries, in order
    pub fn entries(&self) -> &[[u8; 4]] {
        &self.entries
    }

    /// Fill color for an item id in the solid variant.
    ///
    /// Out-of-range ids clamp to `[1, 192]` rather than fail; a malformed
    /// id degrades to a wrong color, never a crash.
    pub fn solid_fill(&self, id: i32) -> [u8; 3] {
        let id = id.clamp(1, SOLID_ID_MAX) as usize;
        let [r, g, b, _] = self.entries[id - 1];
        [r, g, b]
    }

    /// Edge color for an item id: the fill with every channel halved.
    pub fn edge_shade(&self, id: i32) -> [u8; 3] {
        let [r, g, b] = self.solid_fill(id);
        [r / 2, g / 2, b / 2]
    }

    /// Palette index for a voxel-cell pixel in the shaded variant.
    ///
    /// `face` is the stamp's face label (1 = top, 2 = left, 3 = right);
    /// ids clamp to `[1, 48]`.
    pub fn cell_index(id: i32, face: u8) -> u8 {
        let id = id.clamp(1, SHADED_ID_MAX);
        (3 * (id - 1)) as u8 + face
    }

    /// Persist as a 256x1 RGBA PNG; overwrites any existing file.
    pub fn save(&self, path: &Path) -> Result<(), PaletteError> {
        let mut img = image::RgbaImage::new(PALETTE_SIZE as u32, 1);
        for (i, entry) in self.entries.iter().enumerate() {
            img.put_pixel(i as u32, 0, image::Rgba(*entry));
        }
        img.save(path)?;
        Ok(())
    }

    /// Load a persisted palette.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let img = image::open(path)?.to_rgba8();
        if img.width() != PALETTE_SIZE as u32 || img.height() != 1 {
            return Err(PaletteError::BadShape {
                path: path.to_path_buf(),
                width: img.width(),
                height: img.height(),
            });
        }

        let entries = img.pixels().map(|p| p.0).collect();
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_synthesis_is_deterministic() {
        assert_eq!(
            Palette::synthesize(PaletteVariant::Solid),
            Palette::synthesize(PaletteVariant::Solid)
        );
        assert_eq!(
            Palette::synthesize(PaletteVariant::Shaded),
            Palette::synthesize(PaletteVariant::Shaded)
        );
    }

    #[test]
    fn test_solid_hue_ramp_starts_at_primaries() {
        let palette = Palette::synthesize(PaletteVariant::Solid);

        // First step has deviation 0: the six sextants collapse to
        // red, yellow, green, cyan, blue, magenta.
        assert_eq!(palette.color(0), [255, 0, 0, 255]);
        assert_eq!(palette.color(1), [255, 255, 0, 255]);
        assert_eq!(palette.color(2), [0, 255, 0, 255]);
        assert_eq!(palette.color(3), [0, 255, 255, 255]);
        assert_eq!(palette.color(4), [0, 0, 255, 255]);
        assert_eq!(palette.color(5), [255, 0, 255, 255]);

        // Slots past the 192 generated colors are black.
        assert_eq!(palette.color(192), [0, 0, 0, 255]);
        assert_eq!(palette.color(255), [0, 0, 0, 255]);
    }

    #[test]
    fn test_shaded_layout() {
        let palette = Palette::synthesize(PaletteVariant::Shaded);

        // Reserved transparent entry.
        assert_eq!(palette.color(0), [0, 0, 0, 0]);

        // Item 1's triple: base / dark / light of the first sextant at
        // deviation step 1.
        let t = &SHADED_TONES;
        assert_eq!(palette.color(1), [t[9], t[1], t[1], 255]);
        assert_eq!(palette.color(2), [t[8], t[0], t[0], 255]);
        assert_eq!(palette.color(3), [t[10], t[2], t[2], 255]);

        // Grayscale ramp: starts black, ends white, monotonic.
        assert_eq!(palette.color(145), [0, 0, 0, 255]);
        assert_eq!(palette.color(255), [255, 255, 255, 255]);
        for i in 146..=255u16 {
            assert!(palette.color(i as u8)[0] >= palette.color((i - 1) as u8)[0]);
        }
    }

    #[test]
    fn test_cell_index_clamps() {
        assert_eq!(Palette::cell_index(0, 1), Palette::cell_index(1, 1));
        assert_eq!(Palette::cell_index(-5, 2), Palette::cell_index(1, 2));
        assert_eq!(Palette::cell_index(999, 3), Palette::cell_index(48, 3));
        assert_eq!(Palette::cell_index(1, 1), 1);
        assert_eq!(Palette::cell_index(48, 3), 144);
    }

    #[test]
    fn test_solid_fill_clamps() {
        let palette = Palette::synthesize(PaletteVariant::Solid);
        assert_eq!(palette.solid_fill(0), palette.solid_fill(1));
        assert_eq!(palette.solid_fill(500), palette.solid_fill(192));
        assert_eq!(palette.edge_shade(1), [127, 0, 0]);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("palette_shaded.png");

        let palette = Palette::synthesize(PaletteVariant::Shaded);
        palette.save(&path).unwrap();
        let loaded = Palette::load(&path).unwrap();

        assert_eq!(palette, loaded);
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not_a_palette.png");
        image::RgbaImage::new(16, 16).save(&path).unwrap();

        assert!(matches!(
            Palette::load(&path),
            Err(PaletteError::BadShape { .. })
        ));
    }
}
