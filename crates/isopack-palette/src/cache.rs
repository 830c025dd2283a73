//! Palette persistence and caching
//!
//! The original design kept one hidden global palette; here the cache is
//! an explicit object handed to renderers, with a [`PaletteCache::global`]
//! convenience for single-process use. Each variant gets one lazy
//! initialization per cache: synthesize and write the file if it is
//! absent, load it, and serve the in-memory copy from then on. Deleting
//! or editing the file afterwards has no effect until the process (or the
//! cache object) is replaced - regenerating requires removing the file
//! *before* first use.

use std::path::{Path, PathBuf};

use once_cell::sync::{Lazy, OnceCell};
use tracing::{debug, info};

use crate::error::PaletteError;
use crate::synth::{Palette, PaletteVariant};

static GLOBAL: Lazy<PaletteCache> = Lazy::new(|| PaletteCache::new("."));

/// Disk-persisted palettes with once-per-process initialization.
pub struct PaletteCache {
    dir: PathBuf,
    solid: OnceCell<Palette>,
    shaded: OnceCell<Palette>,
}

impl PaletteCache {
    /// Create a cache persisting palette files in `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            solid: OnceCell::new(),
            shaded: OnceCell::new(),
        }
    }

    /// The process-wide cache, rooted in the working directory
    pub fn global() -> &'static PaletteCache {
        &GLOBAL
    }

    /// Directory holding the palette files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a variant's palette file
    pub fn file_path(&self, variant: PaletteVariant) -> PathBuf {
        self.dir.join(variant.file_name())
    }

    /// Get a palette, synthesizing and persisting it on first use.
    ///
    /// Idempotent; concurrent first calls are serialized by the cell so
    /// synthesis runs at most once per variant. I/O failures propagate
    /// and leave the cache uninitialized, so a later call retries.
    pub fn get(&self, variant: PaletteVariant) -> Result<&Palette, PaletteError> {
        let cell = match variant {
            PaletteVariant::Solid => &self.solid,
            PaletteVariant::Shaded => &self.shaded,
        };

        cell.get_or_try_init(|| {
            let path = self.file_path(variant);
            if !path.exists() {
                info!("Synthesizing {:?} palette to {}", variant, path.display());
                Palette::synthesize(variant).save(&path)?;
            }
            debug!("Loading {:?} palette from {}", variant, path.display());
            Palette::load(&path)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_first_use_writes_palette_file() {
        let dir = TempDir::new().unwrap();
        let cache = PaletteCache::new(dir.path());

        let path = cache.file_path(PaletteVariant::Solid);
        assert!(!path.exists());

        cache.get(PaletteVariant::Solid).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_cache_honored_over_disk_state() {
        let dir = TempDir::new().unwrap();
        let cache = PaletteCache::new(dir.path());

        let first = cache.get(PaletteVariant::Shaded).unwrap().clone();

        // Deleting the persisted file must not affect later lookups.
        fs::remove_file(cache.file_path(PaletteVariant::Shaded)).unwrap();
        let second = cache.get(PaletteVariant::Shaded).unwrap();

        assert_eq!(&first, second);
    }

    #[test]
    fn test_existing_file_is_loaded_not_regenerated() {
        let dir = TempDir::new().unwrap();

        // Persist a doctored palette, then point a fresh cache at it.
        let path = dir.path().join(PaletteVariant::Solid.file_name());
        let mut img = image::RgbaImage::new(256, 1);
        img.put_pixel(0, 0, image::Rgba([1, 2, 3, 255]));
        img.save(&path).unwrap();

        let cache = PaletteCache::new(dir.path());
        let palette = cache.get(PaletteVariant::Solid).unwrap();
        assert_eq!(palette.color(0), [1, 2, 3, 255]);
    }

    #[test]
    fn test_variants_are_independent() {
        let dir = TempDir::new().unwrap();
        let cache = PaletteCache::new(dir.path());

        let solid = cache.get(PaletteVariant::Solid).unwrap();
        let shaded = cache.get(PaletteVariant::Shaded).unwrap();

        assert_ne!(solid, shaded);
        assert!(cache.file_path(PaletteVariant::Solid).exists());
        assert!(cache.file_path(PaletteVariant::Shaded).exists());
    }
}
