//! Isopack Palette - Procedural indexed-color tables
//!
//! Both render paths draw through a 256-entry palette that is synthesized
//! procedurally, persisted to disk once, and cached for the process
//! lifetime. Two variants exist:
//!
//! - [`PaletteVariant::Solid`]: 192 hue-ramp colors for whole-box fills.
//! - [`PaletteVariant::Shaded`]: a transparent slot, 144 face-shade
//!   colors for 8x8 voxel stamps, and a 111-step grayscale ramp.
//!
//! Synthesis is fully deterministic - no randomness, no external input -
//! so two independent runs always produce byte-identical tables.

pub mod cache;
pub mod error;
pub mod synth;

pub use cache::PaletteCache;
pub use error::PaletteError;
pub use synth::{Palette, PaletteVariant, SHADED_ID_MAX, SOLID_ID_MAX};
