//! Isopack Render - Isometric visualization of packing results
//!
//! Two rendering strategies share the projection and palette machinery:
//!
//! - [`VoxelRenderer`]: discretizes placements into a grid of 5-unit
//!   cells and stamps each occupied cell as an 8x8 shaded tile into an
//!   indexed-color canvas, back to front.
//! - [`SolidRenderer`]: draws each placed item as one filled and
//!   outlined isometric cuboid silhouette, optionally emitting one frame
//!   image per item in placement order.
//!
//! Both implement the synchronous [`Renderer`] seam. Everything runs to
//! completion on the calling thread; the only state outliving a render
//! call is the palette cache handed in at construction.

pub mod boxes;
pub mod cells;
pub mod error;
pub mod output;
pub mod renderer;
pub mod voxel;

pub use error::RenderError;
pub use renderer::{RenderConfig, RenderOutput, Renderer, SolidRenderer, VoxelRenderer};
pub use voxel::{voxelize, VoxelGrid, DEFAULT_CELL_SIZE};
