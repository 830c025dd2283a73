//! Isopack Core - Packing-result data model and 2D drawing surfaces
//!
//! Isopack visualizes the output of a 3D container-loading computation:
//! a container descriptor plus the list of placed items the packing
//! algorithm produced. This crate holds everything the renderers share -
//! the input contract, the isometric projection, the canvas buffers and
//! simple volume statistics.
//!
//! # Coordinate conventions
//!
//! The packing algorithm reports an item's height on its *second* axis
//! (`coord_y` / `pack_dim_y`); render space puts height on the third
//! axis. [`PackedItem::render_origin`] and [`PackedItem::render_extent`]
//! perform that swap once on ingestion; renderers never touch the raw
//! algorithm axes directly.

pub mod canvas;
pub mod container;
pub mod item;
pub mod projection;
pub mod stats;

// Re-export commonly used types
pub use canvas::{IndexedCanvas, RgbCanvas};
pub use container::Container;
pub use item::{Item, PackedItem, PackingResult};
pub use projection::iso_project;
pub use stats::{packing_stats, PackingStats};
