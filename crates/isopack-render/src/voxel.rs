//! Placement voxelization
//!
//! Discretizes continuous item placements into a grid of fixed-size
//! cells, each tagged with the id of the item claiming it. Voxelization
//! is a lossy visualization aid, not a verifier: cell ranges are biased
//! outward by ceiling both ends, so adjacent items can claim the same
//! border cell, and whichever item is processed last keeps it.

use isopack_core::{Container, PackedItem};
use tracing::debug;

/// Default cell edge length in container units
pub const DEFAULT_CELL_SIZE: f64 = 5.0;

/// A 3D grid of item-id cells, 0 meaning empty.
///
/// Axes are render-space: x along container length, y along depth
/// (container width), z up (container height).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    /// Cells along x
    pub x_dim: usize,
    /// Cells along the depth axis
    pub y_dim: usize,
    /// Cells along the height axis
    pub z_dim: usize,
    cells: Vec<u8>,
}

impl VoxelGrid {
    /// Create an empty grid
    pub fn new(x_dim: usize, y_dim: usize, z_dim: usize) -> Self {
        Self {
            x_dim,
            y_dim,
            z_dim,
            cells: vec![0; x_dim * y_dim * z_dim],
        }
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.y_dim + y) * self.x_dim + x
    }

    /// Cell value; panics on out-of-range coordinates
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        self.cells[self.index(x, y, z)]
    }

    /// Write a cell; panics on out-of-range coordinates
    pub fn set(&mut self, x: usize, y: usize, z: usize, id: u8) {
        let idx = self.index(x, y, z);
        self.cells[idx] = id;
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Total cell count
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Discretize placements into a cell grid.
///
/// Grid dimensions are each container axis divided by `cell_size`,
/// rounded up. Per item, both the start coordinate and the extent are
/// ceil-divided, so claimed ranges can overlap neighbors by one cell.
/// Cells are written in the supplied item order, last write wins.
///
/// Placements must lie within the container; out-of-range indices panic
/// (a caller precondition violation, not a recoverable error).
pub fn voxelize(container: &Container, items: &[PackedItem], cell_size: f64) -> VoxelGrid {
    let x_dim = (container.length / cell_size).ceil() as usize;
    let y_dim = (container.width / cell_size).ceil() as usize;
    let z_dim = (container.height / cell_size).ceil() as usize;

    let mut grid = VoxelGrid::new(x_dim, y_dim, z_dim);

    for item in items {
        let (ox, oy, oz) = item.render_origin();
        let (ex, ey, ez) = item.render_extent();

        let x1 = (ox / cell_size).ceil() as usize;
        let y1 = (oy / cell_size).ceil() as usize;
        let z1 = (oz / cell_size).ceil() as usize;

        let x2 = x1 + (ex / cell_size).ceil() as usize;
        let y2 = y1 + (ey / cell_size).ceil() as usize;
        let z2 = z1 + (ez / cell_size).ceil() as usize;

        // Empty cells stay 0, so malformed ids floor at 1 here and the
        // stamp clamp pins them further at render time.
        let id = item.id.clamp(1, u8::MAX as i32) as u8;

        for x in x1..x2 {
            for y in y1..y2 {
                for z in z1..z2 {
                    grid.set(x, y, z, id);
                }
            }
        }
    }

    debug!(
        "Voxelized {} items into {}x{}x{} grid ({} occupied cells)",
        items.len(),
        x_dim,
        y_dim,
        z_dim,
        grid.occupied()
    );

    grid
}
