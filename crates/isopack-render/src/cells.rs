//! Isometric voxel-cell rendering
//!
//! Walks the voxel grid back to front and stamps every occupied cell as
//! an 8x8 shaded tile into an indexed canvas. Occlusion is painter's
//! algorithm by construction: the loop nesting guarantees nearer voxels
//! are stamped after farther ones and simply overwrite them. The loop
//! order is load-bearing; reordering it breaks the rendered image.

use isopack_core::IndexedCanvas;
use isopack_palette::Palette;
use tracing::debug;

use crate::voxel::VoxelGrid;

/// 8x8 voxel stamp. 0 leaves the canvas untouched; 1, 2, 3 label the
/// top, left and right cuboid faces.
const CELL_STAMP: [[u8; 8]; 8] = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [2, 2, 1, 1, 1, 1, 3, 3],
    [2, 2, 2, 2, 3, 3, 3, 3],
    [2, 2, 2, 2, 3, 3, 3, 3],
    [2, 2, 2, 2, 3, 3, 3, 3],
    [2, 2, 2, 2, 3, 3, 3, 3],
    [0, 0, 2, 2, 3, 3, 0, 0],
];

/// Canvas dimensions for a grid: tiles interlock at 4px horizontal and
/// 2px vertical strides, plus 5px per height layer.
pub fn canvas_size(grid: &VoxelGrid) -> (u32, u32) {
    let width = 4 * (grid.x_dim + grid.y_dim);
    let height = 2 * (grid.x_dim + grid.y_dim) + 5 * grid.z_dim - 1;
    (width as u32, height as u32)
}

/// Render a voxel grid into an indexed canvas.
///
/// Pixels hold shaded-palette indices (`3*(id-1) + face`); index 0 is
/// the transparent background.
pub fn render_voxel_grid(grid: &VoxelGrid) -> IndexedCanvas {
    let (width, height) = canvas_size(grid);
    let mut canvas = IndexedCanvas::new(width, height);

    // Height layers bottom to top, then depth, then x. Within a layer,
    // growing x and y move toward the viewer, so later stamps occlude
    // earlier ones.
    for z in 0..grid.z_dim {
        for y in 0..grid.y_dim {
            for x in 0..grid.x_dim {
                let id = grid.get(x, y, z);
                if id == 0 {
                    continue;
                }

                let sx = (grid.y_dim as i32 - 1) * 4 + x as i32 * 4 - y as i32 * 4;
                let sy =
                    5 * (grid.z_dim as i32 - 1) + x as i32 * 2 + y as i32 * 2 - 5 * z as i32;
                stamp_cell(&mut canvas, sx, sy, id);
            }
        }
    }

    debug!(
        "Rendered {}x{}x{} grid to {}x{} indexed canvas",
        grid.x_dim, grid.y_dim, grid.z_dim, width, height
    );

    canvas
}

/// Stamp one cell tile at a screen offset.
///
/// Ids clamp to the shaded palette's range; pixels falling outside the
/// canvas are dropped by the checked write.
fn stamp_cell(canvas: &mut IndexedCanvas, x: i32, y: i32, id: u8) {
    for (j, row) in CELL_STAMP.iter().enumerate() {
        for (i, &face) in row.iter().enumerate() {
            if face != 0 {
                let index = Palette::cell_index(id as i32, face);
                canvas.put(x + i as i32, y + j as i32, index);
            }
        }
    }
}
