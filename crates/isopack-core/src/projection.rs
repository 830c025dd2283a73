//! Isometric projection
//!
//! One fixed linear mapping from 3D container coordinates to 2D screen
//! coordinates, used both to size canvases (project the container's
//! extreme corners) and to place drawing primitives.

/// cos(30 deg), the isometric x spread factor
pub const COS_30: f32 = 0.866_025_4;

/// Project a 3D point to 2D isometric screen space.
///
/// Screen y grows downward, so larger `z` lands lower on screen;
/// renderers flip the height axis themselves where needed.
pub fn iso_project(x: f32, y: f32, z: f32) -> (f32, f32) {
    (0.5 * (x - y) * COS_30, 0.25 * (x + y) + 0.5 * z)
}
