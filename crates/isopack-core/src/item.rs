//! Placed-item input contract
//!
//! These types mirror the output of the external packing algorithm. The
//! renderers consume them read-only and never validate placements against
//! the container; the algorithm is trusted for that.

use serde::{Deserialize, Serialize};

/// An item the packing algorithm could not place.
///
/// Carried through [`PackingResult`] for statistics; the renderers ignore
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier (positive)
    pub id: i32,
    /// Extent along the item's first axis
    pub dim_x: f64,
    /// Extent along the item's second axis
    pub dim_y: f64,
    /// Extent along the item's third axis
    pub dim_z: f64,
}

impl Item {
    /// Item volume
    pub fn volume(&self) -> f64 {
        self.dim_x * self.dim_y * self.dim_z
    }
}

/// An item with a finalized position and oriented size.
///
/// `coord_*` is the placement origin in container-local algorithm
/// coordinates; `pack_dim_*` is the extent *after* the algorithm chose an
/// orientation. Invariant (not enforced here): origin + extent stays
/// within the container on every axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedItem {
    /// Item identifier (positive, used as a palette key)
    pub id: i32,
    /// Placement origin, algorithm x axis
    pub coord_x: f64,
    /// Placement origin, algorithm y axis (the algorithm's height axis)
    pub coord_y: f64,
    /// Placement origin, algorithm z axis (the algorithm's depth axis)
    pub coord_z: f64,
    /// Oriented extent along algorithm x
    pub pack_dim_x: f64,
    /// Oriented extent along algorithm y
    pub pack_dim_y: f64,
    /// Oriented extent along algorithm z
    pub pack_dim_z: f64,
}

impl PackedItem {
    /// Placed volume
    pub fn volume(&self) -> f64 {
        self.pack_dim_x * self.pack_dim_y * self.pack_dim_z
    }

    /// Placement origin in render space: (x, depth, height).
    ///
    /// The algorithm's y axis is its height axis; render space keeps
    /// height third, so y and z swap. No negation happens here - each
    /// renderer does its own screen-space vertical flip.
    pub fn render_origin(&self) -> (f64, f64, f64) {
        (self.coord_x, self.coord_z, self.coord_y)
    }

    /// Oriented extent in render space: (x, depth, height).
    pub fn render_extent(&self) -> (f64, f64, f64) {
        (self.pack_dim_x, self.pack_dim_z, self.pack_dim_y)
    }
}

/// The packing algorithm's full output: placements, leftovers and
/// aggregate figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackingResult {
    /// Items with finalized placements, in algorithm placement order
    pub packed_items: Vec<PackedItem>,
    /// Items that did not fit
    pub unpacked_items: Vec<Item>,
    /// Wall-clock packing time, milliseconds
    pub pack_time_ms: u64,
    /// Percent of container volume occupied by placed items
    pub percent_container_volume_packed: f64,
    /// Percent of total item volume that was placed
    pub percent_item_volume_packed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_axis_swap() {
        let item = PackedItem {
            id: 1,
            coord_x: 1.0,
            coord_y: 2.0,
            coord_z: 3.0,
            pack_dim_x: 10.0,
            pack_dim_y: 20.0,
            pack_dim_z: 30.0,
        };

        // Height (algorithm y) lands on the third render axis.
        assert_eq!(item.render_origin(), (1.0, 3.0, 2.0));
        assert_eq!(item.render_extent(), (10.0, 30.0, 20.0));
    }

    #[test]
    fn test_volume() {
        let item = PackedItem {
            id: 7,
            coord_x: 0.0,
            coord_y: 0.0,
            coord_z: 0.0,
            pack_dim_x: 2.0,
            pack_dim_y: 3.0,
            pack_dim_z: 4.0,
        };
        assert_eq!(item.volume(), 24.0);
    }
}
