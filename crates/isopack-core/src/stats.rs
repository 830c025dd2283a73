//! Aggregate packing statistics

use crate::container::Container;
use crate::item::{Item, PackedItem};

/// Volume-utilization figures for a packing result.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PackingStats {
    /// Percent of container volume occupied by placed items
    pub percent_container_volume_packed: f64,
    /// Percent of total item volume that was placed
    pub percent_item_volume_packed: f64,
}

/// Compute volume percentages, rounded to 2 decimals.
pub fn packing_stats(
    container: &Container,
    packed: &[PackedItem],
    unpacked: &[Item],
) -> PackingStats {
    let packed_volume: f64 = packed.iter().map(|i| i.volume()).sum();
    let unpacked_volume: f64 = unpacked.iter().map(|i| i.volume()).sum();

    PackingStats {
        percent_container_volume_packed: round2(packed_volume / container.volume() * 100.0),
        percent_item_volume_packed: round2(
            packed_volume / (packed_volume + unpacked_volume) * 100.0,
        ),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
