//! Container descriptor

use serde::{Deserialize, Serialize};

/// A shipping container with fixed interior dimensions.
///
/// Dimensions are container-local: `length` along x, `width` along the
/// depth axis, `height` vertical. They must be positive; callers validate
/// upstream, the renderers do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Container identifier
    pub id: i32,
    /// Extent along the x axis
    pub length: f64,
    /// Extent along the depth axis
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Container {
    /// Create a new container
    pub fn new(id: i32, length: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            length,
            width,
            height,
        }
    }

    /// Interior volume
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume() {
        let container = Container::new(1, 100.0, 200.0, 300.0);
        assert_eq!(container.volume(), 6_000_000.0);
    }
}
