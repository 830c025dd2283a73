//! Drawing surfaces
//!
//! Two pixel buffers back the two render paths: [`IndexedCanvas`] holds
//! one palette index per pixel (voxel-cell rendering), [`RgbCanvas`]
//! holds RGB8 (box rendering). Both take signed coordinates on write and
//! drop anything outside their bounds - discretization rounding can push
//! a stamp a pixel or two past the computed bounding box, and that is
//! tolerated rather than treated as an error.

/// Indexed-color canvas, one palette index per pixel, zero-initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedCanvas {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    data: Vec<u8>,
}

impl IndexedCanvas {
    /// Create a new canvas filled with index 0
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height) as usize],
        }
    }

    /// Get the index at a position
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Write an index; out-of-bounds writes are dropped
    pub fn put(&mut self, x: i32, y: i32, index: u8) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[(y * self.width + x) as usize] = index;
    }

    /// Raw index buffer, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// RGB8 canvas, zero-initialized (black).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbCanvas {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    data: Vec<u8>,
}

impl RgbCanvas {
    /// Create a new black canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 3) as usize],
        }
    }

    /// Fill the whole canvas with one color
    pub fn fill(&mut self, rgb: [u8; 3]) {
        for chunk in self.data.chunks_exact_mut(3) {
            chunk.copy_from_slice(&rgb);
        }
    }

    /// Get a pixel
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 3) as usize;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Write a pixel; out-of-bounds writes are dropped
    pub fn put_pixel(&mut self, x: i32, y: i32, rgb: [u8; 3]) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y * self.width + x) * 3) as usize;
        self.data[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Raw RGB buffer, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_roundtrip() {
        let mut canvas = IndexedCanvas::new(10, 5);
        canvas.put(3, 2, 42);
        assert_eq!(canvas.get(3, 2), Some(42));
        assert_eq!(canvas.get(0, 0), Some(0));
    }

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut canvas = IndexedCanvas::new(4, 4);
        canvas.put(-1, 0, 9);
        canvas.put(0, -3, 9);
        canvas.put(4, 0, 9);
        canvas.put(0, 100, 9);
        assert!(canvas.data().iter().all(|&p| p == 0));

        let mut rgb = RgbCanvas::new(4, 4);
        rgb.put_pixel(-1, -1, [255, 255, 255]);
        rgb.put_pixel(4, 4, [255, 255, 255]);
        assert!(rgb.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_rgb_fill_and_get() {
        let mut canvas = RgbCanvas::new(3, 3);
        canvas.fill([10, 20, 30]);
        assert_eq!(canvas.get_pixel(2, 2), Some([10, 20, 30]));
        assert_eq!(canvas.get_pixel(3, 0), None);
    }
}
