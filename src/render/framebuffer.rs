//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into color and depth buffers with bounds-checked access.
//! The depth buffer enables hidden surface removal via the z-buffer algorithm.

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass buffers + dimensions together.
///
/// Both buffers are row-major with the same stride: `index = y * width + x`.
///
/// # Depth Buffer
///
/// The depth buffer stores the model-space z of the frontmost write so far.
/// Larger values win; a cleared buffer holds negative infinity. On exact ties
/// the earlier write is kept.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    depth_buffer: &'a mut [f64],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if buffer lengths don't match width * height
    pub fn new(
        color_buffer: &'a mut [u32],
        depth_buffer: &'a mut [f64],
        width: u32,
        height: u32,
    ) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            width as usize * height as usize,
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            width as usize * height as usize,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat index of (x, y), or None if the pixel is outside the buffer.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `depth` is strictly greater than the stored
    /// depth. Out-of-bounds coordinates are ignored. Returns whether the pixel
    /// was written.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f64, color: u32) -> bool {
        match self.index(x, y) {
            Some(idx) if depth > self.depth_buffer[idx] => {
                self.depth_buffer[idx] = depth;
                self.color_buffer[idx] = color;
                true
            }
            _ => false,
        }
    }

    /// Set a pixel without depth testing (for overlays).
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f64> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffers(width: u32, height: u32) -> (Vec<u32>, Vec<f64>) {
        let size = (width * height) as usize;
        (vec![0; size], vec![f64::NEG_INFINITY; size])
    }

    #[test]
    fn test_depth_test_keeps_higher() {
        let (mut color, mut depth) = buffers(4, 4);
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 4);
        assert!(fb.set_pixel_with_depth(1, 1, 1.0, 0xA));
        assert!(fb.set_pixel_with_depth(1, 1, 2.0, 0xB));
        assert!(!fb.set_pixel_with_depth(1, 1, 1.5, 0xC));
        assert_eq!(fb.get_pixel(1, 1), Some(0xB));
        assert_eq!(fb.get_depth(1, 1), Some(2.0));
    }

    #[test]
    fn test_tie_keeps_first_write() {
        let (mut color, mut depth) = buffers(4, 4);
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 4);
        assert!(fb.set_pixel_with_depth(2, 3, 0.5, 0xA));
        assert!(!fb.set_pixel_with_depth(2, 3, 0.5, 0xB));
        assert_eq!(fb.get_pixel(2, 3), Some(0xA));
    }

    #[test]
    fn test_out_of_bounds_is_skipped() {
        let (mut color, mut depth) = buffers(4, 2);
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 2);
        assert!(!fb.set_pixel_with_depth(-1, 0, 1.0, 0xA));
        assert!(!fb.set_pixel_with_depth(4, 0, 1.0, 0xA));
        assert!(!fb.set_pixel_with_depth(0, 2, 1.0, 0xA));
        fb.set_pixel(0, -1, 0xA);
        assert!(color.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_row_stride_is_width_on_non_square_buffer() {
        // 5 wide, 3 tall: (x, y) must land at y * 5 + x in both buffers
        let (mut color, mut depth) = buffers(5, 3);
        {
            let mut fb = FrameBuffer::new(&mut color, &mut depth, 5, 3);
            fb.set_pixel_with_depth(4, 2, 1.0, 0xA);
            fb.set_pixel_with_depth(1, 1, 1.0, 0xB);
            assert_eq!(fb.index(4, 2), Some(14));
        }
        assert_eq!(color[14], 0xA);
        assert_eq!(depth[14], 1.0);
        assert_eq!(color[6], 0xB);
        assert_eq!(depth[6], 1.0);
    }
}
