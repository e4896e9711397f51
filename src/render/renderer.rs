//! Owned pixel and depth buffers plus overlay drawing.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and the depth
//! buffer for one frame and implements the non-depth-tested overlays (grid,
//! wireframe) on top of the line rasterizer.

use image::RgbaImage;

use super::framebuffer::FrameBuffer;
use super::line::draw_line;
use crate::colors;
use crate::math::point2::Point2;

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f64>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![f64::NEG_INFINITY; size],
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

    /// Reset both buffers for a new frame.
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
        self.clear_depth();
    }

    /// Sets all depths to negative infinity so any write passes.
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(f64::NEG_INFINITY);
    }

    /// The color buffer, row-major ARGB8888.
    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The depth buffer, row-major, same stride as [`Renderer::pixels`].
    pub fn depths(&self) -> &[f64] {
        &self.depth_buffer
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(self.color_buffer[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    pub fn draw_line(&mut self, p0: Point2, p1: Point2, color: u32) {
        let mut fb = self.as_framebuffer();
        draw_line(&mut fb, p0, p1, color);
    }

    /// Grid lines every `spacing` pixels, skipping the buffer edges.
    pub fn draw_grid(&mut self, spacing: u32, color: u32) {
        if spacing == 0 {
            return;
        }
        let right = self.width as i32 - 1;
        let bottom = self.height as i32 - 1;
        for y in (spacing..self.height).step_by(spacing as usize) {
            let y = y as i32;
            self.draw_line(Point2::new(0, y), Point2::new(right, y), color);
        }
        for x in (spacing..self.width).step_by(spacing as usize) {
            let x = x as i32;
            self.draw_line(Point2::new(x, 0), Point2::new(x, bottom), color);
        }
    }

    /// Outline a triangle, one color per edge (0-1, 0-2, 1-2).
    pub fn draw_triangle_wireframe(&mut self, [p0, p1, p2]: [Point2; 3], edge_colors: [u32; 3]) {
        self.draw_line(p0, p1, edge_colors[0]);
        self.draw_line(p0, p2, edge_colors[1]);
        self.draw_line(p1, p2, edge_colors[2]);
    }

    /// The color buffer as RGBA bytes, 4 per pixel, rows top to bottom.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.color_buffer
            .iter()
            .flat_map(|&c| colors::unpack_color(c))
            .collect()
    }

    /// Copy the frame into an [`RgbaImage`] for encoding.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = self.color_buffer[y as usize * self.width as usize + x as usize];
            image::Rgba(colors::unpack_color(c))
        })
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_cleared() {
        let r = Renderer::new(4, 3);
        assert_eq!(r.pixels().len(), 12);
        assert!(r.pixels().iter().all(|&c| c == colors::BACKGROUND));
        assert!(r.depths().iter().all(|&d| d == f64::NEG_INFINITY));
    }

    #[test]
    fn test_clear_resets_depth() {
        let mut r = Renderer::new(4, 4);
        r.as_framebuffer().set_pixel_with_depth(1, 1, 5.0, colors::RED);
        r.clear(colors::BLACK);
        assert_eq!(r.pixel(1, 1), Some(colors::BLACK));
        assert!(r.depths().iter().all(|&d| d == f64::NEG_INFINITY));
    }

    #[test]
    fn test_grid_lines() {
        let mut r = Renderer::new(10, 10);
        r.draw_grid(5, colors::GRID);
        assert_eq!(r.pixel(0, 5), Some(colors::GRID));
        assert_eq!(r.pixel(9, 5), Some(colors::GRID));
        assert_eq!(r.pixel(5, 0), Some(colors::GRID));
        assert_eq!(r.pixel(5, 9), Some(colors::GRID));
        assert_eq!(r.pixel(0, 0), Some(colors::BACKGROUND));
        assert_eq!(r.pixel(3, 3), Some(colors::BACKGROUND));
        // 10 + 10 pixels, crossing counted once
        assert_eq!(r.pixels().iter().filter(|&&c| c == colors::GRID).count(), 19);
    }

    #[test]
    fn test_grid_does_not_touch_depth() {
        let mut r = Renderer::new(10, 10);
        r.draw_grid(3, colors::GRID);
        assert!(r.depths().iter().all(|&d| d == f64::NEG_INFINITY));
    }

    #[test]
    fn test_wireframe_edge_colors() {
        let mut r = Renderer::new(16, 16);
        let points = [Point2::new(1, 1), Point2::new(10, 1), Point2::new(1, 10)];
        r.draw_triangle_wireframe(points, colors::WIREFRAME);
        assert_eq!(r.pixel(5, 1), Some(colors::CYAN));
        assert_eq!(r.pixel(1, 5), Some(colors::MAGENTA));
        assert_eq!(r.pixel(5, 6), Some(colors::YELLOW));
    }

    #[test]
    fn test_rgba_export() {
        let mut r = Renderer::new(2, 1);
        r.as_framebuffer().set_pixel(1, 0, colors::pack_color(1, 2, 3, 4));
        assert_eq!(r.to_rgba_bytes(), vec![0, 0, 0, 0, 1, 2, 3, 4]);
        let img = r.to_image();
        assert_eq!(img.get_pixel(1, 0).0, [1, 2, 3, 4]);
        assert_eq!(img.dimensions(), (2, 1));
    }
}
