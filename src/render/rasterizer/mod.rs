//! Triangle rasterization algorithms.
//!
//! This module provides two rasterizer implementations that can be
//! swapped at runtime for testing and benchmarking purposes.
//!
//! Available algorithms:
//! - [`BarycentricRasterizer`]: Bounding box iteration with barycentric inside tests
//! - [`ScanlineRasterizer`]: Upper/lower half decomposition filled span by span
//!
//! Both write through [`FrameBuffer::set_pixel_with_depth`], so the winner of
//! each pixel is decided by depth alone and never by submission order.

mod barycentric;
mod scanline;

pub use barycentric::{barycentric_weights, BarycentricRasterizer, DEGENERATE};
pub use scanline::ScanlineRasterizer;

use super::framebuffer::FrameBuffer;
use crate::math::point2::Point2;

/// A flat-colored triangle in screen space, built per draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Point2; 3],
    /// Depth at each point, interpolated across the interior.
    pub depths: [f64; 3],
    pub color: u32,
}

impl Triangle {
    pub fn new(points: [Point2; 3], depths: [f64; 3], color: u32) -> Self {
        Self {
            points,
            depths,
            color,
        }
    }

    /// A triangle at constant depth.
    pub fn flat(points: [Point2; 3], depth: f64, color: u32) -> Self {
        Self::new(points, [depth; 3], color)
    }

    /// Twice the signed area of the triangle. Zero for degenerate triangles.
    pub fn doubled_area(&self) -> i128 {
        doubled_area(&self.points)
    }

    /// Depth at a point given its barycentric weights.
    #[inline]
    pub fn depth_at(&self, weights: [f64; 3]) -> f64 {
        self.depths[0] * weights[0] + self.depths[1] * weights[1] + self.depths[2] * weights[2]
    }
}

/// The z component of `(c - a) x (b - a)`, exact for any `i32` points.
pub(crate) fn doubled_area([a, b, c]: &[Point2; 3]) -> i128 {
    let (cx, cy) = (c.x as i128 - a.x as i128, c.y as i128 - a.y as i128);
    let (bx, by) = (b.x as i128 - a.x as i128, b.y as i128 - a.y as i128);
    cx * by - bx * cy
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are filled into a frame buffer.
/// This allows swapping between different rasterization strategies
/// for testing and benchmarking.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer with depth testing.
    ///
    /// Returns the number of pixel writes that passed the depth test.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) -> usize;
}

/// Available rasterization algorithms.
///
/// Use this enum to select which rasterizer the engine should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterizerType {
    /// Tests every pixel of the clamped bounding box with barycentric weights.
    #[default]
    Barycentric,
    /// Splits the triangle at its middle vertex and fills horizontal spans.
    Scanline,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Barycentric => write!(f, "barycentric"),
            RasterizerType::Scanline => write!(f, "scanline"),
        }
    }
}

/// Internal dispatcher that holds both rasterizer implementations.
pub struct RasterizerDispatcher {
    barycentric: BarycentricRasterizer,
    scanline: ScanlineRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            barycentric: BarycentricRasterizer::new(),
            scanline: ScanlineRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) -> usize {
        match self.active {
            RasterizerType::Barycentric => self.barycentric.fill_triangle(triangle, buffer),
            RasterizerType::Scanline => self.scanline.fill_triangle(triangle, buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubled_area_sign_and_degenerate() {
        let tri = [Point2::new(0, 0), Point2::new(10, 0), Point2::new(0, 10)];
        assert_eq!(doubled_area(&tri).abs(), 100);
        let swapped = [tri[0], tri[2], tri[1]];
        assert_eq!(doubled_area(&swapped), -doubled_area(&tri));
        let line = [Point2::new(0, 0), Point2::new(5, 5), Point2::new(10, 10)];
        assert_eq!(doubled_area(&line), 0);

        let huge = [
            Point2::new(i32::MIN, i32::MIN),
            Point2::new(i32::MAX, i32::MIN),
            Point2::new(i32::MIN, i32::MAX),
        ];
        let span = i32::MAX as i128 - i32::MIN as i128;
        assert_eq!(doubled_area(&huge).abs(), span * span);
    }

    #[test]
    fn test_depth_at_weights() {
        let tri = Triangle::new([Point2::ORIGIN; 3], [1.0, 2.0, 4.0], 0);
        assert_eq!(tri.depth_at([1.0, 0.0, 0.0]), 1.0);
        assert_eq!(tri.depth_at([0.0, 0.5, 0.5]), 3.0);
    }

    #[test]
    fn test_dispatcher_switches() {
        let mut dispatcher = RasterizerDispatcher::new(RasterizerType::default());
        assert_eq!(dispatcher.active_type(), RasterizerType::Barycentric);
        dispatcher.set_type(RasterizerType::Scanline);
        assert_eq!(dispatcher.active_type(), RasterizerType::Scanline);
        assert_eq!(RasterizerType::Scanline.to_string(), "scanline");
    }
}
