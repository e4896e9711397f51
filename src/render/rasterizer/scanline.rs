//! Scanline-based triangle rasterization.
//!
//! Fills a triangle one horizontal span at a time by splitting it at its
//! middle vertex into an upper and a lower half.
//!
//! # Algorithm Overview
//!
//! 1. **Sort points** by Y coordinate (top to bottom in screen space)
//! 2. **Upper half**: rows `t0.y..=t1.y`, span ends on edges `t0->t1` and `t0->t2`
//! 3. **Lower half**: rows `t1.y..=t2.y`, span ends converge on `t2`
//!
//! ```text
//!        t0
//!        /\
//!       /  \
//!   t1 /----\  <- split at t1.y
//!      \     \
//!        \    \
//!          \   \
//!            \  \
//!              t2
//! ```
//!
//! Span ends are found by linear stepping, `x = x_start + dx * k / dy`,
//! truncated toward zero. A half with no height is skipped, so flat-top and
//! flat-bottom triangles need no special case. Rows outside the buffer are
//! never visited, and all stepping is done in 64-bit integers so any `i32`
//! screen point is accepted.
//!
//! # Depth
//!
//! Each covered pixel takes its depth from barycentric weights against the
//! unsorted triangle. Spans can reach a pixel just past an edge, so weights may
//! be slightly negative there; the extrapolated depth is used as is.
//! Triangles with zero area cover no pixels.

use super::barycentric::barycentric_weights;
use super::{Rasterizer, Triangle};
use crate::math::point2::Point2;
use crate::render::framebuffer::FrameBuffer;

/// Scanline-based triangle rasterizer.
///
/// Only visits pixels actually covered, in row order.
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// `dx * k / dy`, truncated toward zero. `dy` must be positive.
    #[inline]
    fn step(dx: i64, k: i64, dy: i64) -> i64 {
        ((dx as i128 * k as i128) as f64 / dy as f64) as i64
    }

    /// Fills the span between `xa` and `xb` (either order) on row `y`.
    fn fill_span(triangle: &Triangle, buffer: &mut FrameBuffer, y: i32, xa: i64, xb: i64) -> usize {
        let start = xa.min(xb).max(0);
        let end = xa.max(xb).min(buffer.width() as i64 - 1);

        let mut written = 0;
        for x in start..=end {
            let x = x as i32;
            let weights = barycentric_weights(&triangle.points, Point2::new(x, y));
            let depth = triangle.depth_at(weights);
            if buffer.set_pixel_with_depth(x, y, depth, triangle.color) {
                written += 1;
            }
        }
        written
    }

    /// Buffer rows within `from..=to`.
    fn rows(buffer: &FrameBuffer, from: i64, to: i64) -> std::ops::RangeInclusive<i64> {
        from.max(0)..=to.min(buffer.height() as i64 - 1)
    }
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) -> usize {
        if triangle.doubled_area() == 0 {
            return 0;
        }

        let mut sorted = triangle.points;
        sorted.sort_by_key(|p| p.y);
        let [t0, t1, t2] = sorted.map(|p| (p.x as i64, p.y as i64));

        let mut written = 0;

        // Upper half
        let dy1 = t1.1 - t0.1;
        let dy2 = t2.1 - t0.1;
        let dx1 = t1.0 - t0.0;
        let dx2 = t2.0 - t0.0;
        if dy1 > 0 {
            for y in Self::rows(buffer, t0.1, t1.1) {
                let k = y - t0.1;
                let xa = t0.0 + Self::step(dx1, k, dy1);
                let xb = t0.0 + Self::step(dx2, k, dy2);
                written += Self::fill_span(triangle, buffer, y as i32, xa, xb);
            }
        }

        // Lower half, starting from where the upper half's edges ended
        let dy = t2.1 - t1.1;
        if dy > 0 {
            let (origin_a, origin_b) = if dy1 > 0 {
                (t1.0, t0.0 + Self::step(dx2, dy1, dy2))
            } else {
                (t0.0, t1.0)
            };
            let dxa = t2.0 - origin_a;
            let dxb = t2.0 - origin_b;
            for y in Self::rows(buffer, t1.1, t2.1) {
                let k = y - t1.1;
                let xa = origin_a + Self::step(dxa, k, dy);
                let xb = origin_b + Self::step(dxb, k, dy);
                written += Self::fill_span(triangle, buffer, y as i32, xa, xb);
            }
        }

        written
    }
}
