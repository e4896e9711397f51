//! Barycentric bounding-box rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's axis-aligned bounding box, clamped to the buffer
//! 2. For each pixel in the box, compute barycentric weights `(b0, b1, b2)`
//! 3. The pixel is inside iff every weight is `>= 0` (edges included)
//! 4. Interpolate depth from the weights and write through the depth test
//!
//! # Barycentric Weights
//!
//! For triangle `A, B, C` and pixel `P`, build the two integer vectors
//!
//! ```text
//! u = (C.x - A.x, B.x - A.x, A.x - P.x)
//! v = (C.y - A.y, B.y - A.y, A.y - P.y)
//! ```
//!
//! and take `w = u x v`. Then `P = A + (w.y/w.z)(B - A) + (w.x/w.z)(C - A)`,
//! which gives
//!
//! ```text
//! (b0, b1, b2) = (1 - (w.x + w.y) / w.z,  w.y / w.z,  w.x / w.z)
//! ```
//!
//! `w.z` is twice the signed area of the triangle. When `|w.z| < 1` the
//! triangle has no area on the integer grid and every pixel is reported as
//! outside with weights `(-1, -1, -1)`.

use super::{Rasterizer, Triangle};
use crate::math::point2::Point2;
use crate::render::framebuffer::FrameBuffer;

/// Weights reported for a pixel of a zero-area triangle.
pub const DEGENERATE: [f64; 3] = [-1.0, -1.0, -1.0];

/// Barycentric weights of `p` with respect to `points`, in point order.
///
/// Weights sum to 1; any negative weight means `p` is outside. Returns
/// [`DEGENERATE`] for zero-area triangles.
pub fn barycentric_weights(points: &[Point2; 3], p: Point2) -> [f64; 3] {
    // Differences of i32 coordinates need 33 bits and their products 66, so
    // the cross product is taken in i128 to stay exact for any screen point.
    let [a, b, c] = *points;
    let u = [
        c.x as i128 - a.x as i128,
        b.x as i128 - a.x as i128,
        a.x as i128 - p.x as i128,
    ];
    let v = [
        c.y as i128 - a.y as i128,
        b.y as i128 - a.y as i128,
        a.y as i128 - p.y as i128,
    ];

    let wx = u[1] * v[2] - u[2] * v[1];
    let wy = u[2] * v[0] - u[0] * v[2];
    let wz = u[0] * v[1] - u[1] * v[0];

    if wz.abs() < 1 {
        return DEGENERATE;
    }

    let wz = wz as f64;
    [
        1.0 - (wx + wy) as f64 / wz,
        wy as f64 / wz,
        wx as f64 / wz,
    ]
}

#[inline]
fn is_inside(weights: [f64; 3]) -> bool {
    weights[0] >= 0.0 && weights[1] >= 0.0 && weights[2] >= 0.0
}

/// Triangle rasterizer testing every pixel of the bounding box.
///
/// Works for both windings: the weights are ratios of signed areas, so the
/// sign of the triangle's area cancels out.
pub struct BarycentricRasterizer;

impl BarycentricRasterizer {
    pub fn new() -> Self {
        BarycentricRasterizer {}
    }
}

impl Default for BarycentricRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for BarycentricRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) -> usize {
        let [p0, p1, p2] = triangle.points;

        // Bounding box, clamped to the buffer
        let min_x = p0.x.min(p1.x).min(p2.x).max(0);
        let max_x = p0.x.max(p1.x).max(p2.x).min(buffer.width() as i32 - 1);
        let min_y = p0.y.min(p1.y).min(p2.y).max(0);
        let max_y = p0.y.max(p1.y).max(p2.y).min(buffer.height() as i32 - 1);

        let mut written = 0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let weights = barycentric_weights(&triangle.points, Point2::new(x, y));
                if !is_inside(weights) {
                    continue;
                }
                let depth = triangle.depth_at(weights);
                if buffer.set_pixel_with_depth(x, y, depth, triangle.color) {
                    written += 1;
                }
            }
        }
        written
    }
}
