//! Incremental line stepping.
//!
//! The axis with the larger extent drives the loop one pixel at a time. The
//! other coordinate is computed fractionally at each step and truncated toward
//! zero. Endpoints are swapped first so lines always run left to right.
//!
//! Always driving on x would leave gaps in steep lines, so when the y extent
//! exceeds the x extent the roles swap.

use super::framebuffer::FrameBuffer;
use crate::math::point2::Point2;

/// Iterator over the pixels of a line, both endpoints included.
#[derive(Debug, Clone)]
pub struct LinePixels {
    origin: Point2,
    dx: i64,
    dy: i64,
    steep: bool,
    steps: i64,
    step: i64,
    last: i64,
}

impl LinePixels {
    pub fn new(p0: Point2, p1: Point2) -> Self {
        let (p0, p1) = if p1.x < p0.x { (p1, p0) } else { (p0, p1) };
        let dx = p1.x as i64 - p0.x as i64;
        let dy = p1.y as i64 - p0.y as i64;
        let steep = dy.abs() > dx;
        let steps = if steep { dy.abs() } else { dx };
        Self {
            origin: p0,
            dx,
            dy,
            steep,
            steps,
            step: 0,
            last: steps,
        }
    }

    /// Drops the steps whose driving coordinate falls outside a
    /// `width` x `height` raster. The other coordinate is not checked.
    pub fn clipped(mut self, width: u32, height: u32) -> Self {
        let (lo, hi) = if self.steep {
            let oy = self.origin.y as i64;
            let max_y = height as i64 - 1;
            if self.dy > 0 {
                (-oy, max_y - oy)
            } else {
                (oy - max_y, oy)
            }
        } else {
            let ox = self.origin.x as i64;
            (-ox, width as i64 - 1 - ox)
        };
        self.step = self.step.max(lo);
        self.last = self.last.min(hi);
        self
    }
}

impl Iterator for LinePixels {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        if self.step > self.last {
            return None;
        }
        let i = self.step;
        self.step += 1;

        // A single-pixel line has no extent to divide by.
        if self.steps == 0 {
            return Some(self.origin);
        }

        let (ox, oy) = (self.origin.x as i64, self.origin.y as i64);
        let point = if self.steep {
            let sx = (self.dx as i128 * i as i128) as f64 / self.steps as f64;
            Point2::new((ox + sx as i64) as i32, (oy + i * self.dy.signum()) as i32)
        } else {
            let sy = (self.dy as i128 * i as i128) as f64 / self.steps as f64;
            Point2::new((ox + i) as i32, (oy + sy as i64) as i32)
        };
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1 - self.step).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePixels {}

/// Draws a 1-pixel-wide line without depth testing. Off-buffer pixels are skipped.
pub fn draw_line(buffer: &mut FrameBuffer, p0: Point2, p1: Point2, color: u32) {
    for p in LinePixels::new(p0, p1).clipped(buffer.width(), buffer.height()) {
        buffer.set_pixel(p.x, p.y, color);
    }
}
