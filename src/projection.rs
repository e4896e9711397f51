//! Orthographic viewport projection.
//!
//! The [`Projection`] struct maps model-space vertices, assumed to lie roughly
//! in `[-1, 1]` on x and y, onto integer pixel coordinates. There is no
//! perspective divide: depth is carried through unchanged for the depth test.

use crate::math::point2::Point2;
use crate::math::vec3::Vec3;

/// A vertex after projection: its pixel and its untouched model-space z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenVertex {
    pub point: Point2,
    pub depth: f64,
}

/// Orthographic projection onto a `width` x `height` raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    width: u32,
    height: u32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Projects a vertex to the raster.
    ///
    /// `x = w/2 + v.x * w/2`, `y = h/2 - v.y * h/2`, using integer halves and
    /// truncating toward zero. Y is flipped because the raster origin is the
    /// top-left corner while model space has y pointing up.
    pub fn project(&self, v: Vec3) -> ScreenVertex {
        let half_w = (self.width / 2) as f64;
        let half_h = (self.height / 2) as f64;
        ScreenVertex {
            point: Point2::new((half_w + v.x * half_w) as i32, (half_h - v.y * half_h) as i32),
            depth: v.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_center() {
        let proj = Projection::new(800, 800);
        let sv = proj.project(Vec3::new(0.0, 0.0, 0.25));
        assert_eq!(sv.point, Point2::new(400, 400));
        assert_eq!(sv.depth, 0.25);
    }

    #[test]
    fn corners_flip_y() {
        let proj = Projection::new(800, 600);
        assert_eq!(proj.project(Vec3::new(-1.0, 1.0, 0.0)).point, Point2::new(0, 0));
        assert_eq!(proj.project(Vec3::new(1.0, -1.0, 0.0)).point, Point2::new(800, 600));
    }

    #[test]
    fn depth_does_not_scale_xy() {
        let proj = Projection::new(100, 100);
        let near = proj.project(Vec3::new(0.5, 0.5, -10.0));
        let far = proj.project(Vec3::new(0.5, 0.5, 10.0));
        assert_eq!(near.point, far.point);
        assert_eq!(near.point, Point2::new(75, 25));
    }

    #[test]
    fn truncates_toward_zero() {
        let proj = Projection::new(10, 10);
        // 5 + 0.19 * 5 = 5.95
        assert_eq!(proj.project(Vec3::new(0.19, 0.0, 0.0)).point.x, 5);
        // 5 - 1.1 * 5 = -0.5 truncates to 0, off-screen points stay signed
        assert_eq!(proj.project(Vec3::new(0.0, 1.1, 0.0)).point.y, 0);
        assert_eq!(proj.project(Vec3::new(-1.5, 0.0, 0.0)).point.x, -2);
    }

    #[test]
    fn odd_width_uses_integer_half() {
        let proj = Projection::new(801, 801);
        assert_eq!(proj.project(Vec3::ZERO).point, Point2::new(400, 400));
    }
}
