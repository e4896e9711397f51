//! 2x2 linear map over the x/y plane.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat2 * v`
//! - Stored row-major as `[[a, b], [c, d]]`, so `x' = a*x + b*y`, `y' = c*x + d*y`
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! The z component of a [`Vec3`] passes through unchanged, which keeps depth
//! intact for the depth test after a pre-projection shear or rotation.

use std::ops::Mul;

use super::point2::Point2;
use super::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    data: [[f64; 2]; 2],
}

impl Mat2 {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Mat2 {
            data: [[a, b], [c, d]],
        }
    }

    pub const fn identity() -> Self {
        Mat2::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Shears y by `factor * x`: `[1 0; factor 1]`.
    pub const fn shear_y(factor: f64) -> Self {
        Mat2::new(1.0, 0.0, factor, 1.0)
    }

    /// Counter-clockwise rotation in the x/y plane.
    pub fn rotation(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat2::new(c, -s, s, c)
    }

    pub fn determinant(&self) -> f64 {
        self.data[0][0] * self.data[1][1] - self.data[0][1] * self.data[1][0]
    }

    /// Applies the map to x/y and leaves z untouched.
    pub fn transform_vec3(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.data[0][0] * v.x + self.data[0][1] * v.y,
            self.data[1][0] * v.x + self.data[1][1] * v.y,
            v.z,
        )
    }

    /// Applies the map to an integer point, truncating the result toward zero.
    pub fn transform_point(&self, p: Point2) -> Point2 {
        let x = p.x as f64;
        let y = p.y as f64;
        Point2::new(
            (self.data[0][0] * x + self.data[0][1] * y) as i32,
            (self.data[1][0] * x + self.data[1][1] * y) as i32,
        )
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<Mat2> for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Self::Output {
        let mut result = [[0.0; 2]; 2];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.data[i][0] * rhs.data[0][j] + self.data[i][1] * rhs.data[1][j];
            }
        }
        Mat2 { data: result }
    }
}

impl Mul<Vec3> for Mat2 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        self.transform_vec3(v)
    }
}
