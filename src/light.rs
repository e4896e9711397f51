//! Fixed directional light and flat-shading helpers.

use crate::colors;
use crate::math::vec3::Vec3;

/// A directional light with parallel rays, like a distant sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light is pointing (not where it comes from).
    pub direction: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction is normalized, so it must not be the zero vector.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
        }
    }

    /// Signed brightness of a surface with the given unit normal.
    ///
    /// Positive when the surface faces the light, zero or negative when it
    /// faces away. The frame driver culls anything `<= 0`.
    pub fn brightness(&self, normal: Vec3) -> f64 {
        self.direction.dot(normal)
    }

    /// Brightness of a triangle given its three vertices.
    ///
    /// The normal is `(v2 - v0) x (v1 - v0)`, so a triangle wound
    /// counter-clockwise in a y-up plane faces `-z`. Returns `None` when no
    /// unit normal exists: zero area, or non-finite coordinates.
    pub fn face_brightness(&self, [v0, v1, v2]: [Vec3; 3]) -> Option<f64> {
        let normal = (v2 - v0).cross(v1 - v0);
        if !normal.length().is_normal() {
            return None;
        }
        Some(self.brightness(normal.normalize()))
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::INTO_SCREEN)
    }
}

/// Flat face color: each channel of `tint` scaled by `brightness`.
///
/// With the default cyan tint this gives `(0, b*255, b*255, 255)`.
pub fn flat_color(tint: u32, brightness: f64) -> u32 {
    colors::scale_color(tint, brightness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_illumination() {
        let light = DirectionalLight::default();
        assert_relative_eq!(light.brightness(Vec3::new(0.0, 0.0, -1.0)), 1.0);
    }

    #[test]
    fn test_facing_away_is_negative() {
        let light = DirectionalLight::default();
        assert!(light.brightness(Vec3::new(0.0, 0.0, 1.0)) < 0.0);
    }

    #[test]
    fn test_angled_illumination() {
        let light = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0));
        let normal = Vec3::new(0.0, -1.0, 1.0).normalize();
        assert_relative_eq!(light.brightness(normal), 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_direction_is_normalized() {
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, -5.0));
        assert_relative_eq!(light.direction.length(), 1.0);
    }

    #[test]
    fn test_counter_clockwise_face_is_lit() {
        let light = DirectionalLight::default();
        let ccw = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        assert_relative_eq!(light.face_brightness(ccw).unwrap(), 1.0);

        let cw = [ccw[0], ccw[2], ccw[1]];
        assert_relative_eq!(light.face_brightness(cw).unwrap(), -1.0);
    }

    #[test]
    fn test_degenerate_face_has_no_brightness() {
        let light = DirectionalLight::default();
        let collinear = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
        ];
        assert_eq!(light.face_brightness(collinear), None);
    }

    #[test]
    fn test_non_finite_face_has_no_brightness() {
        let light = DirectionalLight::default();
        let with_nan = [
            Vec3::new(f64::NAN, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        assert_eq!(light.face_brightness(with_nan), None);

        let overflowing = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1e300, 0.0, 0.0),
            Vec3::new(0.0, 1e300, 0.0),
        ];
        assert_eq!(light.face_brightness(overflowing), None);
    }

    #[test]
    fn test_flat_color_matches_reference_channels() {
        assert_eq!(flat_color(colors::CYAN, 1.0), colors::CYAN);
        assert_eq!(
            flat_color(colors::CYAN, 0.5),
            colors::pack_color(0, 127, 127, 0xFF)
        );
    }
}
