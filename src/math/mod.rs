//! Geometry kernel: vectors, raster points and the 2x2 pre-projection map.

pub mod mat2;
pub mod point2;
pub mod vec3;
