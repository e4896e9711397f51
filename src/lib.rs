//! A minimal CPU triangle rasterizer.
//!
//! Loads a triangle mesh from a strict subset of the Wavefront OBJ format,
//! projects it orthographically onto a pixel buffer and fills every face that
//! faces the light with a single flat color, resolving occlusion with a depth
//! buffer.
//!
//! # Quick Start
//!
//! ```ignore
//! use flatraster::prelude::*;
//!
//! let mesh = Mesh::from_obj_file("head.obj")?;
//! let mut engine = Engine::new(RenderConfig::default());
//! let stats = engine.render(&mesh);
//! engine.renderer().to_image().save("out.png")?;
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod engine;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::{GridConfig, RenderConfig, RenderMode};
pub use engine::{Engine, FrameStats};
pub use mesh::{Face, LoadError, Mesh};
pub use projection::Projection;
pub use render::RasterizerType;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use flatraster::prelude::*;
/// ```
pub mod prelude {
    // Configuration
    pub use crate::config::{GridConfig, RenderConfig, RenderMode};

    // Engine
    pub use crate::engine::{Engine, FrameStats};

    // Mesh
    pub use crate::mesh::{Face, LoadError, Mesh};

    // Math
    pub use crate::math::mat2::Mat2;
    pub use crate::math::point2::Point2;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{RasterizerType, Renderer};
}

/// Rasterizer internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        BarycentricRasterizer, FrameBuffer, Rasterizer, ScanlineRasterizer, Triangle,
    };
}
