//! Render configuration.
//!
//! [`RenderConfig`] gathers every constant the frame driver consumes. It is
//! passed to [`Engine::new`](crate::engine::Engine::new) and never read from
//! global state.
//!
//! ```ignore
//! let config = RenderConfig::default()
//!     .with_size(400, 300)
//!     .with_transform(Mat2::shear_y(0.3))
//!     .with_grid(100);
//! ```

use crate::colors;
use crate::math::mat2::Mat2;
use crate::math::vec3::Vec3;
use crate::render::RasterizerType;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_GRID_SPACING: u32 = 100;

/// Which layers to draw for each visible face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Flat-shaded, depth-tested fill
    #[default]
    Filled,
    /// Edges only, no depth test
    Wireframe,
    /// Fill, then edges on top
    FilledWireframe,
}

impl RenderMode {
    pub fn draws_fill(&self) -> bool {
        matches!(self, RenderMode::Filled | RenderMode::FilledWireframe)
    }

    pub fn draws_wireframe(&self) -> bool {
        matches!(self, RenderMode::Wireframe | RenderMode::FilledWireframe)
    }
}

/// Background grid overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub spacing: u32,
    pub color: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_GRID_SPACING,
            color: colors::GRID,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Direction the light points; faces whose normal agrees with it are lit.
    pub light_direction: Vec3,
    /// Applied to every vertex's x/y before lighting and projection.
    pub transform: Mat2,
    pub background: u32,
    /// Full-brightness face color, scaled per face by its brightness.
    pub tint: u32,
    pub grid: Option<GridConfig>,
    pub render_mode: RenderMode,
    pub rasterizer: RasterizerType,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            light_direction: Vec3::INTO_SCREEN,
            transform: Mat2::identity(),
            background: colors::BACKGROUND,
            tint: colors::CYAN,
            grid: None,
            render_mode: RenderMode::default(),
            rasterizer: RasterizerType::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_light_direction(mut self, direction: Vec3) -> Self {
        self.light_direction = direction;
        self
    }

    pub fn with_transform(mut self, transform: Mat2) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_background(mut self, color: u32) -> Self {
        self.background = color;
        self
    }

    pub fn with_tint(mut self, color: u32) -> Self {
        self.tint = color;
        self
    }

    /// Enable the grid overlay with the default color.
    pub fn with_grid(mut self, spacing: u32) -> Self {
        self.grid = Some(GridConfig {
            spacing,
            ..GridConfig::default()
        });
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    pub fn with_rasterizer(mut self, rasterizer: RasterizerType) -> Self {
        self.rasterizer = rasterizer;
        self
    }
}
