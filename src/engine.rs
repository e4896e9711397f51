//! Frame driver.
//!
//! The [`Engine`] struct is the main entry point for the renderer. For every
//! face of a [`Mesh`] it applies the configured 2x2 transform, computes flat
//! lighting (culling faces that face away from the light), projects the
//! vertices and hands the screen-space triangle to the active rasterizer.

use tracing::{debug, trace};

use crate::colors;
use crate::config::{RenderConfig, RenderMode};
use crate::light::{flat_color, DirectionalLight};
use crate::mesh::Mesh;
use crate::projection::Projection;
use crate::render::{Rasterizer, RasterizerDispatcher, RasterizerType, Renderer, Triangle};

/// Counters for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Faces in the mesh.
    pub faces: usize,
    /// Faces with brightness `<= 0`, skipped.
    pub culled: usize,
    /// Faces with no usable normal (zero area or non-finite vertices), skipped.
    pub degenerate: usize,
    /// Faces handed to the rasterizer.
    pub drawn: usize,
    /// Pixel writes that passed the depth test.
    pub pixels_written: usize,
}

pub struct Engine {
    config: RenderConfig,
    renderer: Renderer,
    rasterizer: RasterizerDispatcher,
    projection: Projection,
    light: DirectionalLight,
    triangles_to_render: Vec<Triangle>,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            renderer: Renderer::new(config.width, config.height),
            rasterizer: RasterizerDispatcher::new(config.rasterizer),
            projection: Projection::new(config.width, config.height),
            light: DirectionalLight::new(config.light_direction),
            triangles_to_render: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.config.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.config.render_mode
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.config.rasterizer = rasterizer_type;
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    /// The buffers of the last rendered frame.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Returns the rendered frame as RGBA bytes.
    pub fn frame_rgba(&self) -> Vec<u8> {
        self.renderer.to_rgba_bytes()
    }

    /// Light, cull and project every face into screen-space triangles.
    fn update(&mut self, mesh: &Mesh, stats: &mut FrameStats) {
        let transform = self.config.transform;
        self.triangles_to_render.clear();

        for (index, face) in mesh.faces().iter().enumerate() {
            let vertices = mesh
                .face_vertices(face)
                .map(|v| transform.transform_vec3(v));

            let Some(brightness) = self.light.face_brightness(vertices) else {
                trace!(face = index, "Skipping face without a normal");
                stats.degenerate += 1;
                continue;
            };

            // Facing away from the light doubles as backface culling.
            if brightness.is_nan() || brightness <= 0.0 {
                stats.culled += 1;
                continue;
            }

            let screen = vertices.map(|v| self.projection.project(v));
            self.triangles_to_render.push(Triangle::new(
                screen.map(|s| s.point),
                screen.map(|s| s.depth),
                flat_color(self.config.tint, brightness),
            ));
        }

        stats.drawn = self.triangles_to_render.len();
    }

    /// Render one frame of `mesh` into freshly cleared buffers.
    pub fn render(&mut self, mesh: &Mesh) -> FrameStats {
        let mut stats = FrameStats {
            faces: mesh.face_count(),
            ..FrameStats::default()
        };

        self.renderer.clear(self.config.background);
        if let Some(grid) = self.config.grid {
            self.renderer.draw_grid(grid.spacing, grid.color);
        }

        self.update(mesh, &mut stats);

        if self.config.render_mode.draws_fill() {
            let mut fb = self.renderer.as_framebuffer();
            for triangle in &self.triangles_to_render {
                stats.pixels_written += self.rasterizer.fill_triangle(triangle, &mut fb);
            }
        }

        if self.config.render_mode.draws_wireframe() {
            for triangle in &self.triangles_to_render {
                self.renderer
                    .draw_triangle_wireframe(triangle.points, colors::WIREFRAME);
            }
        }

        debug!(
            faces = stats.faces,
            drawn = stats.drawn,
            culled = stats.culled,
            degenerate = stats.degenerate,
            pixels = stats.pixels_written,
            "Rendered frame"
        );
        stats
    }
}
