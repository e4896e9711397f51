//! Rasterization: buffers, lines and triangle fill.

pub mod framebuffer;
pub mod line;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::FrameBuffer;
pub use line::{draw_line, LinePixels};
pub use rasterizer::{
    barycentric_weights, BarycentricRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType,
    ScanlineRasterizer, Triangle,
};
pub use renderer::Renderer;
