//! Command-line front end: load an OBJ mesh, render one frame, save a PNG.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};

use flatraster::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use flatraster::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Filled,
    Wireframe,
    FilledWireframe,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Filled => RenderMode::Filled,
            ModeArg::Wireframe => RenderMode::Wireframe,
            ModeArg::FilledWireframe => RenderMode::FilledWireframe,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RasterizerArg {
    Barycentric,
    Scanline,
}

impl From<RasterizerArg> for RasterizerType {
    fn from(arg: RasterizerArg) -> Self {
        match arg {
            RasterizerArg::Barycentric => RasterizerType::Barycentric,
            RasterizerArg::Scanline => RasterizerType::Scanline,
        }
    }
}

/// Render a triangle mesh with flat shading and a depth buffer.
#[derive(Parser)]
#[command(name = "flatraster")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Mesh to render (OBJ subset: v, f, vt, vn, g, s, comments)
    #[arg(default_value = "in.obj")]
    input: PathBuf,

    /// Where to write the PNG
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Shear y by this multiple of x before projection
    #[arg(long)]
    shear: Option<f64>,

    /// Rotate the model in the x/y plane, in degrees
    #[arg(long)]
    rotate: Option<f64>,

    /// Draw a background grid, optionally with a custom spacing
    #[arg(long, num_args = 0..=1, default_missing_value = "100")]
    grid: Option<u32>,

    #[arg(long, value_enum, default_value = "filled")]
    mode: ModeArg,

    #[arg(long, value_enum, default_value = "barycentric")]
    rasterizer: RasterizerArg,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        let mut transform = Mat2::identity();
        if let Some(factor) = self.shear {
            transform = Mat2::shear_y(factor) * transform;
        }
        if let Some(degrees) = self.rotate {
            transform = Mat2::rotation(degrees.to_radians()) * transform;
        }

        let mut config = RenderConfig::default()
            .with_size(self.width, self.height)
            .with_transform(transform)
            .with_render_mode(self.mode.into())
            .with_rasterizer(self.rasterizer.into());
        if let Some(spacing) = self.grid {
            config = config.with_grid(spacing);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mesh = Mesh::from_obj_file(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let mut engine = Engine::new(cli.render_config());

    let start = Instant::now();
    let stats = engine.render(&mesh);
    info!(
        elapsed = ?start.elapsed(),
        drawn = stats.drawn,
        culled = stats.culled,
        pixels = stats.pixels_written,
        "Rendered"
    );

    engine
        .renderer()
        .to_image()
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(path = %cli.output.display(), "Saved image");

    Ok(())
}
