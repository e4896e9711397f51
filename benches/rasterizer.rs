use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flatraster::bench::{
    BarycentricRasterizer, FrameBuffer, Rasterizer, ScanlineRasterizer, Triangle,
};
use flatraster::prelude::*;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 800;

fn create_buffers() -> (Vec<u32>, Vec<f64>) {
    let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
    (vec![0u32; size], vec![f64::NEG_INFINITY; size])
}

fn small_triangle() -> Triangle {
    Triangle::flat(
        [Point2::new(100, 100), Point2::new(120, 100), Point2::new(110, 120)],
        0.0,
        0xFFFF0000,
    )
}

fn medium_triangle() -> Triangle {
    Triangle::flat(
        [Point2::new(100, 100), Point2::new(300, 100), Point2::new(200, 300)],
        0.0,
        0xFFFF0000,
    )
}

fn large_triangle() -> Triangle {
    Triangle::flat(
        [Point2::new(50, 50), Point2::new(750, 100), Point2::new(400, 750)],
        0.0,
        0xFFFF0000,
    )
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let barycentric = BarycentricRasterizer::new();
    let scanline = ScanlineRasterizer::new();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("barycentric", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                depth.fill(f64::NEG_INFINITY);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                barycentric.fill_triangle(black_box(tri), &mut fb)
            });
        });

        group.bench_with_input(BenchmarkId::new("scanline", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                depth.fill(f64::NEG_INFINITY);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                scanline.fill_triangle(black_box(tri), &mut fb)
            });
        });
    }

    group.finish();
}

/// A `n` x `n` grid of quads facing the light, two triangles each.
fn grid_mesh(n: usize) -> Mesh {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    for row in 0..=n {
        for col in 0..=n {
            let x = col as f64 / n as f64 * 1.8 - 0.9;
            let y = row as f64 / n as f64 * 1.8 - 0.9;
            vertices.push(Vec3::new(x, y, (x * y).sin()));
        }
    }

    let stride = n + 1;
    let mut faces = Vec::with_capacity(n * n * 2);
    for row in 0..n {
        for col in 0..n {
            let a = row * stride + col;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            faces.push(Face::new(a, b, c));
            faces.push(Face::new(b, d, c));
        }
    }

    Mesh::new(vertices, faces).expect("grid mesh indices are in range")
}

fn benchmark_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");
    let mesh = grid_mesh(40);

    for rasterizer in [RasterizerType::Barycentric, RasterizerType::Scanline] {
        let mut engine = Engine::new(RenderConfig::default().with_rasterizer(rasterizer));
        group.bench_function(format!("{rasterizer}_3200_faces"), |b| {
            b.iter(|| engine.render(black_box(&mesh)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_full_frame);
criterion_main!(benches);
