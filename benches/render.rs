use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3A, Vec3Swizzles};
use sdf_contour::{
    to_triangles, Box3, DualContour, FnSdf, MarchingCubesOctree, MarchingCubesUniform,
    PartitionRenderer, Render3, Sdf3,
};

fn torus() -> impl Sdf3 {
    FnSdf::new(
        Box3::from_min_and_shape(Vec3A::new(-4.0, -1.0, -4.0), Vec3A::new(8.0, 2.0, 8.0)),
        |p: Vec3A| Vec2::new(p.xz().length() - 3.0, p.y).length() - 1.0,
    )
}

fn render(renderer: &dyn Render3, sdf: &dyn Sdf3) -> usize {
    to_triangles(renderer, sdf).map(|t| t.len()).unwrap_or(0)
}

fn render_benchmark(c: &mut Criterion) {
    let sdf = torus();

    let uniform = MarchingCubesUniform::new(128).unwrap();
    let octree = MarchingCubesOctree::new(128).unwrap();
    let dual_contour = DualContour::new(128).unwrap();
    let partitioned =
        PartitionRenderer::with_auto_splits(MarchingCubesOctree::new(128).unwrap(), 8);

    let mut group = c.benchmark_group("torus 128");
    group.sample_size(10);
    group.bench_function("marching cubes", |b| b.iter(|| render(&uniform, &sdf)));
    group.bench_function("octree marching cubes", |b| b.iter(|| render(&octree, &sdf)));
    group.bench_function("dual contouring", |b| {
        b.iter(|| render(&dual_contour, &sdf))
    });
    group.bench_function("partitioned octree marching cubes", |b| {
        b.iter(|| render(&partitioned, &sdf))
    });
    group.finish();
}

criterion_group!(benches, render_benchmark);
criterion_main!(benches);
