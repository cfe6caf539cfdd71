//! Marching cubes over a dense grid or over the leaves of an adaptive octree.

use crate::{
    bounds::SampleGrid3,
    cache::DistanceCache,
    error::{ConfigError, RenderError, SdfError},
    marching_tables::{MC_CORNERS, MC_EDGES, MC_EDGE_CORNERS, MC_TRIANGLES},
    mesh::Triangle3,
    render::{send_batch, Render3},
    sampler::AdaptiveSampler,
    sdf::{SamplePoint, Sdf3},
};

use crossbeam_channel::Sender;
use glam::{IVec3, Vec3A};
use rayon::prelude::*;
use std::ops::{Add, Mul, Sub};

/// Samples within this distance of the isovalue snap the edge vertex onto
/// the corner.
pub const INTERPOLATION_EPSILON: f32 = 1e-6;

/// Number of samples evaluated per parallel task when filling a layer.
pub const LAYER_BATCH_SIZE: usize = 100;

/// Position of the zero crossing between two corner samples.
///
/// The result only depends on the unordered pair of endpoints, so cells that
/// share an edge produce bit-identical vertices.
pub fn interpolate_edge<P>(p1: P, p2: P, v1: f32, v2: f32) -> P
where
    P: SamplePoint + Add<Output = P> + Sub<Output = P> + Mul<f32, Output = P>,
{
    let (p1, p2, v1, v2) = if lexicographic_lt(p2.to_xyz(), p1.to_xyz()) {
        (p2, p1, v2, v1)
    } else {
        (p1, p2, v1, v2)
    };

    let close_to_v1 = v1.abs() < INTERPOLATION_EPSILON;
    let close_to_v2 = v2.abs() < INTERPOLATION_EPSILON;
    if close_to_v1 && !close_to_v2 {
        return p1;
    }
    if close_to_v2 && !close_to_v1 {
        return p2;
    }
    let t = if close_to_v1 && close_to_v2 {
        0.5
    } else {
        -v1 / (v2 - v1)
    };
    p1 + (p2 - p1) * t
}

fn lexicographic_lt(a: [f32; 3], b: [f32; 3]) -> bool {
    for i in 0..3 {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
    }
    false
}

/// Case index: bit `i` is set when corner `i` is inside the surface.
pub fn cube_case(values: &[f32; 8]) -> usize {
    let mut index = 0;
    for (i, &v) in values.iter().enumerate() {
        if v < 0.0 {
            index |= 1 << i;
        }
    }
    index
}

/// Appends the triangles of one cube. Triangles face from solid toward
/// empty space.
pub fn triangulate_cube(corners: &[Vec3A; 8], values: &[f32; 8], out: &mut Vec<Triangle3>) {
    let index = cube_case(values);
    let edges = MC_EDGES[index];
    if edges == 0 {
        return;
    }

    let mut points = [Vec3A::ZERO; 12];
    for (e, &[a, b]) in MC_EDGE_CORNERS.iter().enumerate() {
        if edges & (1 << e) != 0 {
            points[e] = interpolate_edge(corners[a], corners[b], values[a], values[b]);
        }
    }

    for t in MC_TRIANGLES[index].chunks_exact(3) {
        let tri = Triangle3::new(
            points[t[2] as usize],
            points[t[1] as usize],
            points[t[0] as usize],
        );
        if !tri.is_degenerate(0.0) {
            out.push(tri);
        }
    }
}

/// Dense marching cubes. Only two layers of samples are held at once.
pub fn march_uniform(sdf: &dyn Sdf3, grid: &SampleGrid3) -> Result<Vec<Triangle3>, SdfError> {
    let IVec3 {
        x: nx,
        y: ny,
        z: nz,
    } = grid.cells;
    let stride = (nz + 1) as usize;
    let layer_len = (ny + 1) as usize * stride;

    let mut layer0 = vec![0.0; layer_len];
    let mut layer1 = vec![0.0; layer_len];
    evaluate_layer(sdf, grid, 0, stride, &mut layer0)?;

    let mut triangles = Vec::new();
    for x in 0..nx {
        evaluate_layer(sdf, grid, x + 1, stride, &mut layer1)?;
        for y in 0..ny {
            for z in 0..nz {
                let mut corners = [Vec3A::ZERO; 8];
                let mut values = [0.0; 8];
                for (i, c) in MC_CORNERS.iter().enumerate() {
                    let layer = if c[0] == 0 { &layer0 } else { &layer1 };
                    let local = IVec3::new(x + c[0], y + c[1], z + c[2]);
                    corners[i] = grid.position(local);
                    values[i] = layer[local.y as usize * stride + local.z as usize];
                }
                triangulate_cube(&corners, &values, &mut triangles);
            }
        }
        std::mem::swap(&mut layer0, &mut layer1);
    }
    Ok(triangles)
}

/// Fills `layer` with the samples of the `x`th lattice plane, in parallel
/// batches. Returns once every batch has completed.
fn evaluate_layer(
    sdf: &dyn Sdf3,
    grid: &SampleGrid3,
    x: i32,
    stride: usize,
    layer: &mut [f32],
) -> Result<(), SdfError> {
    layer
        .par_chunks_mut(LAYER_BATCH_SIZE)
        .enumerate()
        .try_for_each(|(batch, values)| {
            for (j, value) in values.iter_mut().enumerate() {
                let k = batch * LAYER_BATCH_SIZE + j;
                let local = IVec3::new(x, (k / stride) as i32, (k % stride) as i32);
                *value = sdf.evaluate(grid.position(local))?;
            }
            Ok(())
        })
}

/// Marching cubes on the non-empty leaves of an adaptive octree.
///
/// Samples live on a half-cell lattice so that every leaf cube has a
/// lattice point at its center.
pub fn march_octree(sdf: &dyn Sdf3, grid: &SampleGrid3) -> Result<Vec<Triangle3>, SdfError> {
    let cache = DistanceCache::new(sdf, *grid, 1);
    let sampler = AdaptiveSampler::new(&cache, 1);

    let mut triangles = Vec::new();
    sampler.visit_leaves(&mut |node| -> Result<(), SdfError> {
        let mut corners = [Vec3A::ZERO; 8];
        let mut values = [0.0; 8];
        for i in 0..8 {
            let coord = node.corner(i);
            corners[i] = cache.position(coord);
            values[i] = cache.get_or_evaluate(coord)?;
        }
        triangulate_cube(&corners, &values, &mut triangles);
        Ok(())
    })?;

    let stats = cache.stats();
    tracing::debug!(
        levels = sampler.levels(),
        triangles = triangles.len(),
        cache_entries = stats.entries,
        hit_rate = stats.hit_rate(),
        "marching cubes octree pass"
    );
    Ok(triangles)
}

/// Marching cubes over every cell of the grid.
#[derive(Clone, Debug)]
pub struct MarchingCubesUniform {
    mesh_cells: u32,
}

impl MarchingCubesUniform {
    pub fn new(mesh_cells: u32) -> Result<Self, ConfigError> {
        if mesh_cells == 0 {
            return Err(ConfigError::ZeroMeshCells);
        }
        Ok(Self { mesh_cells })
    }
}

impl Render3 for MarchingCubesUniform {
    fn mesh_cells(&self) -> u32 {
        self.mesh_cells
    }

    fn render_grid(
        &self,
        sdf: &dyn Sdf3,
        grid: &SampleGrid3,
        output: &Sender<Vec<Triangle3>>,
    ) -> Result<(), RenderError> {
        let triangles = march_uniform(sdf, grid)?;
        tracing::debug!(grid = %grid.describe(), triangles = triangles.len(), "marching cubes");
        send_batch(output, triangles)
    }
}

/// Marching cubes over the cells an adaptive octree cannot rule out.
#[derive(Clone, Debug)]
pub struct MarchingCubesOctree {
    mesh_cells: u32,
}

impl MarchingCubesOctree {
    pub fn new(mesh_cells: u32) -> Result<Self, ConfigError> {
        if mesh_cells == 0 {
            return Err(ConfigError::ZeroMeshCells);
        }
        Ok(Self { mesh_cells })
    }
}

impl Render3 for MarchingCubesOctree {
    fn mesh_cells(&self) -> u32 {
        self.mesh_cells
    }

    fn render_grid(
        &self,
        sdf: &dyn Sdf3,
        grid: &SampleGrid3,
        output: &Sender<Vec<Triangle3>>,
    ) -> Result<(), RenderError> {
        send_batch(output, march_octree(sdf, grid)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube_corners() -> [Vec3A; 8] {
        MC_CORNERS.map(|[x, y, z]| Vec3A::new(x as f32, y as f32, z as f32))
    }

    #[test]
    fn interpolation_is_symmetric() {
        let a = Vec3A::new(0.1, 0.2, 0.3);
        let b = Vec3A::new(0.1, 0.7, 0.3);
        assert_eq!(
            interpolate_edge(a, b, -0.37, 0.11),
            interpolate_edge(b, a, 0.11, -0.37)
        );
    }

    #[test]
    fn interpolation_snaps_near_isovalue() {
        let a = Vec3A::ZERO;
        let b = Vec3A::X;
        assert_eq!(interpolate_edge(a, b, 1e-7, 1.0), a);
        assert_eq!(interpolate_edge(a, b, -1.0, -1e-7), b);
        assert_eq!(interpolate_edge(a, b, 1e-7, -1e-7), Vec3A::new(0.5, 0.0, 0.0));
        assert_eq!(interpolate_edge(a, b, -1.0, 3.0), Vec3A::new(0.25, 0.0, 0.0));
    }

    #[test]
    fn triangles_face_away_from_solid_corners() {
        let corners = unit_cube_corners();
        for case in 1..255usize {
            let values: [f32; 8] = std::array::from_fn(|i| {
                if case & (1 << i) != 0 {
                    -0.5
                } else {
                    0.5
                }
            });
            let mut tris = Vec::new();
            triangulate_cube(&corners, &values, &mut tris);
            assert!(!tris.is_empty(), "case {case}");
            for t in &tris {
                // Trilinear gradient at the centroid points toward empty space.
                let c = (t.0[0] + t.0[1] + t.0[2]) / 3.0;
                let g = trilinear_gradient(&values, c);
                assert!(t.cross().dot(g) > 0.0, "case {case}");
            }
        }
    }

    fn trilinear_gradient(values: &[f32; 8], p: Vec3A) -> Vec3A {
        let mut g = Vec3A::ZERO;
        for (i, [cx, cy, cz]) in MC_CORNERS.iter().enumerate() {
            let w = |c: i32, t: f32| if c == 1 { t } else { 1.0 - t };
            let dw = |c: i32| if c == 1 { 1.0 } else { -1.0 };
            g += values[i]
                * Vec3A::new(
                    dw(*cx) * w(*cy, p.y) * w(*cz, p.z),
                    w(*cx, p.x) * dw(*cy) * w(*cz, p.z),
                    w(*cx, p.x) * w(*cy, p.y) * dw(*cz),
                );
        }
        g
    }
}
