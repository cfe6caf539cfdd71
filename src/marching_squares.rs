//! Marching squares over a dense grid or over the leaves of an adaptive quadtree.

use crate::{
    bounds::SampleGrid2,
    cache::DistanceCache,
    error::{ConfigError, RenderError, SdfError},
    marching_cubes::interpolate_edge,
    marching_tables::{MS_CORNERS, MS_EDGES, MS_EDGE_CORNERS, MS_LINES},
    mesh::Line2,
    render::{send_batch, Render2},
    sampler::AdaptiveSampler,
    sdf::Sdf2,
};

use crossbeam_channel::Sender;
use glam::{IVec2, Vec2};

pub fn square_case(values: &[f32; 4]) -> usize {
    let mut index = 0;
    for (i, &v) in values.iter().enumerate() {
        if v < 0.0 {
            index |= 1 << i;
        }
    }
    index
}

/// Appends the contour segments of one square, oriented with the solid side
/// on the right.
pub fn contour_square(corners: &[Vec2; 4], values: &[f32; 4], out: &mut Vec<Line2>) {
    let index = square_case(values);
    let edges = MS_EDGES[index];
    if edges == 0 {
        return;
    }

    let mut points = [Vec2::ZERO; 4];
    for (e, &[a, b]) in MS_EDGE_CORNERS.iter().enumerate() {
        if edges & (1 << e) != 0 {
            points[e] = interpolate_edge(corners[a], corners[b], values[a], values[b]);
        }
    }

    for pair in MS_LINES[index].chunks_exact(2) {
        let (ea, eb) = (pair[0] as usize, pair[1] as usize);
        // Edges run counter-clockwise. Leaving edge `ea` toward `eb` keeps
        // the corner ahead of `ea` on the right.
        let ahead = MS_EDGE_CORNERS[ea][1];
        let line = if values[ahead] < 0.0 {
            Line2::new(points[ea], points[eb])
        } else {
            Line2::new(points[eb], points[ea])
        };
        if !line.is_degenerate(0.0) {
            out.push(line);
        }
    }
}

/// Dense marching squares. Only two rows of samples are held at once.
pub fn march_uniform(sdf: &dyn Sdf2, grid: &SampleGrid2) -> Result<Vec<Line2>, SdfError> {
    let IVec2 { x: nx, y: ny } = grid.cells;
    let evaluate_row = |x: i32, row: &mut Vec<f32>| -> Result<(), SdfError> {
        row.clear();
        for y in 0..=ny {
            row.push(sdf.evaluate(grid.position(IVec2::new(x, y)))?);
        }
        Ok(())
    };

    let mut row0 = Vec::with_capacity(ny as usize + 1);
    let mut row1 = Vec::with_capacity(ny as usize + 1);
    evaluate_row(0, &mut row0)?;

    let mut lines = Vec::new();
    for x in 0..nx {
        evaluate_row(x + 1, &mut row1)?;
        for y in 0..ny {
            let mut corners = [Vec2::ZERO; 4];
            let mut values = [0.0; 4];
            for (i, c) in MS_CORNERS.iter().enumerate() {
                let row = if c[0] == 0 { &row0 } else { &row1 };
                let local = IVec2::new(x + c[0], y + c[1]);
                corners[i] = grid.position(local);
                values[i] = row[local.y as usize];
            }
            contour_square(&corners, &values, &mut lines);
        }
        std::mem::swap(&mut row0, &mut row1);
    }
    Ok(lines)
}

/// Marching squares on the non-empty leaves of an adaptive quadtree.
pub fn march_quadtree(sdf: &dyn Sdf2, grid: &SampleGrid2) -> Result<Vec<Line2>, SdfError> {
    let cache = DistanceCache::new(sdf, *grid, 1);
    let sampler = AdaptiveSampler::new(&cache, 1);

    let mut lines = Vec::new();
    sampler.visit_leaves(&mut |node| -> Result<(), SdfError> {
        let mut corners = [Vec2::ZERO; 4];
        let mut values = [0.0; 4];
        for i in 0..4 {
            let coord = node.corner(i);
            corners[i] = cache.position(coord);
            values[i] = cache.get_or_evaluate(coord)?;
        }
        contour_square(&corners, &values, &mut lines);
        Ok(())
    })?;

    let stats = cache.stats();
    tracing::debug!(
        levels = sampler.levels(),
        lines = lines.len(),
        cache_entries = stats.entries,
        hit_rate = stats.hit_rate(),
        "marching squares quadtree pass"
    );
    Ok(lines)
}

#[derive(Clone, Debug)]
pub struct MarchingSquaresUniform {
    mesh_cells: u32,
}

impl MarchingSquaresUniform {
    pub fn new(mesh_cells: u32) -> Result<Self, ConfigError> {
        if mesh_cells == 0 {
            return Err(ConfigError::ZeroMeshCells);
        }
        Ok(Self { mesh_cells })
    }
}

impl Render2 for MarchingSquaresUniform {
    fn mesh_cells(&self) -> u32 {
        self.mesh_cells
    }

    fn render_grid(
        &self,
        sdf: &dyn Sdf2,
        grid: &SampleGrid2,
        output: &Sender<Vec<Line2>>,
    ) -> Result<(), RenderError> {
        send_batch(output, march_uniform(sdf, grid)?)
    }
}

#[derive(Clone, Debug)]
pub struct MarchingSquaresQuadtree {
    mesh_cells: u32,
}

impl MarchingSquaresQuadtree {
    pub fn new(mesh_cells: u32) -> Result<Self, ConfigError> {
        if mesh_cells == 0 {
            return Err(ConfigError::ZeroMeshCells);
        }
        Ok(Self { mesh_cells })
    }
}

impl Render2 for MarchingSquaresQuadtree {
    fn mesh_cells(&self) -> u32 {
        self.mesh_cells
    }

    fn render_grid(
        &self,
        sdf: &dyn Sdf2,
        grid: &SampleGrid2,
        output: &Sender<Vec<Line2>>,
    ) -> Result<(), RenderError> {
        send_batch(output, march_quadtree(sdf, grid)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> [Vec2; 4] {
        MS_CORNERS.map(|[x, y]| Vec2::new(x as f32, y as f32))
    }

    fn bilinear_gradient(values: &[f32; 4], p: Vec2) -> Vec2 {
        let [v0, v1, v2, v3] = *values;
        Vec2::new(
            (v1 - v0) * (1.0 - p.y) + (v2 - v3) * p.y,
            (v3 - v0) * (1.0 - p.x) + (v2 - v1) * p.x,
        )
    }

    #[test]
    fn solid_side_is_on_the_right() {
        let corners = unit_square();
        for case in 1..15usize {
            let values: [f32; 4] =
                std::array::from_fn(|i| if case & (1 << i) != 0 { -0.5 } else { 0.5 });
            let mut lines = Vec::new();
            contour_square(&corners, &values, &mut lines);
            assert!(!lines.is_empty(), "case {case}");
            for Line2([a, b]) in lines {
                let d = b - a;
                let right = Vec2::new(d.y, -d.x);
                // The gradient points toward empty space, so away from the right.
                assert!(bilinear_gradient(&values, (a + b) * 0.5).dot(right) < 0.0, "case {case}");
            }
        }
    }

    #[test]
    fn single_corner_case_cuts_that_corner() {
        let corners = unit_square();
        let mut lines = Vec::new();
        contour_square(&corners, &[-1.0, 1.0, 1.0, 1.0], &mut lines);
        assert_eq!(lines.len(), 1);
        let Line2([a, b]) = lines[0];
        for p in [a, b] {
            assert!((p.x == 0.5 && p.y == 0.0) || (p.x == 0.0 && p.y == 0.5));
        }
    }
}
