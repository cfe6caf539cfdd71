use crate::{
    bounds::SampleGrid3,
    error::{ConfigError, RenderError},
    mesh::{MeshVertexId, Triangle3, VertexWelder},
    render::{send_batch, Render3},
    sdf::{BoundedSdf, Sdf3},
};
use crossbeam_channel::{unbounded, Sender};
use glam::IVec3;
use rayon::prelude::*;
use std::collections::HashSet;

/// Welding tolerance for seam vertices, relative to the cell size.
pub const DEFAULT_MERGE_EPSILON: f32 = 1e-3;

/// Splits the sample grid into sub-grids that are rendered in parallel by
/// clones of an inner renderer, then welds the seams.
///
/// Each sub-grid except the last on an axis extends `overlap_cells` cells
/// into its + neighbor, so that extractors needing neighboring cells (dual
/// contouring) see every interior edge. Triangles produced twice inside the
/// overlap are dropped during the merge.
///
/// Seams only close when the inner renderer's [`Render3::seams_match`] holds.
/// Dual contouring with simplification does not qualify.
#[derive(Clone, Debug)]
pub struct PartitionRenderer<R> {
    inner: R,
    splits: [u32; 3],
    overlap_cells: u32,
    merge_epsilon: f32,
}

impl<R: Render3 + Clone> PartitionRenderer<R> {
    /// `splits[axis] + 1` partitions along each axis.
    pub fn new(inner: R, splits: [u32; 3]) -> Self {
        Self {
            inner,
            splits,
            overlap_cells: 1,
            merge_epsilon: DEFAULT_MERGE_EPSILON,
        }
    }

    /// Splits chosen so that there are at least `min_partitions` partitions.
    pub fn with_auto_splits(inner: R, min_partitions: u32) -> Self {
        Self::new(inner, auto_splits_minimum(min_partitions))
    }

    pub fn with_overlap_cells(mut self, overlap_cells: u32) -> Self {
        self.overlap_cells = overlap_cells;
        self
    }

    pub fn with_merge_epsilon(mut self, merge_epsilon: f32) -> Result<Self, ConfigError> {
        if !merge_epsilon.is_finite() || merge_epsilon < 0.0 {
            return Err(ConfigError::InvalidMergeEpsilon(merge_epsilon));
        }
        self.merge_epsilon = merge_epsilon;
        Ok(self)
    }

    pub fn splits(&self) -> [u32; 3] {
        self.splits
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Sub-grids of whole cells covering `grid`.
    pub fn partitions(&self, grid: &SampleGrid3) -> Vec<SampleGrid3> {
        let ranges: [Vec<(i32, i32)>; 3] = std::array::from_fn(|axis| {
            axis_ranges(grid.cells[axis], self.splits[axis], self.overlap_cells as i32)
        });

        let mut parts = Vec::new();
        for &(x0, x1) in &ranges[0] {
            for &(y0, y1) in &ranges[1] {
                for &(z0, z1) in &ranges[2] {
                    parts.push(grid.sub_grid(
                        IVec3::new(x0, y0, z0),
                        IVec3::new(x1 - x0, y1 - y0, z1 - z0),
                    ));
                }
            }
        }
        parts
    }
}

/// `[start, end)` cell ranges along one axis, extended by `overlap` except
/// for the last.
fn axis_ranges(cells: i32, splits: u32, overlap: i32) -> Vec<(i32, i32)> {
    let count = (splits as i32 + 1).clamp(1, cells.max(1));
    (0..count)
        .map(|k| {
            let start = k * cells / count;
            let end = (k + 1) * cells / count;
            if k + 1 < count {
                (start, (end + overlap).min(cells))
            } else {
                (start, end)
            }
        })
        .collect()
}

/// Split counts per axis giving at least `min_partitions` partitions, shared
/// evenly between the axes with any remainder going to X.
pub fn auto_splits_minimum(min_partitions: u32) -> [u32; 3] {
    let even = min_partitions / 8;
    let mut splits = [even; 3];
    let yz = (splits[1] + 1) * (splits[2] + 1);
    let total = (splits[0] + 1) * yz;
    if min_partitions > total {
        splits[0] += (min_partitions - total + yz - 1) / yz;
    }
    splits
}

/// Welds vertices within `tolerance` and removes triangles that collapse or
/// that were produced more than once.
pub fn merge_triangles(
    triangles: impl IntoIterator<Item = Triangle3>,
    tolerance: f32,
) -> Vec<Triangle3> {
    let mut welder = VertexWelder::new(tolerance);
    let mut seen: HashSet<[MeshVertexId; 3]> = HashSet::new();
    let mut merged = Vec::new();
    for t in triangles {
        let [a, b, c] = t.0.map(|p| welder.weld(p));
        if a == b || b == c || c == a {
            continue;
        }
        // Rotate the smallest index first, keeping the winding.
        let key = if a < b && a < c {
            [a, b, c]
        } else if b < c {
            [b, c, a]
        } else {
            [c, a, b]
        };
        if seen.insert(key) {
            merged.push(key);
        }
    }

    let positions = welder.positions();
    merged
        .into_iter()
        .map(|ids| Triangle3(ids.map(|v| positions[v as usize])))
        .collect()
}

impl<R: Render3 + Clone> Render3 for PartitionRenderer<R> {
    fn mesh_cells(&self) -> u32 {
        self.inner.mesh_cells()
    }

    fn grid(&self, sdf: &dyn Sdf3) -> Result<SampleGrid3, ConfigError> {
        self.inner.grid(sdf)
    }

    fn seams_match(&self) -> bool {
        self.inner.seams_match()
    }

    fn render_grid(
        &self,
        sdf: &dyn Sdf3,
        grid: &SampleGrid3,
        output: &Sender<Vec<Triangle3>>,
    ) -> Result<(), RenderError> {
        let parts = self.partitions(grid);
        if parts.len() > 1 && !self.inner.seams_match() {
            tracing::warn!(count = parts.len(), "partition seams will not weld closed");
        }

        let batches = {
            let _span = tracing::info_span!("render_partitions", count = parts.len()).entered();
            parts
                .par_iter()
                .map(|part| -> Result<Vec<Triangle3>, RenderError> {
                    let renderer = self.inner.clone();
                    let bounded = BoundedSdf::new(sdf, part.bounds());
                    let (tx, rx) = unbounded();
                    renderer.render_grid(&bounded, part, &tx)?;
                    drop(tx);
                    Ok(rx.into_iter().flatten().collect())
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let merged = {
            let _span = tracing::info_span!("merge_partitions").entered();
            let produced: usize = batches.iter().map(Vec::len).sum();
            let merged = merge_triangles(
                batches.into_iter().flatten(),
                self.merge_epsilon * grid.resolution,
            );
            tracing::debug!(produced, merged = merged.len(), "merged partitions");
            merged
        };
        send_batch(output, merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bounds::Box3, marching_cubes::MarchingCubesUniform};
    use glam::Vec3A;

    #[test]
    fn auto_splits_reach_minimum() {
        assert_eq!(auto_splits_minimum(1), [0, 0, 0]);
        assert_eq!(auto_splits_minimum(4), [3, 0, 0]);
        assert_eq!(auto_splits_minimum(8), [1, 1, 1]);
        assert_eq!(auto_splits_minimum(12), [2, 1, 1]);
        for n in 1..100 {
            let [x, y, z] = auto_splits_minimum(n);
            assert!((x + 1) * (y + 1) * (z + 1) >= n, "{n}");
        }
    }

    #[test]
    fn partitions_tile_the_grid() {
        let bounds = Box3::from_min_and_shape(Vec3A::ZERO, Vec3A::new(10.0, 5.0, 3.0));
        let grid = SampleGrid3::from_bounds(&bounds, 20).unwrap();
        let renderer = PartitionRenderer::new(MarchingCubesUniform::new(20).unwrap(), [2, 1, 0])
            .with_overlap_cells(0);
        let parts = renderer.partitions(&grid);
        assert_eq!(parts.len(), 6);
        let total: i32 = parts.iter().map(|p| p.cells.x * p.cells.y * p.cells.z).sum();
        assert_eq!(total, grid.cells.x * grid.cells.y * grid.cells.z);
        for p in &parts {
            assert_eq!(p.origin, grid.origin);
            assert!((p.offset + p.cells).cmple(grid.cells).all());
        }
    }

    #[test]
    fn overlap_extends_all_but_last() {
        assert_eq!(axis_ranges(10, 2, 1), vec![(0, 4), (3, 7), (6, 10)]);
        assert_eq!(axis_ranges(2, 4, 1), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn merge_drops_duplicates_and_slivers() {
        let a = Vec3A::ZERO;
        let b = Vec3A::X;
        let c = Vec3A::Y;
        let tris = [
            Triangle3::new(a, b, c),
            Triangle3::new(b, c, a),
            Triangle3::new(a, b + Vec3A::splat(1e-6), c),
            Triangle3::new(a, c, b),
            Triangle3::new(a, a + Vec3A::splat(1e-6), c),
        ];
        let merged = merge_triangles(tris, 1e-4);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], Triangle3::new(a, b, c));
        assert_eq!(merged[1], Triangle3::new(a, c, b));
    }

    #[test]
    fn rejects_negative_merge_epsilon() {
        let renderer = PartitionRenderer::new(MarchingCubesUniform::new(8).unwrap(), [1, 1, 1]);
        assert_eq!(
            renderer.with_merge_epsilon(-1.0).unwrap_err(),
            ConfigError::InvalidMergeEpsilon(-1.0)
        );
    }
}
