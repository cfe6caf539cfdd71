use crate::{
    bounds::SampleGrid3,
    cache::DistanceCache,
    cell_octree::{CellOctree, OctreeSettings},
    error::{ConfigError, RenderError, SdfError},
    mesh::{IndexedMesh, Triangle3},
    render::{send_batch, Render3},
    sdf::Sdf3,
};
use crossbeam_channel::Sender;

/// Octree dual contouring with QEF vertex placement.
///
/// Reproduces sharp features from Hermite data, and can optionally collapse
/// regions whose merged QEF error stays within a threshold.
#[derive(Clone, Debug)]
pub struct DualContour {
    mesh_cells: u32,
    simplify: Option<f32>,
    settings: OctreeSettings,
}

impl DualContour {
    pub fn new(mesh_cells: u32) -> Result<Self, ConfigError> {
        if mesh_cells == 0 {
            return Err(ConfigError::ZeroMeshCells);
        }
        Ok(Self {
            mesh_cells,
            simplify: None,
            settings: OctreeSettings::default(),
        })
    }

    /// Collapse octree nodes whose QEF error is at most `threshold`.
    ///
    /// Collapsing depends on the whole octree, so sub-grids simplified on
    /// their own no longer agree along shared faces. A [`PartitionRenderer`]
    /// around a simplifying renderer leaves open seams.
    ///
    /// [`PartitionRenderer`]: crate::PartitionRenderer
    pub fn with_simplify(mut self, threshold: f32) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        self.simplify = Some(threshold);
        Ok(self)
    }

    /// Singular values below `rank_tolerance * σ_max` are dropped when
    /// solving QEFs.
    pub fn with_rank_tolerance(mut self, rank_tolerance: f32) -> Result<Self, ConfigError> {
        if !(0.0..1.0).contains(&rank_tolerance) {
            return Err(ConfigError::InvalidRankTolerance(rank_tolerance));
        }
        self.settings.rank_tolerance = rank_tolerance;
        Ok(self)
    }

    pub fn with_lock_vertices(mut self, lock_vertices: bool) -> Self {
        self.settings.lock_vertices = lock_vertices;
        self
    }

    pub fn settings(&self) -> &OctreeSettings {
        &self.settings
    }

    pub fn simplify_threshold(&self) -> Option<f32> {
        self.simplify
    }

    /// Builds (and optionally simplifies) the octree for the cells of `grid`.
    pub fn octree(&self, sdf: &dyn Sdf3, grid: &SampleGrid3) -> Result<CellOctree, SdfError> {
        let cache = DistanceCache::new(sdf, *grid, 0);
        let mut octree = CellOctree::build(&cache, self.settings)?;
        let leaves = octree.leaf_ids().len();
        if let Some(threshold) = self.simplify {
            octree.simplify(threshold);
        }

        let stats = cache.stats();
        tracing::debug!(
            grid = %grid.describe(),
            leaves,
            vertices = octree.leaf_ids().len(),
            nodes = octree.num_nodes(),
            cache_entries = stats.entries,
            hit_rate = stats.hit_rate(),
            "dual contouring octree"
        );
        Ok(octree)
    }

    /// Renders the whole field into a mesh with one vertex per octree leaf.
    pub fn indexed_mesh(&self, sdf: &dyn Sdf3) -> Result<IndexedMesh, RenderError> {
        let grid = self.grid(sdf)?;
        Ok(self.octree(sdf, &grid)?.dual_contour())
    }
}

impl Render3 for DualContour {
    fn mesh_cells(&self) -> u32 {
        self.mesh_cells
    }

    fn seams_match(&self) -> bool {
        self.simplify.is_none()
    }

    fn render_grid(
        &self,
        sdf: &dyn Sdf3,
        grid: &SampleGrid3,
        output: &Sender<Vec<Triangle3>>,
    ) -> Result<(), RenderError> {
        let mesh = self.octree(sdf, grid)?.dual_contour();
        let triangles: Vec<Triangle3> = mesh
            .triangles()
            .filter(|t| !t.is_degenerate(0.0))
            .collect();
        send_batch(output, triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_settings() {
        assert_eq!(DualContour::new(0).unwrap_err(), ConfigError::ZeroMeshCells);
        let dc = DualContour::new(8).unwrap();
        assert_eq!(
            dc.clone().with_rank_tolerance(1.0).unwrap_err(),
            ConfigError::InvalidRankTolerance(1.0)
        );
        assert_eq!(
            dc.clone().with_simplify(-1.0).unwrap_err(),
            ConfigError::InvalidThreshold(-1.0)
        );
        assert!(dc.clone().with_simplify(f32::NAN).is_err());
        let dc = dc.with_rank_tolerance(0.1).unwrap().with_lock_vertices(true);
        assert_eq!(dc.settings().rank_tolerance, 0.1);
        assert!(dc.settings().lock_vertices);
    }

    #[test]
    fn simplification_breaks_seam_matching() {
        let dc = DualContour::new(8).unwrap();
        assert!(dc.seams_match());
        assert!(!dc.with_simplify(0.0).unwrap().seams_match());
    }
}
