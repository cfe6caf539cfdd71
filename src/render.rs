use crate::{
    bounds::{SampleGrid2, SampleGrid3},
    error::{ConfigError, RenderError},
    mesh::{Line2, Triangle3},
    sdf::{Sdf2, Sdf3},
};

use crossbeam_channel::{unbounded, Sender};

/// Turns a 3D signed distance field into triangles.
pub trait Render3: Send + Sync {
    /// Number of cells along the longest axis of the bounding box.
    fn mesh_cells(&self) -> u32;

    fn grid(&self, sdf: &dyn Sdf3) -> Result<SampleGrid3, ConfigError> {
        SampleGrid3::from_bounds(&sdf.bounding_box(), self.mesh_cells())
    }

    /// Renders the cells of `grid`, which may be a sub-grid of
    /// [`Render3::grid`].
    fn render_grid(
        &self,
        sdf: &dyn Sdf3,
        grid: &SampleGrid3,
        output: &Sender<Vec<Triangle3>>,
    ) -> Result<(), RenderError>;

    fn render(&self, sdf: &dyn Sdf3, output: &Sender<Vec<Triangle3>>) -> Result<(), RenderError> {
        let grid = self.grid(sdf)?;
        self.render_grid(sdf, &grid, output)
    }

    /// e.g. `"65x65x65, resolution 0.25"`
    fn info(&self, sdf: &dyn Sdf3) -> Result<String, ConfigError> {
        Ok(self.grid(sdf)?.describe())
    }

    /// Whether renders of neighboring sub-grids place identical vertices on
    /// the faces they share, so that welding closes the seam.
    fn seams_match(&self) -> bool {
        true
    }
}

/// Turns a 2D signed distance field into line segments.
pub trait Render2: Send + Sync {
    fn mesh_cells(&self) -> u32;

    fn grid(&self, sdf: &dyn Sdf2) -> Result<SampleGrid2, ConfigError> {
        SampleGrid2::from_bounds(&sdf.bounding_box(), self.mesh_cells())
    }

    fn render_grid(
        &self,
        sdf: &dyn Sdf2,
        grid: &SampleGrid2,
        output: &Sender<Vec<Line2>>,
    ) -> Result<(), RenderError>;

    fn render(&self, sdf: &dyn Sdf2, output: &Sender<Vec<Line2>>) -> Result<(), RenderError> {
        let grid = self.grid(sdf)?;
        self.render_grid(sdf, &grid, output)
    }

    fn info(&self, sdf: &dyn Sdf2) -> Result<String, ConfigError> {
        Ok(self.grid(sdf)?.describe())
    }
}

/// Sends a non-empty batch to the caller's sink.
pub fn send_batch<T>(output: &Sender<Vec<T>>, batch: Vec<T>) -> Result<(), RenderError> {
    if batch.is_empty() {
        return Ok(());
    }
    output.send(batch).map_err(|_| RenderError::OutputClosed)
}

/// Renders into a single vector of triangles.
pub fn to_triangles<R: Render3 + ?Sized>(
    renderer: &R,
    sdf: &dyn Sdf3,
) -> Result<Vec<Triangle3>, RenderError> {
    let (tx, rx) = unbounded();
    renderer.render(sdf, &tx)?;
    drop(tx);
    Ok(rx.into_iter().flatten().collect())
}

/// Renders into a single vector of line segments.
pub fn to_lines<R: Render2 + ?Sized>(
    renderer: &R,
    sdf: &dyn Sdf2,
) -> Result<Vec<Line2>, RenderError> {
    let (tx, rx) = unbounded();
    renderer.render(sdf, &tx)?;
    drop(tx);
    Ok(rx.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bounds::Box3, marching_cubes::MarchingCubesUniform, sdf::FnSdf};

    use glam::Vec3A;

    #[test]
    fn info_describes_grid() {
        let sdf = FnSdf::new(
            Box3::from_min_and_shape(Vec3A::splat(-8.0), Vec3A::splat(16.0)),
            |p: Vec3A| p.length() - 8.0,
        );
        let renderer = MarchingCubesUniform::new(64).unwrap();
        assert_eq!(renderer.info(&sdf).unwrap(), "65x65x65, resolution 0.25");
    }

    #[test]
    fn closed_output_is_reported() {
        let sdf = FnSdf::new(
            Box3::from_min_and_shape(Vec3A::splat(-1.0), Vec3A::splat(2.0)),
            |p: Vec3A| p.length() - 0.5,
        );
        let renderer = MarchingCubesUniform::new(8).unwrap();
        let (tx, rx) = unbounded();
        drop(rx);
        assert_eq!(renderer.render(&sdf, &tx), Err(RenderError::OutputClosed));
    }
}
