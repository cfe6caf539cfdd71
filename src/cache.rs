use crate::{
    bounds::{Lattice, SampleGrid},
    error::SdfError,
    sdf::Sdf,
};

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

/// Memoizes SDF samples on a lattice for the duration of one render pass.
///
/// Lattice coordinates are local to `grid`, subdivided `subdivisions` times,
/// so a coordinate `c` sits at `grid.subdivided_position(c, subdivisions)`.
pub struct DistanceCache<'a, L: Lattice, S: ?Sized> {
    sdf: &'a S,
    grid: SampleGrid<L>,
    subdivisions: u32,
    values: RwLock<HashMap<L, f32>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }
}

impl<'a, L, S> DistanceCache<'a, L, S>
where
    L: Lattice,
    S: Sdf<L::Point> + ?Sized,
{
    pub fn new(sdf: &'a S, grid: SampleGrid<L>, subdivisions: u32) -> Self {
        Self {
            sdf,
            grid,
            subdivisions,
            values: RwLock::new(HashMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn sdf(&self) -> &'a S {
        self.sdf
    }

    pub fn grid(&self) -> &SampleGrid<L> {
        &self.grid
    }

    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    /// Lattice spacing in world units.
    pub fn unit(&self) -> f32 {
        self.grid.resolution / (1 << self.subdivisions) as f32
    }

    #[inline]
    pub fn position(&self, coord: L) -> L::Point {
        self.grid.subdivided_position(coord, self.subdivisions)
    }

    pub fn get_or_evaluate(&self, coord: L) -> Result<f32, SdfError> {
        if let Some(&d) = self
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&coord)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(d);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let d = self.sdf.evaluate(self.position(coord))?;
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(coord, d);
        Ok(d)
    }

    pub fn len(&self) -> usize {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bounds::{Box3, SampleGrid3},
        sdf::FnSdf,
    };

    use glam::{IVec3, Vec3A};

    #[test]
    fn hits_skip_evaluation() {
        let calls = AtomicUsize::new(0);
        let bounds = Box3::from_min_and_shape(Vec3A::splat(-1.0), Vec3A::splat(2.0));
        let sdf = FnSdf::new(bounds, |p: Vec3A| {
            calls.fetch_add(1, Ordering::Relaxed);
            p.length() - 0.5
        });
        let grid = SampleGrid3::from_bounds(&bounds, 8).unwrap();
        let cache = DistanceCache::new(&sdf, grid, 1);

        let a = cache.get_or_evaluate(IVec3::new(3, 4, 5)).unwrap();
        let b = cache.get_or_evaluate(IVec3::new(3, 4, 5)).unwrap();
        assert_eq!(a, b);
        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                entries: 1
            }
        );
        assert_eq!(cache.stats().hit_rate(), 0.5);
    }

    #[test]
    fn subdivided_coordinates_line_up_with_grid() {
        let bounds = Box3::from_min_and_shape(Vec3A::ZERO, Vec3A::splat(4.0));
        let sdf = FnSdf::new(bounds, |p: Vec3A| p.x);
        let grid = SampleGrid3::from_bounds(&bounds, 4).unwrap();
        let cache = DistanceCache::new(&sdf, grid, 1);
        assert_eq!(cache.unit(), grid.resolution * 0.5);
        assert_eq!(cache.position(IVec3::new(4, 2, 0)), grid.position(IVec3::new(2, 1, 0)));
    }
}
