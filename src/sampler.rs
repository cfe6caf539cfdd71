use crate::{bounds::Lattice, cache::DistanceCache, error::SdfError, sdf::Sdf};

/// A square or cube of `2^level` lattice units with its minimum corner at
/// `origin`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SamplerNode<L> {
    pub origin: L,
    pub level: u32,
}

impl<L: Lattice> SamplerNode<L> {
    pub fn new(origin: L, level: u32) -> Self {
        Self { origin, level }
    }

    #[inline]
    pub fn size(&self) -> i32 {
        1 << self.level
    }

    /// Only defined for `level >= 1`, where the center is a lattice point.
    #[inline]
    pub fn center(&self) -> L {
        self.origin + L::splat(self.size() / 2)
    }

    #[inline]
    pub fn corner(&self, i: usize) -> L {
        self.origin + L::corner(i) * self.size()
    }

    #[inline]
    pub fn child(&self, i: usize) -> Self {
        Self {
            origin: self.origin + L::corner(i) * (self.size() / 2),
            level: self.level - 1,
        }
    }
}

/// Hierarchical subdivision of a sample grid that skips any node the
/// distance field proves is free of the surface.
///
/// A node is empty when the distance at its center is at least half of its
/// diagonal: no point of the node can be closer to the surface than that.
pub struct AdaptiveSampler<'c, 'a, L: Lattice, S: ?Sized> {
    cache: &'c DistanceCache<'a, L, S>,
    half_diagonals: Vec<f32>,
    root_level: u32,
    leaf_level: u32,
    limit: L,
}

impl<'c, 'a, L, S> AdaptiveSampler<'c, 'a, L, S>
where
    L: Lattice,
    S: Sdf<L::Point> + ?Sized,
{
    /// `leaf_level` is the level handed to the extractor. The lattice of
    /// `cache` must be fine enough that a grid cell is `2^leaf_level` units.
    pub fn new(cache: &'c DistanceCache<'a, L, S>, leaf_level: u32) -> Self {
        let units_per_cell = 1 << cache.subdivisions();
        let extent = cache.grid().cells.max_element() * units_per_cell;
        let mut root_level = leaf_level;
        while (1 << root_level) < extent {
            root_level += 1;
        }

        let dimensions = L::NUM_CORNERS.trailing_zeros() as f32;
        let unit = cache.unit();
        let half_diagonals = (0..=root_level)
            .map(|level| 0.5 * dimensions.sqrt() * (1 << level) as f32 * unit)
            .collect();

        Self {
            cache,
            half_diagonals,
            root_level,
            leaf_level,
            limit: cache.grid().cells * units_per_cell,
        }
    }

    pub fn cache(&self) -> &'c DistanceCache<'a, L, S> {
        self.cache
    }

    pub fn root(&self) -> SamplerNode<L> {
        SamplerNode::new(L::splat(0), self.root_level)
    }

    pub fn levels(&self) -> usize {
        self.half_diagonals.len()
    }

    pub fn half_diagonal(&self, level: u32) -> f32 {
        self.half_diagonals[level as usize]
    }

    /// Nodes whose origin lies outside the grid's cells are never visited.
    #[inline]
    pub fn in_bounds(&self, node: &SamplerNode<L>) -> bool {
        node.origin.all_lt(self.limit)
    }

    /// Never reports a node containing the surface as empty. Level 0 nodes
    /// have no center sample and are never empty.
    pub fn is_empty(&self, node: &SamplerNode<L>) -> Result<bool, SdfError> {
        if node.level == 0 {
            return Ok(false);
        }
        let d = self.cache.get_or_evaluate(node.center())?;
        Ok(d.abs() >= self.half_diagonal(node.level))
    }

    /// Calls `visit` on every non-empty in-bounds node at the leaf level.
    pub fn visit_leaves<E>(
        &self,
        visit: &mut impl FnMut(SamplerNode<L>) -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: From<SdfError>,
    {
        self.visit_node(self.root(), visit)
    }

    fn visit_node<E>(
        &self,
        node: SamplerNode<L>,
        visit: &mut impl FnMut(SamplerNode<L>) -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: From<SdfError>,
    {
        if !self.in_bounds(&node) || self.is_empty(&node)? {
            return Ok(());
        }
        if node.level == self.leaf_level {
            return visit(node);
        }
        for i in 0..L::NUM_CORNERS {
            self.visit_node(node.child(i), visit)?;
        }
        Ok(())
    }
}
