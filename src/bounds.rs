use crate::error::ConfigError;

use glam::{IVec2, IVec3, Vec2, Vec3A};
use ilattice::extent::Extent;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Mul, Sub};

pub type Box2 = Extent<Vec2>;
pub type Box3 = Extent<Vec3A>;

/// Bounding boxes are grown by this factor before sampling so that the
/// surface never lies exactly on the outer boundary.
pub const BOUNDS_SCALE: f32 = 1.01;

/// Integer coordinates on a 2D or 3D sampling lattice.
pub trait Lattice:
    Copy + Debug + Eq + Hash + Send + Sync + Add<Output = Self> + Mul<i32, Output = Self>
{
    type Point: Copy
        + Debug
        + Send
        + Sync
        + Add<Output = Self::Point>
        + Sub<Output = Self::Point>
        + Mul<f32, Output = Self::Point>;

    /// 4 for squares, 8 for cubes.
    const NUM_CORNERS: usize;

    fn splat(v: i32) -> Self;

    /// Unit offset of corner `i`, in the same order as the marching tables.
    fn corner(i: usize) -> Self;

    fn to_point(self) -> Self::Point;

    fn ceil_from(p: Self::Point) -> Self;

    fn max_element(self) -> i32;

    fn all_lt(self, other: Self) -> bool;

    fn point_max_element(p: Self::Point) -> f32;

    fn point_is_finite(p: Self::Point) -> bool;
}

impl Lattice for IVec3 {
    type Point = Vec3A;

    const NUM_CORNERS: usize = 8;

    #[inline]
    fn splat(v: i32) -> Self {
        IVec3::splat(v)
    }

    #[inline]
    fn corner(i: usize) -> Self {
        IVec3::from_array(crate::marching_tables::MC_CORNERS[i])
    }

    #[inline]
    fn to_point(self) -> Vec3A {
        Vec3A::new(self.x as f32, self.y as f32, self.z as f32)
    }

    #[inline]
    fn ceil_from(p: Vec3A) -> Self {
        let c = p.ceil();
        IVec3::new(c.x as i32, c.y as i32, c.z as i32)
    }

    #[inline]
    fn max_element(self) -> i32 {
        IVec3::max_element(self)
    }

    #[inline]
    fn all_lt(self, other: Self) -> bool {
        self.cmplt(other).all()
    }

    #[inline]
    fn point_max_element(p: Vec3A) -> f32 {
        p.max_element()
    }

    #[inline]
    fn point_is_finite(p: Vec3A) -> bool {
        p.is_finite()
    }
}

impl Lattice for IVec2 {
    type Point = Vec2;

    const NUM_CORNERS: usize = 4;

    #[inline]
    fn splat(v: i32) -> Self {
        IVec2::splat(v)
    }

    #[inline]
    fn corner(i: usize) -> Self {
        IVec2::from_array(crate::marching_tables::MS_CORNERS[i])
    }

    #[inline]
    fn to_point(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    #[inline]
    fn ceil_from(p: Vec2) -> Self {
        let c = p.ceil();
        IVec2::new(c.x as i32, c.y as i32)
    }

    #[inline]
    fn max_element(self) -> i32 {
        IVec2::max_element(self)
    }

    #[inline]
    fn all_lt(self, other: Self) -> bool {
        self.cmplt(other).all()
    }

    #[inline]
    fn point_max_element(p: Vec2) -> f32 {
        p.max_element()
    }

    #[inline]
    fn point_is_finite(p: Vec2) -> bool {
        p.is_finite()
    }
}

pub fn bounds_center<P>(bounds: &Extent<P>) -> P
where
    P: Copy + Add<Output = P> + Mul<f32, Output = P>,
{
    bounds.minimum + bounds.shape * 0.5
}

pub fn scale_about_center<P>(bounds: &Extent<P>, factor: f32) -> Extent<P>
where
    P: Copy + Add<Output = P> + Sub<Output = P> + Mul<f32, Output = P>,
{
    let shape = bounds.shape * factor;
    Extent {
        minimum: bounds_center(bounds) - shape * 0.5,
        shape,
    }
}

/// A regular lattice of cubic (square) cells.
///
/// Lattice index `g` (global) sits at `origin + g * resolution`. A grid
/// addresses its own cells with local indices `i`, where `g = offset + i`.
/// Sub-grids share `origin` and `resolution` with their parent so that
/// shared lattice points have bit-identical positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleGrid<L: Lattice> {
    pub origin: L::Point,
    pub resolution: f32,
    pub offset: L,
    pub cells: L,
}

pub type SampleGrid2 = SampleGrid<IVec2>;
pub type SampleGrid3 = SampleGrid<IVec3>;

impl<L: Lattice> SampleGrid<L> {
    /// Covers `bounds` (grown by [`BOUNDS_SCALE`]) with cells sized so that
    /// the longest axis of `bounds` spans `mesh_cells` cells.
    pub fn from_bounds(bounds: &Extent<L::Point>, mesh_cells: u32) -> Result<Self, ConfigError> {
        if mesh_cells == 0 {
            return Err(ConfigError::ZeroMeshCells);
        }
        let longest = L::point_max_element(bounds.shape);
        let shortest = -L::point_max_element(bounds.shape * -1.0);
        if !L::point_is_finite(bounds.shape) || !(shortest > 0.0) {
            return Err(ConfigError::DegenerateBounds);
        }
        let resolution = longest / mesh_cells as f32;
        let expanded = scale_about_center(bounds, BOUNDS_SCALE);
        let cells = L::ceil_from(expanded.shape * (1.0 / resolution));
        let origin = bounds_center(bounds) - cells.to_point() * (0.5 * resolution);
        Ok(Self {
            origin,
            resolution,
            offset: L::splat(0),
            cells,
        })
    }

    /// World position of local lattice index `local`.
    #[inline]
    pub fn position(&self, local: L) -> L::Point {
        self.origin + (self.offset + local).to_point() * self.resolution
    }

    /// World position of `local`, expressed in units of `resolution / 2^subdivisions`.
    #[inline]
    pub fn subdivided_position(&self, local: L, subdivisions: u32) -> L::Point {
        let scale = 1 << subdivisions;
        let unit = self.resolution / scale as f32;
        self.origin + (self.offset * scale + local).to_point() * unit
    }

    pub fn bounds(&self) -> Extent<L::Point> {
        Extent {
            minimum: self.position(L::splat(0)),
            shape: self.cells.to_point() * self.resolution,
        }
    }

    /// A grid over `cells` cells starting at local index `offset` of this grid.
    pub fn sub_grid(&self, offset: L, cells: L) -> Self {
        Self {
            origin: self.origin,
            resolution: self.resolution,
            offset: self.offset + offset,
            cells,
        }
    }

    pub fn contains_cell(&self, local: L) -> bool {
        local.all_lt(self.cells)
    }
}

impl SampleGrid3 {
    pub fn describe(&self) -> String {
        format!(
            "{}x{}x{}, resolution {:.2}",
            self.cells.x, self.cells.y, self.cells.z, self.resolution
        )
    }
}

impl SampleGrid2 {
    pub fn describe(&self) -> String {
        format!(
            "{}x{}, resolution {:.2}",
            self.cells.x, self.cells.y, self.resolution
        )
    }
}
