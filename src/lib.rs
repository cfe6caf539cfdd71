//! Isosurface extraction from signed distance fields
//!
//! Turns a signed distance function (negative inside, positive outside) into
//! a triangle mesh (3D) or a set of line segments (2D).
//!
//! # Renderers
//!
//! - [`MarchingCubesUniform`]: marching cubes over every cell of a dense grid
//! - [`MarchingCubesOctree`]: marching cubes over the cells an adaptive
//!   octree cannot rule out with the distance bound
//! - [`DualContour`]: octree dual contouring with QEF vertex placement and
//!   optional simplification
//! - [`PartitionRenderer`]: splits the grid and runs any of the above on
//!   each part in parallel
//! - [`MarchingSquaresUniform`] and [`MarchingSquaresQuadtree`]: the 2D
//!   counterparts of the marching cubes renderers
//!
//! Renderers stream batches of [`Triangle3`] (or [`Line2`]) into a
//! [`crossbeam_channel::Sender`]. Triangles are wound counter-clockwise when
//! seen from outside the surface.
//!
//! # References
//!
//! - William E. Lorensen, Harvey E. Cline ["Marching Cubes: A High Resolution
//!   3D Surface Construction
//!   Algorithm"](https://dl.acm.org/doi/10.1145/37402.37422)
//! - Tao Ju, Frank Losasso, Scott Schaefer, Joe Warren ["Dual Contouring of
//!   Hermite Data"](https://www.cs.rice.edu/~jwarren/papers/dualcontour.pdf)
//! - Philip Trettner, Leif Kobbelt ["Fast and Robust QEF Minimization using
//!   Probabilistic
//!   Quadrics"](https://www.graphics.rwth-aachen.de/publication/03308/)

mod bounds;
mod cache;
mod cell_octree;
mod contour_octree;
mod dual_contour;
mod error;
mod mesh;
mod partition;
mod qef;
mod render;
mod sampler;
mod sdf;

pub mod marching_cubes;
pub mod marching_squares;
pub mod marching_tables;
pub mod tables;

pub use bounds::*;
pub use cache::*;
pub use cell_octree::*;
pub use dual_contour::*;
pub use error::*;
pub use marching_cubes::{MarchingCubesOctree, MarchingCubesUniform};
pub use marching_squares::{MarchingSquaresQuadtree, MarchingSquaresUniform};
pub use mesh::*;
pub use partition::*;
pub use qef::*;
pub use render::*;
pub use sampler::*;
pub use sdf::*;
