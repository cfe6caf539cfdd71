use crate::bounds::Box3;

use glam::Vec3A;
use nalgebra::{linalg::SVD, Matrix3, Vector3};
use std::ops::{Add, AddAssign};

/// Quadric Error Function
///
/// `x^T A x - 2 b^T x + c`, accumulated from Hermite samples (surface point
/// and normal). Minimized with a truncated SVD about the mass point, which
/// keeps the solution near the samples along rank-deficient directions
/// (flat regions and edges).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Qef {
    a00: f32,
    a01: f32,
    a02: f32,
    a11: f32,
    a12: f32,
    a22: f32,

    atb: Vec3A,
    btb: f32,

    mass_point_sum: Vec3A,
    count: u32,
}

impl Qef {
    /// Adds the plane through `p` with normal `n`. `n` is normalized first.
    pub fn add_plane(&mut self, p: Vec3A, n: Vec3A) {
        let n = n.normalize_or_zero();
        let d = n.dot(p);
        let [[a00, a01, a02], [_, a11, a12], [_, _, a22]] = self_outer_product(n.to_array());
        self.a00 += a00;
        self.a01 += a01;
        self.a02 += a02;
        self.a11 += a11;
        self.a12 += a12;
        self.a22 += a22;
        self.atb += d * n;
        self.btb += d * d;
        self.mass_point_sum += p;
        self.count += 1;
    }

    pub fn merge(&mut self, other: &Qef) {
        self.a00 += other.a00;
        self.a01 += other.a01;
        self.a02 += other.a02;
        self.a11 += other.a11;
        self.a12 += other.a12;
        self.a22 += other.a22;
        self.atb += other.atb;
        self.btb += other.btb;
        self.mass_point_sum += other.mass_point_sum;
        self.count += other.count;
    }

    /// Number of samples added.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Average of the sample points, or the origin if there are none.
    pub fn mass_point(&self) -> Vec3A {
        if self.count == 0 {
            Vec3A::ZERO
        } else {
            self.mass_point_sum / self.count as f32
        }
    }

    #[inline]
    fn ata_mul(&self, p: Vec3A) -> Vec3A {
        Vec3A::new(
            self.a00 * p[0] + self.a01 * p[1] + self.a02 * p[2],
            self.a01 * p[0] + self.a11 * p[1] + self.a12 * p[2],
            self.a02 * p[0] + self.a12 * p[1] + self.a22 * p[2],
        )
    }

    /// Residual L2 error. `x^T A x - 2 b^T x + c`
    pub fn error(&self, p: Vec3A) -> f32 {
        p.dot(self.ata_mul(p)) - 2.0 * p.dot(self.atb) + self.btb
    }

    /// Minimizer of the quadric. Singular values below
    /// `rank_tolerance * σ_max` are treated as zero.
    pub fn solve(&self, rank_tolerance: f32) -> Vec3A {
        if self.count == 0 {
            return Vec3A::ZERO;
        }
        let mass_point = self.mass_point();
        let rhs = self.atb - self.ata_mul(mass_point);

        let ata = Matrix3::new(
            self.a00, self.a01, self.a02, //
            self.a01, self.a11, self.a12, //
            self.a02, self.a12, self.a22,
        );
        let Some(svd) = SVD::try_new(ata, true, true, f32::EPSILON, 0) else {
            tracing::trace!(?mass_point, "QEF SVD did not converge");
            return mass_point;
        };
        let sigma_max = svd.singular_values.max();
        if !(sigma_max > f32::EPSILON) {
            tracing::trace!(?mass_point, "QEF is rank deficient");
            return mass_point;
        }

        match svd.solve(&Vector3::new(rhs.x, rhs.y, rhs.z), rank_tolerance * sigma_max) {
            Ok(x) => mass_point + Vec3A::new(x[0], x[1], x[2]),
            Err(e) => {
                tracing::trace!(?mass_point, e, "QEF solve failed");
                mass_point
            }
        }
    }

    /// Like [`Qef::solve`], but returns the mass point when the minimizer
    /// lies outside `bounds`.
    pub fn solve_bounded(&self, rank_tolerance: f32, bounds: &Box3) -> Vec3A {
        let p = self.solve(rank_tolerance);
        let min = bounds.minimum;
        let max = bounds.minimum + bounds.shape;
        if p.cmpge(min).all() && p.cmple(max).all() {
            p
        } else {
            self.mass_point()
        }
    }
}

impl Add for Qef {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.merge(&rhs);
        self
    }
}

impl AddAssign<&Qef> for Qef {
    fn add_assign(&mut self, rhs: &Qef) {
        self.merge(rhs);
    }
}

fn self_outer_product([a, b, c]: [f32; 3]) -> [[f32; 3]; 3] {
    [
        [a * a, a * b, a * c],
        [a * b, b * b, b * c],
        [a * c, b * c, c * c],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-3;

    fn corner_qef(corner: Vec3A) -> Qef {
        let mut qef = Qef::default();
        qef.add_plane(corner + Vec3A::new(0.0, 0.3, 0.1), Vec3A::X);
        qef.add_plane(corner + Vec3A::new(0.2, 0.0, 0.4), Vec3A::Y);
        qef.add_plane(corner + Vec3A::new(0.1, 0.2, 0.0), Vec3A::Z);
        qef
    }

    #[test]
    fn three_planes_meet_at_corner() {
        let corner = Vec3A::new(1.0, 2.0, 3.0);
        let qef = corner_qef(corner);
        let p = qef.solve(TOL);
        assert!((p - corner).length() < 1e-4);
        assert!(qef.error(p).abs() < 1e-4);
    }

    #[test]
    fn flat_region_stays_near_mass_point() {
        let mut qef = Qef::default();
        qef.add_plane(Vec3A::new(0.0, 0.0, 1.0), Vec3A::Z);
        qef.add_plane(Vec3A::new(2.0, 0.0, 1.0), Vec3A::Z);
        qef.add_plane(Vec3A::new(1.0, 3.0, 1.0), Vec3A::Z * 5.0);
        let p = qef.solve(TOL);
        assert!((p - Vec3A::new(1.0, 1.0, 1.0)).length() < 1e-4);
    }

    #[test]
    fn empty_qef_solves_to_origin() {
        assert_eq!(Qef::default().solve(TOL), Vec3A::ZERO);
        assert_eq!(Qef::default().mass_point(), Vec3A::ZERO);
    }

    #[test]
    fn merge_matches_sequential_adds() {
        let samples = [
            (Vec3A::new(0.1, 0.2, 0.3), Vec3A::new(1.0, 0.2, 0.0)),
            (Vec3A::new(0.4, 0.1, 0.3), Vec3A::new(0.0, 1.0, 0.3)),
            (Vec3A::new(0.2, 0.5, 0.1), Vec3A::new(0.1, 0.1, 1.0)),
            (Vec3A::new(0.3, 0.3, 0.3), Vec3A::new(0.5, 0.5, 0.5)),
        ];
        let mut all = Qef::default();
        let mut left = Qef::default();
        let mut right = Qef::default();
        for (i, &(p, n)) in samples.iter().enumerate() {
            all.add_plane(p, n);
            if i < 2 {
                left.add_plane(p, n);
            } else {
                right.add_plane(p, n);
            }
        }
        let merged = left + right;
        assert_eq!(merged.count(), all.count());
        assert!((merged.mass_point() - all.mass_point()).length() < 1e-6);
        assert!((merged.solve(TOL) - all.solve(TOL)).length() < 1e-4);
    }

    #[test]
    fn bounded_solve_falls_back_to_mass_point() {
        // Two nearly parallel planes meet far away from the samples.
        let mut qef = Qef::default();
        qef.add_plane(Vec3A::new(0.0, 0.5, 0.5), Vec3A::new(1.0, 0.05, 0.0));
        qef.add_plane(Vec3A::new(0.1, 0.5, 0.5), Vec3A::new(1.0, -0.05, 0.0));
        let cell = Box3::from_min_and_shape(Vec3A::new(-0.5, 0.0, 0.0), Vec3A::ONE);
        let unbounded = qef.solve(TOL);
        assert!(unbounded.y > 1.0 || unbounded.y < 0.0);
        assert_eq!(qef.solve_bounded(TOL, &cell), qef.mass_point());
    }
}
