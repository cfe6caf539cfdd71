use crate::error::SdfError;

use glam::{Vec2, Vec3A};
use ilattice::extent::Extent;

/// A signed distance field: negative inside, positive outside, zero on the
/// boundary.
///
/// Implementors are evaluated concurrently from many threads, so evaluation
/// must not mutate shared state.
pub trait Sdf<P>: Sync {
    fn evaluate(&self, p: P) -> Result<f32, SdfError>;

    /// Region outside of which the field is assumed to be strictly positive.
    fn bounding_box(&self) -> Extent<P>;
}

pub trait Sdf3: Sdf<Vec3A> {}
impl<T: Sdf<Vec3A> + ?Sized> Sdf3 for T {}

pub trait Sdf2: Sdf<Vec2> {}
impl<T: Sdf<Vec2> + ?Sized> Sdf2 for T {}

impl<P, T: Sdf<P> + ?Sized> Sdf<P> for &T {
    fn evaluate(&self, p: P) -> Result<f32, SdfError> {
        (**self).evaluate(p)
    }

    fn bounding_box(&self) -> Extent<P> {
        (**self).bounding_box()
    }
}

/// Points that can be reported in an [`SdfError`].
pub trait SamplePoint: Copy + Send + Sync {
    fn to_xyz(self) -> [f32; 3];
}

impl SamplePoint for Vec3A {
    fn to_xyz(self) -> [f32; 3] {
        self.to_array()
    }
}

impl SamplePoint for Vec2 {
    fn to_xyz(self) -> [f32; 3] {
        [self.x, self.y, 0.0]
    }
}

fn check_finite<P: SamplePoint>(p: P, d: f32) -> Result<f32, SdfError> {
    if d.is_finite() {
        Ok(d)
    } else {
        let [x, y, z] = p.to_xyz();
        Err(SdfError::NonFinite { x, y, z })
    }
}

/// An infallible distance closure with an explicit bounding box.
///
/// NaN or infinite distances are still reported as [`SdfError::NonFinite`].
#[derive(Clone)]
pub struct FnSdf<P, F> {
    f: F,
    bounds: Extent<P>,
}

impl<P, F> FnSdf<P, F> {
    pub fn new(bounds: Extent<P>, f: F) -> Self {
        Self { f, bounds }
    }
}

impl<P, F> Sdf<P> for FnSdf<P, F>
where
    P: SamplePoint,
    Extent<P>: Copy + Sync,
    F: Fn(P) -> f32 + Sync,
{
    fn evaluate(&self, p: P) -> Result<f32, SdfError> {
        check_finite(p, (self.f)(p))
    }

    fn bounding_box(&self) -> Extent<P> {
        self.bounds
    }
}

/// A fallible distance closure with an explicit bounding box.
#[derive(Clone)]
pub struct TryFnSdf<P, F> {
    f: F,
    bounds: Extent<P>,
}

impl<P, F> TryFnSdf<P, F> {
    pub fn new(bounds: Extent<P>, f: F) -> Self {
        Self { f, bounds }
    }
}

impl<P, F> Sdf<P> for TryFnSdf<P, F>
where
    P: SamplePoint,
    Extent<P>: Copy + Sync,
    F: Fn(P) -> Result<f32, SdfError> + Sync,
{
    fn evaluate(&self, p: P) -> Result<f32, SdfError> {
        check_finite(p, (self.f)(p)?)
    }

    fn bounding_box(&self) -> Extent<P> {
        self.bounds
    }
}

/// Reports a different bounding box for another field.
pub struct BoundedSdf<'a, P, S: ?Sized> {
    inner: &'a S,
    bounds: Extent<P>,
}

impl<'a, P, S: ?Sized> BoundedSdf<'a, P, S> {
    pub fn new(inner: &'a S, bounds: Extent<P>) -> Self {
        Self { inner, bounds }
    }
}

impl<'a, P, S> Sdf<P> for BoundedSdf<'a, P, S>
where
    Extent<P>: Copy + Sync,
    S: Sdf<P> + ?Sized,
{
    fn evaluate(&self, p: P) -> Result<f32, SdfError> {
        self.inner.evaluate(p)
    }

    fn bounding_box(&self) -> Extent<P> {
        self.bounds
    }
}

/// Gradient by central differences, `delta` apart on each axis.
pub fn central_gradient<S: Sdf3 + ?Sized>(
    sdf: &S,
    p: Vec3A,
    delta: f32,
) -> Result<Vec3A, SdfError> {
    let h = 0.5 * delta;
    let dx = Vec3A::new(h, 0.0, 0.0);
    let dy = Vec3A::new(0.0, h, 0.0);
    let dz = Vec3A::new(0.0, 0.0, h);
    Ok(Vec3A::new(
        sdf.evaluate(p + dx)? - sdf.evaluate(p - dx)?,
        sdf.evaluate(p + dy)? - sdf.evaluate(p - dy)?,
        sdf.evaluate(p + dz)? - sdf.evaluate(p - dz)?,
    ) / delta)
}
