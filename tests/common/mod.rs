#![allow(dead_code)]

use sdf_contour::{Box2, Box3, FnSdf, IndexedMesh, Line2, Sdf2, Sdf3, Triangle3};

use glam::{Vec2, Vec3A, Vec3Swizzles};
use std::collections::HashMap;

pub fn sphere(center: Vec3A, radius: f32) -> impl Sdf3 {
    FnSdf::new(
        Box3::from_min_and_shape(center - Vec3A::splat(radius), Vec3A::splat(2.0 * radius)),
        move |p: Vec3A| (p - center).length() - radius,
    )
}

pub fn cuboid(half_extents: Vec3A) -> impl Sdf3 {
    FnSdf::new(
        Box3::from_min_and_shape(-half_extents, 2.0 * half_extents),
        move |p: Vec3A| {
            let q = p.abs() - half_extents;
            q.max(Vec3A::ZERO).length() + q.max_element().min(0.0)
        },
    )
}

/// Torus around the Y axis.
pub fn torus(major: f32, minor: f32) -> impl Sdf3 {
    let outer = major + minor;
    FnSdf::new(
        Box3::from_min_and_shape(
            Vec3A::new(-outer, -minor, -outer),
            Vec3A::new(2.0 * outer, 2.0 * minor, 2.0 * outer),
        ),
        move |p: Vec3A| Vec2::new(p.xz().length() - major, p.y).length() - minor,
    )
}

/// Half space below the plane through `origin` with normal `normal`, cut to
/// `bounds`.
pub fn plane(bounds: Box3, origin: Vec3A, normal: Vec3A) -> impl Sdf3 {
    let normal = normal.normalize();
    FnSdf::new(bounds, move |p: Vec3A| (p - origin).dot(normal))
}

pub fn circle(center: Vec2, radius: f32) -> impl Sdf2 {
    FnSdf::new(
        Box2::from_min_and_shape(center - Vec2::splat(radius), Vec2::splat(2.0 * radius)),
        move |p: Vec2| (p - center).length() - radius,
    )
}

pub fn rectangle(half_extents: Vec2) -> impl Sdf2 {
    FnSdf::new(
        Box2::from_min_and_shape(-half_extents, 2.0 * half_extents),
        move |p: Vec2| {
            let q = p.abs() - half_extents;
            q.max(Vec2::ZERO).length() + q.max_element().min(0.0)
        },
    )
}

pub fn weld(triangles: &[Triangle3]) -> IndexedMesh {
    IndexedMesh::from_triangles(triangles, 0.0)
}

pub fn relative_error(actual: f32, expected: f32) -> f32 {
    ((actual - expected) / expected).abs()
}

pub fn sphere_area(radius: f32) -> f32 {
    4.0 * std::f32::consts::PI * radius * radius
}

pub fn sphere_volume(radius: f32) -> f32 {
    4.0 / 3.0 * std::f32::consts::PI * radius * radius * radius
}

pub fn total_length(lines: &[Line2]) -> f32 {
    lines.iter().map(Line2::length).sum()
}

/// Every point ends as many segments as it starts.
pub fn lines_are_closed(lines: &[Line2]) -> bool {
    let key = |p: Vec2| p.to_array().map(f32::to_bits);
    let mut balance: HashMap<[u32; 2], i32> = HashMap::new();
    for Line2([a, b]) in lines {
        *balance.entry(key(*a)).or_default() += 1;
        *balance.entry(key(*b)).or_default() -= 1;
    }
    !lines.is_empty() && balance.values().all(|&b| b == 0)
}

/// Area enclosed by the segments, positive when the solid lies on their right.
pub fn enclosed_area(lines: &[Line2]) -> f32 {
    -0.5 * lines
        .iter()
        .map(|Line2([a, b])| a.perp_dot(*b))
        .sum::<f32>()
}
