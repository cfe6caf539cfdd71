use glam::{IVec3, Vec2, Vec3A};
use std::collections::HashMap;

pub type MeshVertexId = u32;

/// A triangle with counter-clockwise winding when viewed from outside the
/// surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle3(pub [Vec3A; 3]);

impl Triangle3 {
    pub fn new(a: Vec3A, b: Vec3A, c: Vec3A) -> Self {
        Self([a, b, c])
    }

    /// Unnormalized normal, with length equal to twice the area.
    #[inline]
    pub fn cross(&self) -> Vec3A {
        let [a, b, c] = self.0;
        (b - a).cross(c - a)
    }

    pub fn normal(&self) -> Vec3A {
        self.cross().normalize_or_zero()
    }

    pub fn area(&self) -> f32 {
        0.5 * self.cross().length()
    }

    /// True if any two vertices are within `tolerance` of each other on
    /// every axis.
    pub fn is_degenerate(&self, tolerance: f32) -> bool {
        let [a, b, c] = self.0;
        near(a, b, tolerance) || near(b, c, tolerance) || near(c, a, tolerance)
    }
}

#[inline]
fn near(a: Vec3A, b: Vec3A, tolerance: f32) -> bool {
    (a - b).abs().max_element() <= tolerance
}

/// A directed contour segment. The solid region lies to the right of the
/// direction of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2(pub [Vec2; 2]);

impl Line2 {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self([a, b])
    }

    pub fn length(&self) -> f32 {
        (self.0[1] - self.0[0]).length()
    }

    pub fn is_degenerate(&self, tolerance: f32) -> bool {
        (self.0[1] - self.0[0]).abs().max_element() <= tolerance
    }
}

/// Merges positions that lie within `tolerance` of an earlier position.
///
/// Positions are bucketed on a grid of `tolerance`-sized cells so a lookup
/// only inspects the 27 buckets around the query.
pub struct VertexWelder {
    tolerance: f32,
    buckets: HashMap<IVec3, Vec<MeshVertexId>>,
    exact: HashMap<[u32; 3], MeshVertexId>,
    positions: Vec<Vec3A>,
}

impl VertexWelder {
    pub fn new(tolerance: f32) -> Self {
        Self {
            tolerance: tolerance.max(0.0),
            buckets: HashMap::new(),
            exact: HashMap::new(),
            positions: Vec::new(),
        }
    }

    pub fn positions(&self) -> &[Vec3A] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Vec3A> {
        self.positions
    }

    pub fn weld(&mut self, p: Vec3A) -> MeshVertexId {
        if self.tolerance == 0.0 {
            let key = p.to_array().map(f32::to_bits);
            let next = self.positions.len() as MeshVertexId;
            let id = *self.exact.entry(key).or_insert(next);
            if id == next {
                self.positions.push(p);
            }
            return id;
        }

        let key = self.bucket(p);
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let Some(ids) = self.buckets.get(&(key + IVec3::new(dx, dy, dz))) else {
                        continue;
                    };
                    for &id in ids {
                        if self.positions[id as usize].distance(p) <= self.tolerance {
                            return id;
                        }
                    }
                }
            }
        }

        let id = self.positions.len() as MeshVertexId;
        self.positions.push(p);
        self.buckets.entry(key).or_default().push(id);
        id
    }

    fn bucket(&self, p: Vec3A) -> IVec3 {
        let q = (p / self.tolerance).floor();
        IVec3::new(q.x as i32, q.y as i32, q.z as i32)
    }
}

/// Triangle mesh with shared vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedMesh {
    pub positions: Vec<Vec3A>,
    pub normals: Vec<Vec3A>,
    pub indices: Vec<MeshVertexId>,
}

impl IndexedMesh {
    /// Welds a triangle soup. Triangles that collapse after welding are
    /// dropped. Vertex normals are area-weighted averages of face normals.
    pub fn from_triangles(triangles: &[Triangle3], weld_tolerance: f32) -> Self {
        let mut welder = VertexWelder::new(weld_tolerance);
        let mut indices = Vec::with_capacity(triangles.len() * 3);
        for t in triangles {
            let tri = t.0.map(|p| welder.weld(p));
            if tri[0] != tri[1] && tri[1] != tri[2] && tri[2] != tri[0] {
                indices.extend_from_slice(&tri);
            }
        }
        let positions = welder.into_positions();

        let mut normals = vec![Vec3A::ZERO; positions.len()];
        for t in indices.chunks_exact(3) {
            let n = Triangle3([
                positions[t[0] as usize],
                positions[t[1] as usize],
                positions[t[2] as usize],
            ])
            .cross();
            for &v in t {
                normals[v as usize] += n;
            }
        }
        for n in normals.iter_mut() {
            *n = n.normalize_or_zero();
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle3> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            Triangle3([
                self.positions[t[0] as usize],
                self.positions[t[1] as usize],
                self.positions[t[2] as usize],
            ])
        })
    }

    pub fn surface_area(&self) -> f32 {
        self.triangles().map(|t| t.area()).sum()
    }

    /// Positive for a closed surface whose triangles face outward.
    pub fn signed_volume(&self) -> f32 {
        self.triangles()
            .map(|Triangle3([a, b, c])| a.dot(b.cross(c)) / 6.0)
            .sum()
    }

    /// Directed edges that are not matched by exactly one opposite edge.
    pub fn open_edge_count(&self) -> usize {
        let mut directed: HashMap<(MeshVertexId, MeshVertexId), i32> = HashMap::new();
        for t in self.indices.chunks_exact(3) {
            for (a, b) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                *directed.entry((a, b)).or_default() += 1;
            }
        }
        directed
            .iter()
            .filter(|&(&(a, b), &count)| count != 1 || directed.get(&(b, a)) != Some(&1))
            .count()
    }

    /// Every edge is shared by exactly two consistently oriented triangles.
    pub fn is_closed(&self) -> bool {
        !self.indices.is_empty() && self.open_edge_count() == 0
    }

    pub fn repair_sharp_normals(&mut self, normal_similarity_threshold: f32) {
        repair_sharp_normals(
            normal_similarity_threshold,
            &mut self.indices,
            &mut self.positions,
            &mut self.normals,
        );
    }
}

/// Repair normals for vertices on sharp edges.
///
/// This may add vertices to the mesh in order to allow multiple normals at the
/// same position.
pub fn repair_sharp_normals(
    normal_similarity_threshold: f32,
    tri_indices: &mut [MeshVertexId],
    positions: &mut Vec<Vec3A>,
    normals: &mut Vec<Vec3A>,
) {
    for t in tri_indices.chunks_exact_mut(3) {
        let mut tri = [t[0], t[1], t[2]];
        let n = tri.map(|v| normals[v as usize]);
        let p = tri.map(|v| positions[v as usize]);

        let tri_normal = Triangle3(p).normal();

        // Force dissident normals to use the triangle's normal.
        for ti in 0..3 {
            if n[ti].dot(tri_normal) < normal_similarity_threshold {
                let new_vert = positions.len() as MeshVertexId;
                positions.push(p[ti]);
                normals.push(tri_normal);
                tri[ti] = new_vert;
            }
        }

        t.copy_from_slice(&tri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> Vec<Triangle3> {
        let p = [Vec3A::ZERO, Vec3A::X, Vec3A::Y, Vec3A::Z];
        vec![
            Triangle3::new(p[0], p[2], p[1]),
            Triangle3::new(p[0], p[1], p[3]),
            Triangle3::new(p[0], p[3], p[2]),
            Triangle3::new(p[1], p[2], p[3]),
        ]
    }

    #[test]
    fn welded_tetrahedron_is_closed() {
        let mesh = IndexedMesh::from_triangles(&tetrahedron(), 0.0);
        assert_eq!(mesh.positions.len(), 4);
        assert!(mesh.is_closed());
        assert!((mesh.signed_volume() - 1.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn flipped_triangle_opens_mesh() {
        let mut tris = tetrahedron();
        let [a, b, c] = tris[3].0;
        tris[3] = Triangle3::new(a, c, b);
        let mesh = IndexedMesh::from_triangles(&tris, 0.0);
        assert!(!mesh.is_closed());
    }

    #[test]
    fn welding_merges_nearby_vertices() {
        let mut welder = VertexWelder::new(0.01);
        let a = welder.weld(Vec3A::new(1.0, 1.0, 1.0));
        let b = welder.weld(Vec3A::new(1.004, 0.999, 1.0));
        let c = welder.weld(Vec3A::new(1.02, 1.0, 1.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(welder.positions().len(), 2);
    }

    #[test]
    fn collapsed_triangles_are_dropped() {
        let tris = [Triangle3::new(
            Vec3A::ZERO,
            Vec3A::new(0.001, 0.0, 0.0),
            Vec3A::Y,
        )];
        assert_eq!(IndexedMesh::from_triangles(&tris, 0.01).num_triangles(), 0);
        assert!(tris[0].is_degenerate(0.01));
        assert!(!tris[0].is_degenerate(0.0));
    }

    #[test]
    fn sharp_normals_get_split() {
        let mut mesh = IndexedMesh::from_triangles(&tetrahedron(), 0.0);
        let before = mesh.positions.len();
        mesh.repair_sharp_normals(0.95);
        assert!(mesh.positions.len() > before);
        for t in mesh.indices.chunks_exact(3) {
            let face = Triangle3([
                mesh.positions[t[0] as usize],
                mesh.positions[t[1] as usize],
                mesh.positions[t[2] as usize],
            ]);
            for &v in t {
                assert!(mesh.normals[v as usize].dot(face.normal()) >= 0.95 - 1e-6);
            }
        }
    }
}
