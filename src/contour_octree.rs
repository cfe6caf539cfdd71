use crate::{
    cell_octree::{CellOctree, Node, NodeId},
    mesh::{IndexedMesh, MeshVertexId},
    tables::*,
};

impl CellOctree {
    /// Creates one vertex per leaf and one quad (two triangles) for every
    /// bipolar edge on the interior of the root.
    ///
    /// Normals are the averaged Hermite normals of each leaf.
    pub fn dual_contour(&self) -> IndexedMesh {
        let mut vertex_ids = vec![MeshVertexId::MAX; self.nodes.len()];
        let mut positions = Vec::new();
        let mut normals = Vec::new();
        for id in self.leaf_ids() {
            if let Some(info) = &self.node(id).draw_info {
                vertex_ids[id as usize] = positions.len() as MeshVertexId;
                positions.push(info.position);
                normals.push(info.average_normal);
            }
        }

        let mut contour = Contour {
            octree: self,
            vertex_ids: &vertex_ids,
            indices: Vec::new(),
        };
        if let Some(root) = self.root_id {
            contour.cell_proc(root);
        }

        IndexedMesh {
            positions,
            normals,
            indices: contour.indices,
        }
    }
}

struct Contour<'a> {
    octree: &'a CellOctree,
    vertex_ids: &'a [MeshVertexId],
    indices: Vec<MeshVertexId>,
}

impl<'a> Contour<'a> {
    #[inline]
    fn node(&self, id: NodeId) -> &'a Node {
        &self.octree.nodes[id as usize]
    }

    /// Leaves keep participating on behalf of their missing children.
    #[inline]
    fn child_or_self(&self, id: NodeId, octant: usize) -> Option<NodeId> {
        let node = self.node(id);
        if node.is_internal() {
            node.children[octant]
        } else {
            Some(id)
        }
    }

    // 8 cells, 12 faces, 6 edges
    fn cell_proc(&mut self, id: NodeId) {
        let node = self.node(id);
        if !node.is_internal() {
            return;
        }

        for &child in node.children.iter().flatten() {
            self.cell_proc(child);
        }

        for &[o0, o1, axis] in &CELL_FACES {
            if let [Some(f0), Some(f1)] = [node.children[o0], node.children[o1]] {
                self.face_proc([f0, f1], axis);
            }
        }

        for &[o0, o1, o2, o3, axis] in &CELL_EDGES {
            if let [Some(e0), Some(e1), Some(e2), Some(e3)] =
                [o0, o1, o2, o3].map(|o| node.children[o])
            {
                self.edge_proc([e0, e1, e2, e3], axis);
            }
        }
    }

    // 4 faces, 4 edges
    fn face_proc(&mut self, nodes: [NodeId; 2], axis: usize) {
        // PRECONDITION: `nodes` are given from the - side of the face to the + side.
        if !nodes.iter().any(|&n| self.node(n).is_internal()) {
            // No edges on the face interior.
            return;
        }

        for &[o0, o1, face_axis] in &FACE_FACES[axis] {
            if let [Some(f0), Some(f1)] = [
                self.child_or_self(nodes[0], o0),
                self.child_or_self(nodes[1], o1),
            ] {
                self.face_proc([f0, f1], face_axis);
            }
        }

        for &[order, o0, o1, o2, o3, edge_axis] in &FACE_EDGES[axis] {
            // "Face axis" is not the same as "edge axis."
            let order = FACE_EDGE_ORDERS[order];
            let octants = [o0, o1, o2, o3];
            if let [Some(e0), Some(e1), Some(e2), Some(e3)] =
                [0, 1, 2, 3].map(|j| self.child_or_self(nodes[order[j]], octants[j]))
            {
                self.edge_proc([e0, e1, e2, e3], edge_axis);
            }
        }
    }

    // 2 edges
    fn edge_proc(&mut self, nodes: [NodeId; 4], axis: usize) {
        if nodes.iter().all(|&n| !self.node(n).is_internal()) {
            self.process_edge(nodes, axis);
            return;
        }

        // We must continue bisecting this edge.
        for &[o0, o1, o2, o3, edge_axis] in &EDGE_EDGES[axis] {
            let octants = [o0, o1, o2, o3];
            if let [Some(e0), Some(e1), Some(e2), Some(e3)] =
                [0, 1, 2, 3].map(|j| self.child_or_self(nodes[j], octants[j]))
            {
                self.edge_proc([e0, e1, e2, e3], edge_axis);
            }
        }
    }

    fn process_edge(&mut self, nodes: [NodeId; 4], axis: usize) {
        // Only the smallest node is guaranteed to contain the whole edge, so
        // it decides whether the edge is bipolar and which way to face.
        let mut min_level = u8::MAX;
        let mut min_index = 0;
        let mut flip = false;
        let mut sign_change = [false; 4];
        let mut ids = [0; 4];
        for i in 0..4 {
            let node = self.node(nodes[i]);
            let Some(info) = &node.draw_info else {
                return;
            };
            let [c1, c2] = EDGE_CORNERS[PROCESS_EDGES[axis][i]];
            let m1 = info.corners >> c1 & 1;
            let m2 = info.corners >> c2 & 1;
            if node.level < min_level {
                min_level = node.level;
                min_index = i;
                flip = m1 != 0;
            }
            ids[i] = self.vertex_ids[nodes[i] as usize];
            sign_change[i] = m1 != m2;
        }
        if !sign_change[min_index] {
            return;
        }

        let tris = if flip {
            [[0, 3, 1], [0, 2, 3]]
        } else {
            [[0, 1, 3], [0, 3, 2]]
        };
        for tri in tris {
            let [a, b, c] = tri.map(|k| ids[k]);
            // A leaf that spans several edge cells shows up more than once.
            if a != b && b != c && c != a {
                self.indices.extend_from_slice(&[a, b, c]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        bounds::{Box3, SampleGrid3},
        cache::DistanceCache,
        cell_octree::{CellOctree, OctreeSettings},
        sdf::{FnSdf, Sdf},
    };

    use glam::{Vec3A, Vec3Swizzles};

    #[test]
    fn sphere_is_closed_and_outward() {
        let center = Vec3A::new(0.1, -0.05, 0.07);
        let sdf = FnSdf::new(
            Box3::from_min_and_shape(Vec3A::splat(-1.0), Vec3A::splat(2.0)),
            move |p: Vec3A| (p - center).length() - 0.8,
        );
        let grid = SampleGrid3::from_bounds(&sdf.bounding_box(), 16).unwrap();
        let cache = DistanceCache::new(&sdf, grid, 0);
        let octree = CellOctree::build(&cache, OctreeSettings::default()).unwrap();
        let mesh = octree.dual_contour();

        assert_eq!(mesh.positions.len(), octree.leaf_ids().len());
        assert!(mesh.is_closed());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn pseudo_leaves_still_contour() {
        // A tilted plane slab: its QEFs are exact, so large regions collapse.
        let n = Vec3A::new(0.2, 0.3, 1.0).normalize();
        let sdf = FnSdf::new(
            Box3::from_min_and_shape(Vec3A::splat(-1.0), Vec3A::splat(2.0)),
            move |p: Vec3A| p.dot(n).abs().max(p.xy().length() - 0.7) - 0.25,
        );
        let grid = SampleGrid3::from_bounds(&sdf.bounding_box(), 16).unwrap();
        let cache = DistanceCache::new(&sdf, grid, 0);
        let mut octree = CellOctree::build(&cache, OctreeSettings::default()).unwrap();
        let full = octree.dual_contour();
        octree.simplify(1e-3);
        let simplified = octree.dual_contour();

        assert!(simplified.positions.len() <= full.positions.len());
        assert!(simplified.num_triangles() > 0);
        assert!(simplified.signed_volume() > 0.0);
    }
}
