use crate::{
    bounds::{Box3, Lattice},
    cache::DistanceCache,
    error::SdfError,
    qef::Qef,
    sampler::{AdaptiveSampler, SamplerNode},
    sdf::{central_gradient, Sdf3},
    tables::{CHILD_OFFSETS, EDGE_CORNERS},
};
use glam::{IVec3, Vec3A};

/// A sign change is located by bisection over this many subdivisions of the
/// edge.
pub const ZERO_CROSSING_STEPS: u32 = 256;

/// At most this many edge crossings feed a leaf's QEF.
pub const MAX_CROSSINGS: usize = 6;

/// Central difference step for normals, relative to the cell size.
pub const NORMAL_DELTA: f32 = 0.01;

pub type NodeId = u32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Internal,
    Leaf,
    /// An internal node whose children were collapsed into a single vertex.
    PseudoLeaf,
}

#[derive(Clone, Debug)]
pub struct DrawInfo {
    /// Bit `i` set when corner `i` is solid.
    pub corners: u8,
    pub position: Vec3A,
    pub average_normal: Vec3A,
    pub qef: Qef,
}

#[derive(Clone, Debug)]
pub struct Node {
    /// Minimum corner in lattice cells.
    pub origin: IVec3,
    /// The node spans `2^level` cells on each axis.
    pub level: u8,
    pub kind: NodeKind,
    pub children: [Option<NodeId>; 8],
    pub draw_info: Option<DrawInfo>,
    pub center_solid: bool,
}

impl Node {
    #[inline]
    pub fn size(&self) -> i32 {
        1 << self.level
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.kind == NodeKind::Internal
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeSettings {
    pub rank_tolerance: f32,
    /// Keep each vertex inside its node, falling back to the mass point.
    pub lock_vertices: bool,
}

impl Default for OctreeSettings {
    fn default() -> Self {
        Self {
            rank_tolerance: 1e-3,
            lock_vertices: false,
        }
    }
}

/// Arena octree of Hermite data for dual contouring.
///
/// Nodes are created top-down by [`CellOctree::build`], collapsed bottom-up by
/// [`CellOctree::simplify`] and are read-only while contouring.
#[derive(Debug, Default)]
pub struct CellOctree {
    pub(crate) root_id: Option<NodeId>,
    pub(crate) nodes: Vec<Node>,
    free_list: Vec<NodeId>,

    origin: Vec3A,
    resolution: f32,
    settings: OctreeSettings,
}

impl CellOctree {
    /// Samples the surface on the lattice of `cache`, which must not be
    /// subdivided.
    pub fn build<S: Sdf3 + ?Sized>(
        cache: &DistanceCache<'_, IVec3, S>,
        settings: OctreeSettings,
    ) -> Result<Self, SdfError> {
        debug_assert_eq!(cache.subdivisions(), 0);
        let sampler = AdaptiveSampler::new(cache, 0);
        let mut me = Self {
            origin: cache.position(IVec3::ZERO),
            resolution: cache.unit(),
            settings,
            ..Default::default()
        };
        me.root_id = me.build_node(&sampler, sampler.root())?;
        Ok(me)
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    /// Nodes that are currently part of the tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Leaves and pseudo-leaves reachable from the root, i.e. one per vertex.
    pub fn leaf_ids(&self) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack: Vec<NodeId> = self.root_id.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_internal() {
                stack.extend(node.children.iter().flatten());
            } else {
                leaves.push(id);
            }
        }
        leaves
    }

    /// World-space box of a node.
    pub fn node_bounds(&self, node: &Node) -> Box3 {
        let minimum = self.origin + node.origin.to_point() * self.resolution;
        Box3::from_min_and_shape(minimum, Vec3A::splat(node.size() as f32 * self.resolution))
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(id) = self.free_list.pop() {
            self.nodes[id as usize] = node;
            id
        } else {
            let id = self.nodes.len() as NodeId;
            self.nodes.push(node);
            id
        }
    }

    // Recursive because it's easier and slightly more efficient for post-order
    // traversal.
    fn build_node<S: Sdf3 + ?Sized>(
        &mut self,
        sampler: &AdaptiveSampler<'_, '_, IVec3, S>,
        node: SamplerNode<IVec3>,
    ) -> Result<Option<NodeId>, SdfError> {
        if !sampler.in_bounds(&node) {
            return Ok(None);
        }
        if node.level == 0 {
            return self.build_leaf(sampler.cache(), node.origin);
        }
        if sampler.is_empty(&node)? {
            return Ok(None);
        }
        let center_solid = sampler.cache().get_or_evaluate(node.center())? < 0.0;

        let half = node.size() / 2;
        let mut children = [None; 8];
        for (i, child) in children.iter_mut().enumerate() {
            let origin = node.origin + IVec3::from_array(CHILD_OFFSETS[i]) * half;
            *child = self.build_node(sampler, SamplerNode::new(origin, node.level - 1))?;
        }
        if children.iter().all(Option::is_none) {
            return Ok(None);
        }

        Ok(Some(self.alloc(Node {
            origin: node.origin,
            level: node.level as u8,
            kind: NodeKind::Internal,
            children,
            draw_info: None,
            center_solid,
        })))
    }

    fn build_leaf<S: Sdf3 + ?Sized>(
        &mut self,
        cache: &DistanceCache<'_, IVec3, S>,
        origin: IVec3,
    ) -> Result<Option<NodeId>, SdfError> {
        let mut positions = [Vec3A::ZERO; 8];
        let mut values = [0.0; 8];
        let mut corners = 0u8;
        for i in 0..8 {
            let coord = origin + IVec3::from_array(CHILD_OFFSETS[i]);
            positions[i] = cache.position(coord);
            values[i] = cache.get_or_evaluate(coord)?;
            if values[i] < 0.0 {
                corners |= 1 << i;
            }
        }
        if corners == 0 || corners == u8::MAX {
            return Ok(None);
        }

        let sdf = cache.sdf();
        let delta = NORMAL_DELTA * self.resolution;
        let mut qef = Qef::default();
        let mut normal_sum = Vec3A::ZERO;
        let mut crossings = 0;
        for &[c1, c2] in &EDGE_CORNERS {
            if crossings == MAX_CROSSINGS {
                break;
            }
            if (corners >> c1 & 1) == (corners >> c2 & 1) {
                continue;
            }
            let p = zero_crossing(sdf, positions[c1], positions[c2], values[c1] < 0.0)?;
            let n = central_gradient(sdf, p, delta)?.normalize_or_zero();
            qef.add_plane(p, n);
            normal_sum += n;
            crossings += 1;
        }

        let mut leaf = Node {
            origin,
            level: 0,
            kind: NodeKind::Leaf,
            children: [None; 8],
            draw_info: None,
            center_solid: false,
        };
        let position = self.place_vertex(&leaf, &qef);
        leaf.draw_info = Some(DrawInfo {
            corners,
            position,
            average_normal: (normal_sum / crossings as f32).normalize_or_zero(),
            qef,
        });
        Ok(Some(self.alloc(leaf)))
    }

    fn place_vertex(&self, node: &Node, qef: &Qef) -> Vec3A {
        if self.settings.lock_vertices {
            qef.solve_bounded(self.settings.rank_tolerance, &self.node_bounds(node))
        } else {
            qef.solve(self.settings.rank_tolerance)
        }
    }

    /// Collapses every internal node whose children are all leaves into a
    /// pseudo-leaf, as long as the merged QEF error stays within
    /// `threshold`. Collapses cascade upward within one call.
    ///
    /// Returns `true` if any node collapsed.
    pub fn simplify(&mut self, threshold: f32) -> bool {
        match self.root_id {
            Some(root) => self.simplify_node(root, threshold),
            None => false,
        }
    }

    fn simplify_node(&mut self, id: NodeId, threshold: f32) -> bool {
        let node = &self.nodes[id as usize];
        if !node.is_internal() {
            return false;
        }
        let children = node.children;

        let mut collapsed = false;
        for child in children.iter().flatten() {
            collapsed |= self.simplify_node(*child, threshold);
        }

        let node = &self.nodes[id as usize];
        let mut qef = Qef::default();
        let mut normal_sum = Vec3A::ZERO;
        let mut corners = 0u8;
        for (i, child) in children.iter().enumerate() {
            let solid = match child {
                Some(child) => {
                    let Some(info) = &self.nodes[*child as usize].draw_info else {
                        // Internal child.
                        return collapsed;
                    };
                    qef += &info.qef;
                    normal_sum += info.average_normal;
                    info.corners >> i & 1 == 1
                }
                None => node.center_solid,
            };
            corners |= (solid as u8) << i;
        }

        let position = if qef.is_empty() {
            let bounds = self.node_bounds(node);
            bounds.minimum + 0.5 * bounds.shape
        } else {
            let unbounded = qef.solve(self.settings.rank_tolerance);
            if qef.error(unbounded) > threshold {
                return collapsed;
            }
            if self.settings.lock_vertices {
                qef.solve_bounded(self.settings.rank_tolerance, &self.node_bounds(node))
            } else {
                unbounded
            }
        };

        for child in children.iter().flatten() {
            self.free_list.push(*child);
        }
        let node = &mut self.nodes[id as usize];
        node.kind = NodeKind::PseudoLeaf;
        node.children = [None; 8];
        node.draw_info = Some(DrawInfo {
            corners,
            position,
            average_normal: normal_sum.normalize_or_zero(),
            qef,
        });
        true
    }
}

/// First point of the edge `p0 → p1` whose sign differs from `p0`, found by
/// bisection over [`ZERO_CROSSING_STEPS`] subdivisions.
pub fn zero_crossing<S: Sdf3 + ?Sized>(
    sdf: &S,
    p0: Vec3A,
    p1: Vec3A,
    p0_solid: bool,
) -> Result<Vec3A, SdfError> {
    let steps = ZERO_CROSSING_STEPS as f32;
    let (mut lo, mut hi) = (0, ZERO_CROSSING_STEPS);
    while lo < hi {
        let mid = (lo + hi) / 2;
        let solid = sdf.evaluate(p0 + (p1 - p0) * (mid as f32 / steps))? < 0.0;
        if solid != p0_solid {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Ok(p0 + (p1 - p0) * (lo as f32 / steps))
}
