//! Topology tables for octree dual contouring.
//!
//! Octant `i` has minimum-corner offset `(i >> 2 & 1, i >> 1 & 1, i & 1)`, so
//! the X axis is bit 2 and the Z axis is bit 0. The same numbering is used for
//! the corners of a cell. Axis `0` is X, `1` is Y, `2` is Z.

pub const CHILD_OFFSETS: [[i32; 3]; 8] = [
    [0, 0, 0],
    [0, 0, 1],
    [0, 1, 0],
    [0, 1, 1],
    [1, 0, 0],
    [1, 0, 1],
    [1, 1, 0],
    [1, 1, 1],
];

/// Corner pairs of the 12 cell edges, 4 per axis.
pub const EDGE_CORNERS: [[usize; 2]; 12] = [
    // X
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
    // Y
    [0, 2],
    [1, 3],
    [4, 6],
    [5, 7],
    // Z
    [0, 1],
    [2, 3],
    [4, 5],
    [6, 7],
];

/// Pairs of face-adjacent children `(o0, o1, axis)` inside a cell. `o0` is on
/// the - side of the shared face.
pub const CELL_FACES: [[usize; 3]; 12] = [
    [0, 4, 0],
    [1, 5, 0],
    [2, 6, 0],
    [3, 7, 0],
    [0, 2, 1],
    [4, 6, 1],
    [1, 3, 1],
    [5, 7, 1],
    [0, 1, 2],
    [2, 3, 2],
    [4, 5, 2],
    [6, 7, 2],
];

/// Quartets of children sharing an interior edge `(o0, o1, o2, o3, axis)`.
pub const CELL_EDGES: [[usize; 5]; 6] = [
    [0, 1, 2, 3, 0],
    [4, 5, 6, 7, 0],
    [0, 4, 1, 5, 1],
    [2, 6, 3, 7, 1],
    [0, 2, 4, 6, 2],
    [1, 3, 5, 7, 2],
];

/// For a face along `axis` between two cells, the 4 pairs of children
/// `(child of - cell, child of + cell, axis)` that meet on that face.
pub const FACE_FACES: [[[usize; 3]; 4]; 3] = [
    [[4, 0, 0], [5, 1, 0], [6, 2, 0], [7, 3, 0]],
    [[2, 0, 1], [6, 4, 1], [3, 1, 1], [7, 5, 1]],
    [[1, 0, 2], [3, 2, 2], [5, 4, 2], [7, 6, 2]],
];

/// For a face along `axis`, the 4 edges lying in the face:
/// `(order, c0, c1, c2, c3, edge axis)`. `order` selects a row of
/// [`FACE_EDGE_ORDERS`], which says which side of the face each of the 4
/// edge cells is taken from.
pub const FACE_EDGES: [[[usize; 6]; 4]; 3] = [
    [
        [1, 4, 0, 5, 1, 1],
        [1, 6, 2, 7, 3, 1],
        [0, 4, 6, 0, 2, 2],
        [0, 5, 7, 1, 3, 2],
    ],
    [
        [0, 2, 3, 0, 1, 0],
        [0, 6, 7, 4, 5, 0],
        [1, 2, 0, 6, 4, 2],
        [1, 3, 1, 7, 5, 2],
    ],
    [
        [1, 1, 0, 3, 2, 0],
        [1, 5, 4, 7, 6, 0],
        [0, 1, 5, 0, 4, 1],
        [0, 3, 7, 2, 6, 1],
    ],
];

pub const FACE_EDGE_ORDERS: [[usize; 4]; 2] = [[0, 0, 1, 1], [0, 1, 0, 1]];

/// For an edge along `axis` shared by 4 cells, the 2 halves of the edge:
/// `(c0, c1, c2, c3, axis)` selects the child of each cell touching that half.
pub const EDGE_EDGES: [[[usize; 5]; 2]; 3] = [
    [[3, 2, 1, 0, 0], [7, 6, 5, 4, 0]],
    [[5, 1, 4, 0, 1], [7, 3, 6, 2, 1]],
    [[6, 4, 2, 0, 2], [7, 5, 3, 1, 2]],
];

/// For an edge along `axis` shared by 4 leaves, the index into
/// [`EDGE_CORNERS`] of that edge as seen from each leaf.
pub const PROCESS_EDGES: [[usize; 4]; 3] = [[3, 2, 1, 0], [7, 5, 6, 4], [11, 10, 9, 8]];

#[inline]
pub const fn axis_bit(axis: usize) -> usize {
    1 << (2 - axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_offsets_match_bits() {
        for (i, o) in CHILD_OFFSETS.iter().enumerate() {
            for axis in 0..3 {
                assert_eq!(o[axis] == 1, i & axis_bit(axis) != 0);
            }
        }
    }

    #[test]
    fn edges_run_along_their_axis() {
        for (e, &[a, b]) in EDGE_CORNERS.iter().enumerate() {
            assert_eq!(a ^ b, axis_bit(e / 4));
            assert!(a < b);
        }
        for (axis, edges) in PROCESS_EDGES.iter().enumerate() {
            for &e in edges {
                assert_eq!(e / 4, axis);
            }
        }
    }

    #[test]
    fn cell_faces_are_adjacent() {
        for &[a, b, axis] in &CELL_FACES {
            assert_eq!(b - a, axis_bit(axis));
        }
        for (axis, faces) in FACE_FACES.iter().enumerate() {
            for &[a, b, face_axis] in faces {
                assert_eq!(face_axis, axis);
                // The - cell's child sits on its + side and vice versa.
                assert_eq!(a - b, axis_bit(axis));
            }
        }
    }

    #[test]
    fn cell_edges_surround_a_common_edge() {
        for &[c0, c1, c2, c3, axis] in &CELL_EDGES {
            let quartet = [c0, c1, c2, c3];
            let along = quartet.map(|c| c & axis_bit(axis));
            assert!(along.iter().all(|&a| a == along[0]));
            let mut across = quartet.map(|c| c & !axis_bit(axis));
            across.sort();
            across.windows(2).for_each(|w| assert_ne!(w[0], w[1]));
        }
    }
}
