use crate::bounding_volume::Obb;
use crate::math::{Point, Real};

use super::{ObbTree, ObbTreeError, INVALID_NODE};

impl<const CAPACITY: usize> ObbTree<CAPACITY> {
    /// Clears this tree and rebuilds it from one box per particle.
    ///
    /// Equivalent to [`Self::build_from_vertices`] with each box's eight
    /// corners as its vertex cloud and a zero vertex radius.
    ///
    /// `obbs` is used as scratch space by the partitioning step and contains
    /// an unspecified permutation of its input on return.
    pub fn build_from_obbs(&mut self, obbs: &mut [Obb]) -> Result<(), ObbTreeError> {
        let mut internal_coordinates: Vec<Vec<Point<Real>>> =
            obbs.iter().map(|obb| obb.corners().to_vec()).collect();

        self.build_from_vertices(obbs, &mut internal_coordinates, 0.0)
    }

    /// Clears this tree and rebuilds it from one vertex cloud per particle.
    ///
    /// `obbs[i]` bounds particle `i`; only its center is read, to partition
    /// the particles. The box stored on every node is refitted from the
    /// vertex clouds of the particles below it, each vertex inflated by
    /// `vertex_radius`.
    ///
    /// Both `obbs` and `internal_coordinates` are used as scratch space by
    /// the partitioning step and contain unspecified permutations of their
    /// inputs on return. Building with zero particles yields the empty tree.
    ///
    /// # Panics
    ///
    /// Panics if the two slices have different lengths or if a particle has
    /// an empty vertex cloud.
    pub fn build_from_vertices(
        &mut self,
        obbs: &mut [Obb],
        internal_coordinates: &mut [Vec<Point<Real>>],
        vertex_radius: Real,
    ) -> Result<(), ObbTreeError> {
        assert_eq!(
            obbs.len(),
            internal_coordinates.len(),
            "every particle needs both a box and a vertex cloud"
        );
        assert!(
            internal_coordinates.iter().all(|pts| !pts.is_empty()),
            "every particle needs at least one vertex"
        );

        self.init(obbs.len());

        if obbs.is_empty() {
            return Ok(());
        }

        let len = obbs.len();
        let mut idx: Vec<u32> = (0..len as u32).collect();

        let root = self.build_node(
            obbs,
            internal_coordinates,
            vertex_radius,
            &mut idx,
            0,
            len,
            INVALID_NODE,
        )?;

        self.root = root;
        let _ = self.update_skip(root);

        Ok(())
    }

    /// Builds the node owning the sub-range `start..start + len` of `idx` and
    /// returns its arena index.
    ///
    /// The box of the node is refitted from the concatenated vertex clouds of
    /// its sub-range. If the sub-range fits in one leaf, the particles are
    /// stored there directly; otherwise the sub-range is partitioned in place
    /// (like quick-sort, so `obbs`, `idx` and `internal_coordinates` end up
    /// permuted) and the two halves are built recursively.
    fn build_node(
        &mut self,
        obbs: &mut [Obb],
        internal_coordinates: &mut [Vec<Point<Real>>],
        vertex_radius: Real,
        idx: &mut [u32],
        start: usize,
        len: usize,
        parent: u32,
    ) -> Result<u32, ObbTreeError> {
        // Fit a box as tight as possible around every vertex of the sub-range.
        let clouds = &internal_coordinates[start..start + len];
        let mut merged_vertices =
            Vec::with_capacity(clouds.iter().map(|pts| pts.len()).sum());
        for pts in clouds {
            merged_vertices.extend_from_slice(pts);
        }

        let my_obb = Obb::from_points(&merged_vertices, vertex_radius);

        if len <= CAPACITY {
            let new_node = self.allocate_node()?;

            for i in 0..len {
                self.mapping[idx[start + i] as usize] = new_node;
            }

            let node = &mut self.nodes[new_node as usize];
            node.obb = my_obb;
            node.parent = parent;
            node.num_particles = len as u32;
            node.particles[..len].copy_from_slice(&idx[start..start + len]);

            return Ok(new_node);
        }

        // Internal node. Allocating it right here, before recursing, is what
        // makes the arena layout a depth-first pre-order: `new_left` below is
        // always `my_idx + 1`.
        let my_idx = self.allocate_node()?;

        // The local x axis of the fit carries the largest covariance, so
        // split there, by the sign of each center's projection (spatial
        // median through the parent's center).
        let axis = my_obb.principal_axis();
        let mut start_right = len;

        if len == 2 {
            // Already trivially bisected, one particle per side.
        } else {
            let mut i = 0;
            while i < start_right {
                let proj = (obbs[start + i].center - my_obb.center).dot(&axis);

                if proj < 0.0 {
                    i += 1;
                } else {
                    // Unstable in-place partition, like the quick-sort sweep.
                    // TODO: a stable partition would make leaf membership
                    // deterministic w.r.t. the input order.
                    obbs.swap(start + i, start + start_right - 1);
                    idx.swap(start + i, start + start_right - 1);
                    internal_coordinates.swap(start + i, start + start_right - 1);
                    start_right -= 1;
                }
            }

            if start_right == 0 || start_right == len {
                log::debug!(
                    "all {} particle centers fell on one side of the split plane; \
                     borrowing one particle for the other side",
                    len
                );
            }
        }

        // One side may be empty when every center projects with the same
        // sign. Borrow one particle so the recursion always terminates; the
        // fitted box stays conservative either way.
        if start_right == len {
            start_right = len - 1;
        }
        if start_right == 0 {
            start_right = 1;
        }

        // The recursive calls may reallocate the arena, so the children are
        // built first and `nodes[my_idx]` is only written once both indices
        // are known.
        let new_left = self.build_node(
            obbs,
            internal_coordinates,
            vertex_radius,
            idx,
            start,
            start_right,
            my_idx,
        )?;
        let new_right = self.build_node(
            obbs,
            internal_coordinates,
            vertex_radius,
            idx,
            start + start_right,
            len - start_right,
            my_idx,
        )?;

        let node = &mut self.nodes[my_idx as usize];
        node.obb = my_obb;
        node.parent = parent;
        node.left = new_left;
        node.right = new_right;

        Ok(my_idx)
    }

    /// Fills the `skip` field of every node below `id` and returns the number
    /// of arena slots occupied by the subtree rooted at `id`.
    ///
    /// Because `build_node` allocates each node immediately before its left
    /// subtree, a node's `skip` is exactly the offset to the first node
    /// outside its subtree in a linear scan of the arena, which is what the
    /// stackless query relies on.
    fn update_skip(&mut self, id: u32) -> u32 {
        if self.nodes[id as usize].is_leaf() {
            1
        } else {
            let left = self.nodes[id as usize].left;
            let right = self.nodes[id as usize].right;

            let skip = self.update_skip(left) + self.update_skip(right);
            self.nodes[id as usize].skip = skip;
            skip + 1
        }
    }
}
