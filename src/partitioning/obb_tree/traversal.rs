use crate::bounding_volume::Obb;

use super::ObbTree;

impl<const CAPACITY: usize> ObbTree<CAPACITY> {
    /// Finds all particles residing in a leaf whose box overlaps `obb`.
    ///
    /// Matching particle indices are appended to `hits`; the vector is not
    /// cleared first. Hits come out in pre-order over the leaves and in
    /// storage order within each leaf, so identical queries yield identical
    /// sequences.
    ///
    /// Returns the number of box-box overlap tests performed.
    pub fn query(&self, obb: &Obb, hits: &mut Vec<u32>) -> usize {
        let mut overlap_tests = 0;

        // Stackless search: the arena is laid out in depth-first pre-order,
        // so descending into an overlapping subtree is just `id + 1`, and a
        // non-overlapping subtree is jumped over via its `skip` count.
        let mut id = 0;
        while id < self.nodes.len() {
            let node = &self.nodes[id];

            overlap_tests += 1;
            if node.obb.intersects(obb) {
                if node.is_leaf() {
                    hits.extend_from_slice(&node.particles[..node.num_particles as usize]);
                }
            } else {
                // Skip ahead.
                id += node.skip as usize;
            }

            id += 1;
        }

        overlap_tests
    }
}
