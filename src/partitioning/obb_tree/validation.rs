use super::{ObbTree, INVALID_NODE};

impl<const CAPACITY: usize> ObbTree<CAPACITY> {
    /// Panics unless the tree is well-formed.
    ///
    /// Checks the depth-first pre-order layout (every internal node is
    /// immediately followed by its left subtree and its whole subtree
    /// occupies `skip + 1` contiguous slots), the parent back-pointers, the
    /// skip arithmetic, and that every particle is stored in exactly one
    /// leaf, which the reverse mapping points back to.
    ///
    /// This is mostly a utility for debugging and tests.
    pub fn check_topology(&self) {
        if self.nodes.is_empty() {
            assert_eq!(self.root, INVALID_NODE);
            assert!(self.mapping.iter().all(|leaf| *leaf == INVALID_NODE));
            return;
        }

        assert_eq!(self.root, 0);
        assert_eq!(self.nodes[0].parent, INVALID_NODE);

        let mut seen = vec![false; self.mapping.len()];
        let total = self.check_topology_recurse(0, &mut seen);

        assert_eq!(total as usize, self.nodes.len());
        assert!(
            seen.iter().all(|placed| *placed),
            "some particle is not stored in any leaf"
        );
    }

    /// Checks the subtree rooted at `id` and returns the number of arena
    /// slots it occupies.
    fn check_topology_recurse(&self, id: u32, seen: &mut [bool]) -> u32 {
        let node = &self.nodes[id as usize];

        if node.is_leaf() {
            assert_eq!(node.skip, 0);
            assert!(node.num_particles > 0);
            assert!(node.num_particles as usize <= CAPACITY);

            for i in 0..node.num_particles as usize {
                let particle = node.particles[i] as usize;
                assert!(
                    !seen[particle],
                    "particle {} is stored in two leaves",
                    particle
                );
                seen[particle] = true;
                assert_eq!(self.mapping[particle], id);
            }

            1
        } else {
            assert_eq!(node.left, id + 1);
            assert!(node.right > node.left);
            assert_eq!(node.num_particles, 0);
            assert_eq!(self.nodes[node.left as usize].parent, id);
            assert_eq!(self.nodes[node.right as usize].parent, id);

            let left_len = self.check_topology_recurse(node.left, seen);
            assert_eq!(node.right, node.left + left_len);
            let right_len = self.check_topology_recurse(node.right, seen);

            assert_eq!(node.skip, left_len + right_len);
            left_len + right_len + 1
        }
    }
}
