use crate::bounding_volume::Obb;

use super::{ObbTree, ObbTreeError, INVALID_NODE};

impl<const CAPACITY: usize> ObbTree<CAPACITY> {
    /// Replaces the box stored on the leaf containing the given particle.
    ///
    /// Only that one leaf is touched; the topology and the ancestor boxes are
    /// deliberately left alone, so the hierarchy remains conservative only if
    /// the new box is contained in the old leaf box. Rebuild the tree after
    /// bulk changes.
    pub fn update(&mut self, particle: u32, obb: Obb) -> Result<(), ObbTreeError> {
        let leaf = self
            .mapping
            .get(particle as usize)
            .copied()
            .filter(|leaf| *leaf != INVALID_NODE)
            .ok_or(ObbTreeError::UnknownParticle(particle))?;

        self.nodes[leaf as usize].obb = obb;
        Ok(())
    }

    /// The height of the leaf containing the given particle, counting the
    /// leaf itself: a particle stored directly in the root has height 1.
    ///
    /// Returns 0 for a particle that is not part of the tree.
    pub fn height(&self, particle: u32) -> u32 {
        let Some(leaf) = self.mapping.get(particle as usize).copied() else {
            return 0;
        };

        if leaf == INVALID_NODE {
            return 0;
        }

        let mut height = 1;
        let mut current = self.nodes[leaf as usize].parent;

        while current != INVALID_NODE {
            current = self.nodes[current as usize].parent;
            height += 1;
        }

        height
    }
}
