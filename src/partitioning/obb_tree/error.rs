use std::collections::TryReserveError;

#[cfg(doc)]
use super::ObbTree;

/// Errors that can occur when building or mutating an [`ObbTree`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ObbTreeError {
    /// Growing the node arena failed because the underlying allocator
    /// reported an error.
    ///
    /// The tree is left partially built but internally consistent (every
    /// allocated node has valid parent links); callers should discard it.
    #[error("failed to grow the node storage of the tree: {0}")]
    Allocation(#[from] TryReserveError),

    /// The given particle index is out of range or was never placed in a
    /// leaf of the tree.
    #[error("particle {0} is not mapped to any leaf of the tree")]
    UnknownParticle(u32),
}
