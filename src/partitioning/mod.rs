//! Spatial partitioning tools.

pub use self::obb_tree::{ObbTree, ObbTreeError, ObbTreeNode, INVALID_NODE};

mod obb_tree;
