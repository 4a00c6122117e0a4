pub use self::error::ObbTreeError;
pub use self::obb_tree::{ObbTree, ObbTreeNode, INVALID_NODE};

mod build;
mod error;
mod obb_tree;
mod traversal;
mod update;
mod validation;
