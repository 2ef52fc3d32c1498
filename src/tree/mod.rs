//! Directory tree listing
//!
//! Both tools see the filesystem through [`FsNode`], built from a single
//! `read_dir` call per directory:
//!
//! - `list_children`: one level, directories returned without their children
//! - `walk_tree`: the whole tree, loaded depth-first

mod listing;
mod node;
mod walker;

pub use listing::{is_hidden, list_children};
pub use node::FsNode;
pub use walker::walk_tree;
