//! Whole-tree walking for the indexer

use std::path::Path;

use crate::error::{Error, Result};

use super::listing::list_children;
use super::node::FsNode;

/// Load the tree rooted at `root` depth-first.
///
/// The result is an [`FsNode::Dir`] for the root whose directory children
/// are themselves fully loaded. Fails if the root is missing or is not a
/// directory, or if any directory below it cannot be listed.
pub fn walk_tree(root: &Path) -> Result<FsNode> {
    let metadata = std::fs::metadata(root).map_err(|e| Error::io("cannot access", root, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let name = root
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string());

    Ok(FsNode::Dir {
        name,
        path: root.to_path_buf(),
        children: walk_children(root)?,
    })
}

fn walk_children(path: &Path) -> Result<Vec<FsNode>> {
    let mut children = list_children(path)?;
    for child in &mut children {
        if let FsNode::Dir { path, children, .. } = child {
            *children = walk_children(path)?;
        }
    }
    Ok(children)
}
