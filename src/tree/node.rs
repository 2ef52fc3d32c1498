//! Filesystem node type

use std::path::{Path, PathBuf};

/// A non-hidden entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        /// Empty until the directory is walked.
        children: Vec<FsNode>,
    },
}

impl FsNode {
    pub fn name(&self) -> &str {
        match self {
            FsNode::File { name, .. } => name,
            FsNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsNode::File { path, .. } => path,
            FsNode::Dir { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsNode::Dir { .. })
    }

    /// Children of a directory node; always empty for files.
    pub fn children(&self) -> &[FsNode] {
        match self {
            FsNode::File { .. } => &[],
            FsNode::Dir { children, .. } => children,
        }
    }

    /// Names of the file nodes among this node's children, in listing order.
    pub fn file_names(&self) -> Vec<String> {
        self.children()
            .iter()
            .filter(|child| !child.is_dir())
            .map(|child| child.name().to_string())
            .collect()
    }
}
