//! Single-level directory listing

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::node::FsNode;

/// Hidden entries (names starting with `.`) are never visited.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List the non-hidden children of `dir`, sorted by name.
///
/// Each entry is classified from its own directory-entry file type, so no
/// extra metadata call is made per child. Directories come back with empty
/// `children`. Symlinks and special files are skipped: symlinks are never
/// followed, which keeps traversal free of cycles.
pub fn list_children(dir: &Path) -> Result<Vec<FsNode>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io("cannot list directory", dir, e))?;

    let mut nodes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io("cannot list directory", dir, e))?;
        // Lossy names are for display and filtering only; `path` keeps the raw bytes.
        let name = entry.file_name().to_string_lossy().to_string();
        if is_hidden(&name) {
            continue;
        }

        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| Error::io("cannot inspect", &path, e))?;

        if file_type.is_dir() {
            nodes.push(FsNode::Dir {
                name,
                path,
                children: Vec::new(),
            });
        } else if file_type.is_file() {
            nodes.push(FsNode::File { name, path });
        }
    }

    nodes.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(nodes)
}
