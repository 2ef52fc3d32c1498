//! Markdown index generation
//!
//! The index lists every non-hidden file below a root, grouped by directory.
//! Each directory becomes a heading whose level follows its nesting depth
//! (top-level directories are `##`), followed by one link per file:
//!
//! ```text
//! # All File
//!
//! ## docs
//! [Widget Guide](docs/readme.md)
//! [notes.txt](docs/notes.txt)
//! ```
//!
//! Files sitting directly in the root are not listed. In particular the
//! generated `index.md` never indexes itself, so regenerating an unchanged
//! tree yields the same bytes.

mod title;

pub use title::{extract_title, first_heading};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::tree::{FsNode, list_children, walk_tree};

/// Name of the generated file, written into the root.
pub const INDEX_FILE_NAME: &str = "index.md";

/// Heading depth of the root's immediate subdirectories.
pub const TOP_LEVEL_DEPTH: usize = 2;

const DOCUMENT_HEADER: &str = "# All File\n\n";

/// One directory's block in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Path relative to the root, `/`-separated.
    pub relative_path: String,
    /// Names of the files directly inside the directory, in listing order.
    pub files: Vec<String>,
    /// Nesting depth; the number of `#` in the heading.
    pub depth: usize,
}

/// Outcome of [`write_index`].
#[derive(Debug, Clone)]
pub struct IndexReport {
    pub path: PathBuf,
    pub directories: usize,
    pub files: usize,
}

/// Directory entries for every non-hidden directory below `path`.
///
/// The immediate subdirectories of `path` get `depth`, theirs `depth + 1`,
/// and so on. Entries are in pre-order: a directory's own entry comes right
/// before the entries of its subdirectories.
pub fn list_entries(path: &Path, depth: usize) -> Result<Vec<DirectoryEntry>> {
    let tree = walk_tree(path)?;
    let mut entries = Vec::new();
    collect_entries(tree.children(), "", depth, &mut entries);
    Ok(entries)
}

fn collect_entries(
    nodes: &[FsNode],
    parent: &str,
    depth: usize,
    entries: &mut Vec<DirectoryEntry>,
) {
    for node in nodes.iter().filter(|n| n.is_dir()) {
        let relative_path = if parent.is_empty() {
            node.name().to_string()
        } else {
            format!("{}/{}", parent, node.name())
        };

        entries.push(DirectoryEntry {
            relative_path: relative_path.clone(),
            files: node.file_names(),
            depth,
        });
        collect_entries(node.children(), &relative_path, depth + 1, entries);
    }
}

/// Names of the non-hidden files directly inside `path`.
pub fn list_files(path: &Path) -> Result<Vec<String>> {
    Ok(list_children(path)?
        .into_iter()
        .filter(|node| !node.is_dir())
        .map(|node| node.name().to_string())
        .collect())
}

/// Render the index document for `root`.
pub fn generate_content(root: &Path) -> Result<String> {
    let entries = list_entries(root, TOP_LEVEL_DEPTH)?;
    Ok(render(root, &entries))
}

fn render(root: &Path, entries: &[DirectoryEntry]) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| render_block(root, entry))
        .collect();

    let mut output = String::from(DOCUMENT_HEADER);
    if !blocks.is_empty() {
        output.push_str(&blocks.join("\n\n"));
        output.push('\n');
    }
    output
}

fn render_block(root: &Path, entry: &DirectoryEntry) -> String {
    let mut lines = Vec::with_capacity(entry.files.len() + 1);
    lines.push(format!("{} {}", "#".repeat(entry.depth), entry.relative_path));

    let dir = root.join(&entry.relative_path);
    for file in &entry.files {
        let title = extract_title(&dir.join(file));
        lines.push(format!("[{}]({}/{})", title, entry.relative_path, file));
    }

    lines.join("\n")
}

/// Generate the index for `root` and write it to `<root>/index.md`,
/// replacing any previous index.
pub fn write_index(root: &Path) -> Result<IndexReport> {
    let entries = list_entries(root, TOP_LEVEL_DEPTH)?;
    let content = render(root, &entries);

    let path = root.join(INDEX_FILE_NAME);
    fs::write(&path, content).map_err(|e| Error::io("cannot write", &path, e))?;

    Ok(IndexReport {
        path,
        directories: entries.len(),
        files: entries.iter().map(|e| e.files.len()).sum(),
    })
}

/// Shell command that undoes a committed index, shown after writing.
pub fn rollback_hint(index_path: &Path) -> String {
    format!("git reset HEAD^ && git checkout -- {}", index_path.display())
}
