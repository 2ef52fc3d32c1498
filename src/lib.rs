//! Treescribe - markdown indexes and case-preserving project renames for directory trees

pub mod error;
pub mod index;
pub mod output;
pub mod paths;
pub mod rename;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use index::{
    DirectoryEntry, IndexReport, extract_title, generate_content, list_entries, list_files,
    rollback_hint, write_index,
};
pub use output::{ColorMode, Console, ConsoleReporter, MemoryReporter, RenameEvent, Reporter};
pub use paths::resolve_root;
pub use rename::{
    NamePattern, ProjectRenamer, RenameConfig, RenameSummary, case_adapt, rename_project,
    should_process,
};
pub use tree::{FsNode, list_children, walk_tree};
