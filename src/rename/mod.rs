//! Project renaming
//!
//! Walks a project depth-first and replaces every occurrence of the old
//! project name, in any of its recognised casings, in directory names, file
//! names and file contents. Hidden entries and ignored folder names are
//! skipped at every level.
//!
//! Mutation order is fixed:
//!
//! - a directory is renamed before it is entered, and traversal continues
//!   under the path returned by the rename;
//! - a file's content is rewritten through its current path, then the file
//!   itself is renamed.
//!
//! Nothing is rolled back on failure: entries changed before an error stay
//! changed.

mod case;

pub use case::{CaseStyle, NamePattern, Substitution, camel_case, case_adapt, detect_case};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::output::{RenameEvent, Reporter};
use crate::tree::{FsNode, is_hidden, list_children};

/// What to rename, and where not to look.
#[derive(Debug, Clone, Default)]
pub struct RenameConfig {
    pub old_name: String,
    pub new_name: String,
    /// Folder names skipped at any depth, compared verbatim.
    pub ignore: Vec<String>,
    /// Report changes without touching the filesystem.
    pub dry_run: bool,
}

/// Counts of changes made (or planned, in a dry run).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub directories_renamed: usize,
    pub files_renamed: usize,
    pub files_rewritten: usize,
}

/// Whether the renamer should visit an entry called `name`.
pub fn should_process(name: &str, ignore: &[String]) -> bool {
    !is_hidden(name) && !ignore.iter().any(|ignored| ignored == name)
}

/// Rename the project under `root`. `root` itself is never renamed.
pub fn rename_project(
    root: &Path,
    config: &RenameConfig,
    reporter: &mut dyn Reporter,
) -> Result<RenameSummary> {
    let metadata = fs::metadata(root).map_err(|e| Error::io("cannot access", root, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut renamer = ProjectRenamer::new(config, reporter)?;
    renamer.process_directory(root)?;
    Ok(renamer.summary())
}

/// Depth-first renamer holding the compiled name pattern for one run.
pub struct ProjectRenamer<'a, R: Reporter + ?Sized> {
    pattern: NamePattern,
    config: &'a RenameConfig,
    reporter: &'a mut R,
    summary: RenameSummary,
}

impl<'a, R: Reporter + ?Sized> ProjectRenamer<'a, R> {
    pub fn new(config: &'a RenameConfig, reporter: &'a mut R) -> Result<Self> {
        Ok(Self {
            pattern: NamePattern::new(&config.old_name, &config.new_name)?,
            config,
            reporter,
            summary: RenameSummary::default(),
        })
    }

    pub fn summary(&self) -> RenameSummary {
        self.summary
    }

    /// Process every visible, non-ignored child of `dir`, recursively.
    pub fn process_directory(&mut self, dir: &Path) -> Result<()> {
        for node in list_children(dir)? {
            if !should_process(node.name(), &self.config.ignore) {
                continue;
            }

            match node {
                FsNode::Dir { path, .. } => {
                    let current = self.change_directory_name(&path)?;
                    self.process_directory(&current)?;
                }
                FsNode::File { path, .. } => {
                    self.change_file_content(&path)?;
                    self.change_file_name(&path)?;
                }
            }
        }
        Ok(())
    }

    /// Rename the directory at `path` if its name contains the old name.
    ///
    /// Returns the path the directory can be found at afterwards. In a dry
    /// run nothing moves, so that is always `path`.
    pub fn change_directory_name(&mut self, path: &Path) -> Result<PathBuf> {
        let Some(target) = self.renamed_path(path)? else {
            return Ok(path.to_path_buf());
        };

        self.move_entry(path, &target)?;
        self.summary.directories_renamed += 1;
        self.emit(RenameEvent::DirectoryRenamed {
            from: path.to_path_buf(),
            to: target.clone(),
        })?;

        if self.config.dry_run {
            Ok(path.to_path_buf())
        } else {
            Ok(target)
        }
    }

    /// Rename the file at `path` if its name contains the old name.
    pub fn change_file_name(&mut self, path: &Path) -> Result<PathBuf> {
        let Some(target) = self.renamed_path(path)? else {
            return Ok(path.to_path_buf());
        };

        self.move_entry(path, &target)?;
        self.summary.files_renamed += 1;
        self.emit(RenameEvent::FileRenamed {
            from: path.to_path_buf(),
            to: target.clone(),
        })?;

        if self.config.dry_run {
            Ok(path.to_path_buf())
        } else {
            Ok(target)
        }
    }

    /// Rewrite the content of the file at `path`, writing only on change.
    ///
    /// Files that are not valid UTF-8 are left as they are. Returns whether
    /// the content changed.
    pub fn change_file_content(&mut self, path: &Path) -> Result<bool> {
        let bytes = fs::read(path).map_err(|e| Error::io("cannot read", path, e))?;
        let Ok(content) = String::from_utf8(bytes) else {
            return Ok(false);
        };

        let substitution = self.pattern.replace(&content);
        self.report_unrecognized(path, &substitution.unrecognized)?;
        if !substitution.changed() {
            return Ok(false);
        }

        if !self.config.dry_run {
            fs::write(path, substitution.text.as_bytes())
                .map_err(|e| Error::io("cannot write", path, e))?;
        }
        self.summary.files_rewritten += 1;
        self.emit(RenameEvent::ContentUpdated {
            path: path.to_path_buf(),
        })?;
        Ok(true)
    }

    /// Target path for renaming `path`, or `None` when its name has no
    /// occurrence of the old name. Only the final component is rewritten;
    /// the parent is already the effective location.
    ///
    /// Names that are not valid UTF-8 are never rewritten. If one looks like
    /// it contains the old name, a warning is reported instead.
    fn renamed_path(&mut self, path: &Path) -> Result<Option<PathBuf>> {
        let Some(file_name) = path.file_name() else {
            return Ok(None);
        };
        let Some(name) = file_name.to_str() else {
            if self.pattern.is_match(&file_name.to_string_lossy()) {
                self.emit(RenameEvent::NameNotUtf8 {
                    path: path.to_path_buf(),
                })?;
            }
            return Ok(None);
        };

        let substitution = self.pattern.replace(name);
        self.report_unrecognized(path, &substitution.unrecognized)?;
        if !substitution.changed() {
            return Ok(None);
        }

        Ok(Some(path.with_file_name(&*substitution.text)))
    }

    fn move_entry(&self, from: &Path, to: &Path) -> Result<()> {
        if is_taken(from, to) {
            return Err(Error::Collision {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            });
        }
        if self.config.dry_run {
            return Ok(());
        }
        fs::rename(from, to).map_err(|e| Error::io("cannot rename", from, e))
    }

    fn report_unrecognized(&mut self, path: &Path, occurrences: &[String]) -> Result<()> {
        for matched in occurrences {
            self.emit(RenameEvent::UnrecognizedCase {
                path: path.to_path_buf(),
                matched: matched.clone(),
                replacement: self.pattern.new_name().to_string(),
            })?;
        }
        Ok(())
    }

    fn emit(&mut self, event: RenameEvent) -> Result<()> {
        self.reporter.report(event).map_err(Error::Output)
    }
}

/// Whether `to` already names an entry other than `from`. A case-only
/// rename on a case-insensitive filesystem resolves both to the same entry.
fn is_taken(from: &Path, to: &Path) -> bool {
    if to.symlink_metadata().is_err() {
        return false;
    }
    match (fs::canonicalize(from), fs::canonicalize(to)) {
        (Ok(a), Ok(b)) => a != b,
        _ => true,
    }
}
