//! Root path resolution for the command-line tools

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve the root a tool operates on.
///
/// `None` means the current directory. Otherwise `~` is expanded, relative
/// paths are taken from the current directory, and the result is
/// canonicalised so `.` and `..` disappear. Fails if the path does not exist.
pub fn resolve_root(arg: Option<&str>) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::io("cannot read", ".", e))?;
    resolve_root_from(&cwd, arg)
}

/// [`resolve_root`] against an explicit base directory.
pub fn resolve_root_from(base: &Path, arg: Option<&str>) -> Result<PathBuf> {
    let path = match arg {
        None => base.to_path_buf(),
        Some(raw) => base.join(shellexpand::tilde(raw).as_ref()),
    };
    path.canonicalize()
        .map_err(|e| Error::io("cannot access", &path, e))
}
