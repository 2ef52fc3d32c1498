//! Error types shared by the indexer and the renamer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while walking, indexing or renaming a directory tree.
#[derive(Debug, Error)]
pub enum Error {
    /// A filesystem call failed on the given path.
    #[error("{action} '{path}': {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rename target is already taken by another entry.
    #[error("cannot rename '{from}' to '{to}': target already exists")]
    Collision { from: PathBuf, to: PathBuf },

    /// The name to search for could not be turned into a pattern.
    #[error("invalid name pattern '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// The name to search for is empty.
    #[error("project name must not be empty")]
    EmptyName,

    /// The root given to a tool is not a directory.
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    /// Progress or result output could not be written.
    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an `io::Error` with the action and path it happened on.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
