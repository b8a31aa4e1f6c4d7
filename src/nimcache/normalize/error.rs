use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a normalization pass.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Two generated files decode to the same name.
    #[error("`{}` and `{}` both decode to `{}`", .first.display(), .second.display(), .target.display())]
    Collision {
        /// Shared target of both files.
        target: PathBuf,
        /// File that claimed the target first, in name order.
        first: PathBuf,
        /// File that claimed the target second.
        second: PathBuf,
    },

    /// The decoded name of a file is already taken.
    #[error("cannot rename `{}`: `{}` already exists", .path.display(), .target.display())]
    TargetExists {
        /// File that would have been renamed.
        path: PathBuf,
        /// Existing entry.
        target: PathBuf,
    },

    /// Listing the directory or renaming a file failed.
    #[error("I/O error on `{}`", .path.display())]
    Io {
        /// Path of the entry the operation was working on.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}

impl NormalizeError {
    pub(super) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
