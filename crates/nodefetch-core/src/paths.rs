//! Filesystem primitives for the Downloader node.
//!
//! Existence check, directory creation, and idempotent file removal. All
//! operations are synchronous `std::fs`; the only async I/O in the system is
//! the network fetch itself.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from filesystem primitives.
#[derive(Debug, Error)]
pub enum PathError {
    /// The path exists but is not a directory.
    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Directory creation failed.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed {
        /// The directory that could not be created.
        path: PathBuf,
        /// Underlying error message.
        reason: String,
    },

    /// File removal failed.
    #[error("Failed to remove file {path}: {reason}")]
    RemoveFailed {
        /// The file that could not be removed.
        path: PathBuf,
        /// Underlying error message.
        reason: String,
    },
}

/// Full path of a file within a directory.
#[must_use]
pub fn target_path(directory: &Path, file_name: &str) -> PathBuf {
    directory.join(file_name)
}

/// Check whether a regular file is present at `directory/file_name`.
///
/// Pure predicate: a missing directory simply yields `false`.
#[must_use]
pub fn is_present(directory: &Path, file_name: &str) -> bool {
    target_path(directory, file_name).is_file()
}

/// Ensure the directory exists, creating it (and parents) if missing.
///
/// Returns `true` if the directory was created, `false` if it already
/// existed. `create_dir_all` treats a concurrent create by another process
/// as success, so check-then-create races are tolerated.
pub fn ensure_directory(path: &Path) -> Result<bool, PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::info!(path = %path.display(), "created directory");
    Ok(true)
}

/// Remove the file at `path` if it exists.
///
/// Returns `true` if a file was removed, `false` if nothing was there.
/// Removal of an already-absent file is not an error.
pub fn ensure_absent(path: &Path) -> Result<bool, PathError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(PathError::RemoveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
