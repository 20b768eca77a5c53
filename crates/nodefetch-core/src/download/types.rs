//! Request and outcome value types for the Downloader node.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths::target_path;

/// Request describing one Downloader invocation.
///
/// This is a pure data structure created fresh per invocation and never
/// persisted. The optional token is carried as an already-resolved string;
/// source selection happens in [`crate::token`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Source URL to fetch.
    pub url: String,
    /// Directory the file is written into (created if missing).
    pub directory: PathBuf,
    /// File name within `directory`.
    pub file_name: String,
    /// Delete any existing file at the target path before the existence check.
    pub force: bool,
    /// Bearer token, attached only for allow-listed origins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl DownloadRequest {
    /// Create a new request with required fields.
    pub fn new(
        url: impl Into<String>,
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            directory: directory.into(),
            file_name: file_name.into(),
            force: false,
            token: None,
        }
    }

    /// Set whether to force re-download.
    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set an optional bearer token.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Full path of the target file.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        target_path(&self.directory, &self.file_name)
    }
}

/// Result of a successful Downloader invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadOutcome {
    /// The file was fetched from the network.
    Downloaded {
        /// Source URL.
        url: String,
        /// Where the file was written.
        path: PathBuf,
        /// Bytes written to disk.
        bytes: u64,
    },
    /// The file was already on disk; no network I/O happened.
    AlreadyPresent {
        /// The pre-existing file.
        path: PathBuf,
    },
}

impl DownloadOutcome {
    /// The one-line entry recorded in the [`crate::DownloadSummary`].
    #[must_use]
    pub fn summary_line(&self) -> String {
        match self {
            Self::Downloaded { url, path, .. } => {
                format!("downloaded {url} to {}", path.display())
            }
            Self::AlreadyPresent { path } => format!("{} present", path.display()),
        }
    }

    /// Path of the file guaranteed to exist after this outcome.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Downloaded { path, .. } | Self::AlreadyPresent { path } => path,
        }
    }
}
