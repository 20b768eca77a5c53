//! Authentication token resolution.
//!
//! A token is a plain string obtained from exactly one of three sources.
//! Resolution is performed fresh on every invocation; nothing is cached and
//! no validation of token shape or expiry happens here.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from token resolution.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A file-backed token source could not be read.
    #[error("Failed to read token file {path}: {reason}")]
    FileRead {
        /// The token file that could not be read.
        path: PathBuf,
        /// Underlying error message.
        reason: String,
    },
}

/// Where a token's value comes from.
///
/// The serde discriminators match the strings used in serialized node graphs,
/// so existing workflows keep deserializing.
///
/// Historical quirk, preserved: `Plain` reads the token from the file named
/// by the value, exactly like `FilePath`, rather than treating the value as
/// the literal token. Consolidating the two would silently change the
/// meaning of saved graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenSource {
    /// Historical alias of `FilePath`: the value names a file whose contents
    /// are the token.
    #[serde(rename = "plain")]
    Plain,
    /// The value names an environment variable; unset resolves to no token.
    #[serde(rename = "environment variable")]
    EnvVar,
    /// The value names a file whose contents are the token.
    #[serde(rename = "path to file")]
    FilePath,
}

impl TokenSource {
    /// The serialized discriminator string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::EnvVar => "environment variable",
            Self::FilePath => "path to file",
        }
    }

    /// All source kinds, in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Plain, Self::EnvVar, Self::FilePath]
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "env" | "environment variable" => Ok(Self::EnvVar),
            "file" | "path to file" => Ok(Self::FilePath),
            other => Err(format!(
                "unknown token source '{other}' (expected plain, env, or file)"
            )),
        }
    }
}

/// Resolve a token from its source.
///
/// - File-backed kinds return the file contents as-is (no trimming); an
///   unreadable file is an error.
/// - The environment kind returns `None` when the variable is unset or not
///   valid Unicode; absence is not an error.
pub fn resolve_token(source: TokenSource, value: &str) -> Result<Option<String>, TokenError> {
    match source {
        TokenSource::Plain | TokenSource::FilePath => {
            let path = PathBuf::from(value);
            let contents = fs::read_to_string(&path).map_err(|e| TokenError::FileRead {
                path,
                reason: e.to_string(),
            })?;
            Ok(Some(contents))
        }
        TokenSource::EnvVar => match env::var(value) {
            Ok(token) => Ok(Some(token)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                tracing::warn!(variable = value, "token variable is not valid unicode");
                Ok(None)
            }
        },
    }
}
