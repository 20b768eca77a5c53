#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod download;
pub mod node;
pub mod paths;
pub mod summary;
pub mod token;

// Re-export commonly used types for convenience
pub use download::{DownloadOutcome, DownloadRequest, FetchError, FetchResult};
pub use node::{InputSpec, NodeDescriptor, OutputSpec, ValueKind, registry};
pub use paths::{PathError, ensure_absent, ensure_directory, is_present, target_path};
pub use summary::DownloadSummary;
pub use token::{TokenError, TokenSource, resolve_token};
