//! Download domain types.
//!
//! Pure value types describing a single Downloader invocation: the request,
//! the outcome, and the error vocabulary shared with adapter crates.

mod errors;
mod types;

pub use errors::{FetchError, FetchResult};
pub use types::{DownloadOutcome, DownloadRequest};
