#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod downloader;
mod fetcher;
mod http;
mod origin;
mod progress;

// Re-export core types for convenience
pub use nodefetch_core::{
    DownloadOutcome, DownloadRequest, DownloadSummary, FetchError, FetchResult,
};

pub use downloader::run_download;
pub use fetcher::fetch_to_file;
pub use http::{BackendConfig, HttpBackend, HttpResponseBody, ReqwestBackend};
pub use origin::origin_accepts_token;
pub use progress::{ProgressUpdate, progress_channel};
