//! Progress reporting for in-flight downloads.
//!
//! The fetcher publishes cumulative byte counts through a `watch` channel;
//! consumers (the CLI progress bar, a host UI) sample the latest value at
//! their own pace. When the response declares no `content-length`, `total`
//! stays 0 and consumers degrade to a count-up display.

use tokio::sync::watch;

/// Progress update sent through the watch channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Bytes downloaded so far.
    pub downloaded: u64,
    /// Total bytes to download, or 0 when unknown.
    pub total: u64,
    /// Monotonically increasing sequence number for change detection.
    pub seq: u64,
}

impl ProgressUpdate {
    /// Create a new progress update with a sequence number.
    #[must_use]
    pub const fn new(downloaded: u64, total: u64, seq: u64) -> Self {
        Self {
            downloaded,
            total,
            seq,
        }
    }

    /// Whether the total is known.
    #[must_use]
    pub const fn has_total(&self) -> bool {
        self.total > 0
    }
}

/// Create a progress channel primed with a zero update.
#[must_use]
pub fn progress_channel() -> (
    watch::Sender<ProgressUpdate>,
    watch::Receiver<ProgressUpdate>,
) {
    watch::channel(ProgressUpdate::default())
}
