//! The download summary log.
//!
//! An ordered, append-only sequence of human-readable outcome strings
//! threaded across chained node invocations. The host passes the log forward
//! as an opaque value; it is never shared mutable state. Each Downloader
//! invocation takes the log by value and returns it with exactly one entry
//! appended.

use serde::{Deserialize, Serialize};

/// Ordered, append-only log of download outcomes.
///
/// Created empty on first use, grown by one entry per Downloader invocation,
/// discarded at the end of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadSummary {
    entries: Vec<String>,
}

impl DownloadSummary {
    /// Create an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one outcome entry, returning the updated log.
    ///
    /// Value semantics on purpose: the caller hands the log in and receives
    /// it back, mirroring how the host's data-flow graph threads it between
    /// nodes.
    #[must_use]
    pub fn record(mut self, entry: impl Into<String>) -> Self {
        self.entries.push(entry.into());
        self
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Flatten the log into a single display string.
    ///
    /// A leading line break followed by one `- <entry>` line per entry, in
    /// log order. No escaping, truncation, or line-length limits.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = String::from("\n");
        for entry in &self.entries {
            text.push_str("- ");
            text.push_str(entry);
            text.push('\n');
        }
        text
    }
}
