//! Streaming fetch-to-disk.
//!
//! One synchronous-in-spirit pipeline per invocation: GET the URL, write the
//! body chunk by chunk to the destination, publish cumulative progress. No
//! retries, no resumption, no checksum verification. On failure the
//! partially written file is left in place.

use std::path::Path;

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tokio::sync::watch;
use url::Url;

use nodefetch_core::{FetchError, FetchResult, ensure_directory};

use crate::http::HttpBackend;
use crate::origin::origin_accepts_token;
use crate::progress::ProgressUpdate;

/// Download `url` to `dest`, returning the number of bytes written.
///
/// The destination's parent directory is created if missing. A supplied
/// token is attached as a bearer header only when the URL's origin is
/// allow-listed; otherwise a warning is logged and the request proceeds
/// unauthenticated.
///
/// Progress is published through `progress_tx` when given: cumulative bytes
/// against the response's declared total (0 when unknown). The destination
/// file contains exactly the concatenation of the response chunks in order.
pub async fn fetch_to_file(
    backend: &dyn HttpBackend,
    url: &str,
    dest: &Path,
    token: Option<&str>,
    progress_tx: Option<&watch::Sender<ProgressUpdate>>,
) -> FetchResult<u64> {
    let parsed = Url::parse(url).map_err(|e| FetchError::invalid_url(url, e.to_string()))?;

    let bearer = match token {
        Some(t) if origin_accepts_token(&parsed) => Some(t),
        Some(_) => {
            tracing::warn!(%url, "token given but origin not allow-listed, sending without it");
            None
        }
        None => None,
    };

    if let Some(parent) = dest.parent() {
        ensure_directory(parent)?;
    }

    let mut body = backend.get_stream(&parsed, bearer).await?;
    let total = body.content_length.unwrap_or(0);

    let mut file = tokio::fs::File::create(dest)
        .await
        .map_err(|e| FetchError::from_io_error(&e))?;

    let mut downloaded: u64 = 0;
    let mut seq: u64 = 0;
    while let Some(chunk) = body.stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .await
            .map_err(|e| FetchError::from_io_error(&e))?;
        downloaded += chunk.len() as u64;
        seq += 1;
        if let Some(tx) = progress_tx {
            tx.send_replace(ProgressUpdate::new(downloaded, total, seq));
        }
    }

    file.flush()
        .await
        .map_err(|e| FetchError::from_io_error(&e))?;

    tracing::debug!(%url, dest = %dest.display(), bytes = downloaded, "download complete");
    Ok(downloaded)
}
