//! The Downloader node operation.
//!
//! One invocation per pipeline execution: optional force-delete, existence
//! check, directory ensure, streaming fetch, summary append. The summary log
//! is taken by value and returned updated; the host threads it between
//! chained nodes.

use tokio::sync::watch;

use nodefetch_core::{
    DownloadOutcome, DownloadRequest, DownloadSummary, FetchResult, ensure_absent,
    ensure_directory, is_present,
};

use crate::fetcher::fetch_to_file;
use crate::http::HttpBackend;
use crate::progress::ProgressUpdate;

/// Execute one Downloader invocation.
///
/// With `force` set, any existing file at the target path is removed first
/// (removal of an already-absent file is not an error). If the file is then
/// present, no network I/O happens and the outcome is `AlreadyPresent`;
/// otherwise the directory is created as needed and the URL is fetched.
///
/// On success the target file exists and the returned summary carries
/// exactly one new entry. On failure the summary is not extended and a
/// partially written file may remain on disk.
pub async fn run_download(
    backend: &dyn HttpBackend,
    request: &DownloadRequest,
    summary: DownloadSummary,
    progress_tx: Option<&watch::Sender<ProgressUpdate>>,
) -> FetchResult<(DownloadSummary, DownloadOutcome)> {
    let target = request.target_path();

    if request.force {
        ensure_absent(&target)?;
    }

    let outcome = if is_present(&request.directory, &request.file_name) {
        DownloadOutcome::AlreadyPresent { path: target }
    } else {
        ensure_directory(&request.directory)?;
        let bytes = fetch_to_file(
            backend,
            &request.url,
            &target,
            request.token.as_deref(),
            progress_tx,
        )
        .await?;
        tracing::info!(url = %request.url, path = %target.display(), bytes, "downloaded file");
        DownloadOutcome::Downloaded {
            url: request.url.clone(),
            path: target,
            bytes,
        }
    };

    let summary = summary.record(outcome.summary_line());
    Ok((summary, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;

    fn request(dir: &std::path::Path, url: &str) -> DownloadRequest {
        DownloadRequest::new(url, dir, "a.bin")
    }

    #[tokio::test]
    async fn test_download_writes_file_and_records_summary() {
        let backend = FakeBackend::new().with_body_chunks(&[b"hel", b"lo"]);
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "https://example.com/a.bin");

        let (summary, outcome) = run_download(&backend, &req, DownloadSummary::new(), None)
            .await
            .unwrap();

        assert!(is_present(dir.path(), "a.bin"));
        assert_eq!(std::fs::read(req.target_path()).unwrap(), b"hello");
        assert!(matches!(outcome, DownloadOutcome::Downloaded { bytes: 5, .. }));
        assert_eq!(summary.len(), 1);
        assert_eq!(
            summary.entries().next().unwrap(),
            format!(
                "downloaded https://example.com/a.bin to {}",
                req.target_path().display()
            )
        );
    }

    #[tokio::test]
    async fn test_second_invocation_performs_no_network_io() {
        let backend = FakeBackend::new().with_body_chunks(&[b"data"]);
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "https://example.com/a.bin");

        let (summary, _) = run_download(&backend, &req, DownloadSummary::new(), None)
            .await
            .unwrap();
        let (summary, outcome) = run_download(&backend, &req, summary, None).await.unwrap();

        // Exactly one request hit the backend; the second run found the file
        assert_eq!(backend.requests().len(), 1);
        assert!(matches!(outcome, DownloadOutcome::AlreadyPresent { .. }));
        assert_eq!(summary.len(), 2);

        let path = req.target_path();
        assert_eq!(
            summary.render(),
            format!(
                "\n- downloaded https://example.com/a.bin to {p}\n- {p} present\n",
                p = path.display()
            )
        );
    }

    #[tokio::test]
    async fn test_force_deletes_before_existence_check() {
        let backend = FakeBackend::new().with_body_chunks(&[b"fresh"]);
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "https://example.com/a.bin").with_force(true);

        std::fs::write(req.target_path(), b"stale").unwrap();

        let (_, outcome) = run_download(&backend, &req, DownloadSummary::new(), None)
            .await
            .unwrap();

        assert_eq!(backend.requests().len(), 1);
        assert!(matches!(outcome, DownloadOutcome::Downloaded { .. }));
        assert_eq!(std::fs::read(req.target_path()).unwrap(), b"fresh");
    }

    #[tokio::test]
    async fn test_force_with_no_existing_file_succeeds() {
        let backend = FakeBackend::new().with_body_chunks(&[b"fresh"]);
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "https://example.com/a.bin").with_force(true);

        let result = run_download(&backend, &req, DownloadSummary::new(), None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_token_attached_for_allowed_origin() {
        let backend = FakeBackend::new().with_body_chunks(&[b"model"]);
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "https://huggingface.co/org/model/resolve/main/a.bin")
            .with_token(Some("hf_secret".to_string()));

        run_download(&backend, &req, DownloadSummary::new(), None)
            .await
            .unwrap();

        assert_eq!(backend.requests()[0].bearer.as_deref(), Some("hf_secret"));
    }

    #[tokio::test]
    async fn test_token_omitted_for_unlisted_origin() {
        let backend = FakeBackend::new().with_body_chunks(&[b"model"]);
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "https://example.com/a.bin")
            .with_token(Some("hf_secret".to_string()));

        run_download(&backend, &req, DownloadSummary::new(), None)
            .await
            .unwrap();

        // Download proceeds, but without the Authorization header
        assert_eq!(backend.requests()[0].bearer, None);
        assert!(is_present(dir.path(), "a.bin"));
    }

    #[tokio::test]
    async fn test_http_error_propagates() {
        let backend = FakeBackend::new().with_status(403);
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "https://example.com/a.bin");

        let err = run_download(&backend, &req, DownloadSummary::new(), None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            nodefetch_core::FetchError::Network {
                status_code: Some(403),
                ..
            }
        ));
        assert!(!is_present(dir.path(), "a.bin"));
    }
}
