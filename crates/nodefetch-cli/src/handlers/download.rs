//! The `download` subcommand.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};

use nodefetch_core::{DownloadRequest, DownloadSummary, TokenSource, resolve_token};
use nodefetch_download::{BackendConfig, ReqwestBackend, progress_channel, run_download};

/// Arguments for one `download` invocation.
pub struct DownloadArgs {
    pub url: String,
    pub dir: PathBuf,
    pub file_name: String,
    pub force: bool,
    /// A literal token, taking precedence over source-based resolution.
    pub token: Option<String>,
    pub token_source: Option<TokenSource>,
    pub token_value: Option<String>,
}

/// Run one Downloader invocation and print the rendered summary.
pub async fn execute(args: DownloadArgs) -> anyhow::Result<()> {
    let token = match (args.token, args.token_source, args.token_value) {
        (Some(token), _, _) => Some(token),
        (None, Some(source), Some(value)) => resolve_token(source, &value)?,
        _ => None,
    };

    let request = DownloadRequest::new(args.url, args.dir, args.file_name)
        .with_force(args.force)
        .with_token(token);

    let backend = ReqwestBackend::new(&BackendConfig::new());
    let (progress_tx, mut progress_rx) = progress_channel();

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
            .expect("progress template is valid")
            .progress_chars("█▓░"),
    );

    // Mirror watch-channel updates onto the bar until the sender drops
    let bar = pb.clone();
    let watcher = tokio::spawn(async move {
        while progress_rx.changed().await.is_ok() {
            let update = progress_rx.borrow_and_update().clone();
            if update.has_total() {
                bar.set_length(update.total);
            }
            bar.set_position(update.downloaded);
        }
    });

    let result = run_download(&backend, &request, DownloadSummary::new(), Some(&progress_tx)).await;
    drop(progress_tx);
    let _ = watcher.await;

    let (summary, _outcome) = result?;
    pb.finish_and_clear();

    print!("{}", summary.render());
    Ok(())
}
