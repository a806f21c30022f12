use std::future::Future;

use url::Url;

use crate::api::{ApiClient, ApiError, DownloadRequest, DownloadResult};
use crate::common::Toaster;

/// What the form should do once a submission settles.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Send the browser to the file URL.
    Navigate(Url),
    Notify(Toaster),
}

// Submit the request and turn the result into something the UI can act on
pub async fn submit_request(client: &ApiClient, request: DownloadRequest) -> SubmitOutcome {
    match client.submit_download(&request).await {
        Ok(DownloadResult::Ready { title }) => {
            tracing::info!("Download ready: {}", title);
            SubmitOutcome::Notify(Toaster::Success(format!(
                "Video \"{}\" is ready for download",
                title
            )))
        }
        Ok(DownloadResult::Direct { download_url }) => match client.file_url(&download_url) {
            Ok(url) => SubmitOutcome::Navigate(url),
            Err(e) => SubmitOutcome::Notify(Toaster::Error(e.to_string())),
        },
        Err(e) => {
            tracing::warn!("Download request failed: {}", e);
            SubmitOutcome::Notify(Toaster::Error(e.to_string()))
        }
    }
}

/// Raises the busy flag for the duration of `fut` and lowers it exactly once
/// when it completes. Failures arrive as values, so `fut` always completes.
pub async fn while_busy<F: Future>(mut set_busy: impl FnMut(bool), fut: F) -> F::Output {
    set_busy(true);
    let output = fut.await;
    set_busy(false);
    output
}

pub async fn run_network_test(client: &ApiClient) -> Toaster {
    match client.network_test().await {
        Ok(_) => Toaster::Success(format!(
            "Backend at {} is reachable",
            client.config().base_url
        )),
        Err(ApiError::TimedOut(limit)) => Toaster::Warning(format!(
            "Network test timed out after {} seconds",
            limit.as_secs_f32()
        )),
        Err(e) => Toaster::Error(format!("Network test failed: {}", e)),
    }
}

/// Returns the reported yt-dlp version alongside the toast to show.
pub async fn check_version(client: &ApiClient) -> (Option<String>, Toaster) {
    match client.version().await {
        Ok(info) => {
            let toast = Toaster::Info(format!("yt-dlp version: {}", info.yt_dlp_version));
            (Some(info.yt_dlp_version), toast)
        }
        Err(e) => (None, Toaster::Error(format!("Version check failed: {}", e))),
    }
}

/// Asks the backend to upgrade yt-dlp; returns the new version on success.
pub async fn update_ytdlp(client: &ApiClient) -> (Option<String>, Toaster) {
    match client.update_ytdlp().await {
        Ok(info) => {
            let toast = Toaster::Success(format!("yt-dlp updated to {}", info.new_version));
            (Some(info.new_version), toast)
        }
        Err(e) => (None, Toaster::Error(format!("Update failed: {}", e))),
    }
}
