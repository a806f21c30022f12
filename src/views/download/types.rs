use crate::api::{DownloadRequest, DownloadType};

/// Transient state behind the download form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub url: String,
    pub download_type: DownloadType,
    pub format: String,
    pub quality: String,
    pub direct_download: bool,
}

impl FormState {
    /// Snapshot of the form as a request. Blank optional fields are left out
    /// so the backend (or the configured defaults) decides.
    pub fn to_request(&self) -> DownloadRequest {
        DownloadRequest {
            url: self.url.trim().to_string(),
            download_type: self.download_type,
            format: non_blank(&self.format),
            quality: non_blank(&self.quality),
            direct_download: self.direct_download,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

// Options offered by the download type select
pub const DOWNLOAD_TYPE_OPTIONS: [(DownloadType, &str); 2] = [
    (DownloadType::Video, "Video (default)"),
    (DownloadType::Audio, "Audio Only"),
];
