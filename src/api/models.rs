use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::WireDialect;

/// Format and quality the backend assumes when the request leaves them out.
pub const SERVER_DEFAULT_FORMAT: &str = "mp4";
pub const SERVER_DEFAULT_QUALITY: &str = "best";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadType {
    #[default]
    Video,
    Audio,
}

impl DownloadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadType::Video => "video",
            DownloadType::Audio => "audio",
        }
    }

    /// Maps a `<select>` value back to a type; anything unknown is video.
    pub fn from_value(value: &str) -> Self {
        match value {
            "audio" => DownloadType::Audio,
            _ => DownloadType::Video,
        }
    }
}

/// One submission to `/download`, built fresh from the form on every submit.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    pub url: String,
    pub download_type: DownloadType,
    pub format: Option<String>,
    pub quality: Option<String>,
    pub direct_download: bool,
}

impl DownloadRequest {
    /// JSON body in the field naming the backend expects.
    pub fn to_body(&self, wire: WireDialect, fill_defaults: bool) -> Value {
        let mut body = Map::new();
        body.insert("url".to_string(), json!(self.url));
        body.insert("type".to_string(), json!(self.download_type));

        let format = self
            .format
            .clone()
            .or_else(|| fill_defaults.then(|| SERVER_DEFAULT_FORMAT.to_string()));
        if let Some(format) = format {
            body.insert("format".to_string(), json!(format));
        }

        let quality = self
            .quality
            .clone()
            .or_else(|| fill_defaults.then(|| SERVER_DEFAULT_QUALITY.to_string()));
        if let Some(quality) = quality {
            body.insert("quality".to_string(), json!(quality));
        }

        body.insert(
            wire.direct_download_key().to_string(),
            json!(self.direct_download),
        );
        Value::Object(body)
    }
}

/// Response to a regular (non-direct) submission.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadyResponse {
    pub title: String,
}

/// Response to a direct-download submission.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectResponse {
    pub download_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DownloadResult {
    /// The backend fetched the media; `title` is shown to the user.
    Ready { title: String },
    /// The browser should navigate to this backend path to receive the file.
    Direct { download_url: String },
}

/// Response from `/version`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VersionInfo {
    pub yt_dlp_version: String,
    #[serde(default)]
    pub python_version: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

/// Response from `/update-ytdlp`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateInfo {
    pub new_version: String,
    #[serde(default)]
    pub message: Option<String>,
}
